//! 测验应用 - 编排层
//!
//! 负责初始化（配置、日志文件、数据集）、运行终端交互循环、输出最终统计

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{load_deck, SentenceDeck};
use crate::orchestrator::session_log::SessionLogHook;
use crate::quiz::{Direction, QuizSession, SessionStats};
use crate::ui::{feedback, render_final_summary, render_view, Labels};
use crate::utils::logging::{init_log_file, log_deck_loaded, log_startup, print_final_stats};
use crate::workflow::{FlowOutcome, Intent, QuizFlow};

/// 一次运行的汇总
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// 完成的轮数
    pub rounds: usize,
    /// 退出时的统计
    pub last_stats: SessionStats,
}

/// 应用主结构
pub struct App {
    config: Config,
    flow: QuizFlow,
    labels: Labels,
}

impl App {
    /// 初始化应用：加载数据集并写入日志文件头
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let deck = load_deck(Path::new(&config.dataset_path))
            .await
            .with_context(|| format!("无法加载数据集: {}", config.dataset_path))?;

        if deck.is_empty() {
            warn!("⚠️ 数据集为空，开始后会立即结束");
        }
        log_deck_loaded(&deck);

        if let Err(e) = init_log_file(&config.output_log_file, &deck) {
            warn!("无法初始化日志文件 {}: {}", config.output_log_file, e);
        }

        Ok(Self::with_deck(config, deck))
    }

    /// 使用已加载的数据集创建应用
    pub fn with_deck(config: Config, deck: SentenceDeck) -> Self {
        let mut session = match config.shuffle_seed {
            Some(seed) => QuizSession::with_seed(deck, seed),
            None => QuizSession::new(deck),
        }
        .with_direction(Direction::from_reversed(config.reversed));
        session.set_hook(Box::new(SessionLogHook::new(config.output_log_file.clone())));

        Self {
            labels: Labels::from_config(&config),
            config,
            flow: QuizFlow::new(session),
        }
    }

    pub fn flow(&self) -> &QuizFlow {
        &self.flow
    }

    /// 在标准输入/输出上运行
    pub async fn run(&mut self) -> Result<RunSummary> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();

        let summary = self.run_with(stdin, &mut stdout).await?;

        print_final_stats(summary.rounds, &summary.last_stats, &self.config.output_log_file);
        Ok(summary)
    }

    /// 交互循环：每行输入解析为一个意图，处理后重新渲染
    ///
    /// 输入结束或收到 `:q` 时返回
    pub async fn run_with<R, W>(&mut self, input: R, out: &mut W) -> Result<RunSummary>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let mut summary = RunSummary::default();

        self.draw(out, None)?;

        while let Some(line) = lines.next_line().await.context("读取输入失败")? {
            let outcome = self.flow.handle(Intent::parse_line(&line));

            match outcome {
                FlowOutcome::Quit => break,
                FlowOutcome::Advanced { finished: true } | FlowOutcome::Skipped { finished: true } => {
                    summary.rounds += 1;
                }
                // 空数据集开始后立即结束
                FlowOutcome::Started if self.flow.session().finished() => {
                    summary.rounds += 1;
                }
                _ => {}
            }

            self.draw(out, feedback(outcome))?;
        }

        summary.last_stats = self.flow.session().state().stats();
        write!(out, "{}", render_final_summary(summary.rounds, &summary.last_stats))?;
        out.flush()?;
        info!("👋 退出，共完成 {} 轮", summary.rounds);
        Ok(summary)
    }

    fn draw<W: Write>(&self, out: &mut W, notice: Option<&str>) -> Result<()> {
        if let Some(notice) = notice {
            writeln!(out, "→ {}", notice)?;
        }
        write!(out, "{}", render_view(&self.flow.session().view(), &self.labels))?;
        write!(out, "> ")?;
        out.flush()?;
        Ok(())
    }
}
