//! 终端渲染
//!
//! 只读取 [`QuizView`] 快照生成文本，不修改任何状态

use std::fmt::Write;

use crate::config::Config;
use crate::quiz::{CheckResult, Phase, QuizView, SessionStats};
use crate::workflow::FlowOutcome;

/// 方向标签用的语言名称
#[derive(Debug, Clone)]
pub struct Labels {
    pub source: String,
    pub target: String,
}

impl Labels {
    pub fn from_config(config: &Config) -> Self {
        Self {
            source: config.source_label.clone(),
            target: config.target_label.clone(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub fn render_view(view: &QuizView, labels: &Labels) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(out, "🥑 句子翻译测验 🥑");
    let _ = writeln!(
        out,
        "方向: {}",
        view.direction.label(&labels.source, &labels.target)
    );

    match view.phase {
        Phase::NotStarted => {
            let _ = writeln!(out, "\n共 {} 句，输入 :n 开始", view.total);
        }
        Phase::Finished => {
            let _ = writeln!(out, "\n🎉 全部完成！");
            let _ = writeln!(out, "{}", view.stats);
            let _ = writeln!(out, "输入 :r 重新开始，:q 退出");
        }
        Phase::Unrevealed | Phase::Revealed => {
            let _ = writeln!(out, "剩余: {} 句", view.remaining);
            let displayed = view.displayed.as_deref().unwrap_or_default();
            if view.revealed {
                let _ = writeln!(out, "\n  ✔ {}", displayed);
            } else {
                let _ = writeln!(out, "\n  {}", displayed);
            }
            match view.last_check {
                CheckResult::Correct => {
                    let _ = writeln!(out, "\n✅ 正确！");
                }
                CheckResult::Incorrect => {
                    let _ = writeln!(out, "\n❌ 不对，再试一次！");
                }
                CheckResult::Unknown => {}
            }
            let primary = if view.revealed { "下一句" } else { "看答案" };
            let _ = writeln!(
                out,
                "\n[回车] 提交  [:n] {}  [:s] 跳过  [:w] 切换方向  [:q] 退出",
                primary
            );
        }
    }
    out
}

/// 退出时的最终统计
pub fn render_final_summary(rounds: usize, stats: &SessionStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(40));
    let _ = writeln!(out, "📊 测验结束: 完成 {} 轮", rounds);
    let _ = writeln!(out, "{}", stats);
    let _ = writeln!(out, "{}", "=".repeat(40));
    out
}

/// 意图处理结果的简短提示
pub fn feedback(outcome: FlowOutcome) -> Option<&'static str> {
    match outcome {
        FlowOutcome::EmptyInput => Some("请先输入答案"),
        FlowOutcome::Ignored => Some("当前无法执行该操作"),
        FlowOutcome::DirectionToggled(_) => Some("已切换方向"),
        FlowOutcome::Skipped { .. } => Some("已跳过"),
        _ => None,
    }
}
