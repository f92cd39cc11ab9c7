use anyhow::Result;
use clap::Parser;
use sentence_quiz::{logger, App, Config};
use std::path::PathBuf;

/// 句子翻译测验
#[derive(Parser, Debug)]
#[command(name = "sentence-quiz", version)]
struct Args {
    /// 数据集路径（.json / .toml 文件或目录）
    #[arg(long)]
    dataset: Option<String>,
    /// TOML 配置文件
    #[arg(long)]
    config: Option<PathBuf>,
    /// 以 目标 → 源 方向开始
    #[arg(long, conflicts_with = "no_reverse")]
    reverse: bool,
    /// 以 源 → 目标 方向开始（覆盖配置文件和环境变量）
    #[arg(long)]
    no_reverse: bool,
    /// 固定洗牌种子
    #[arg(long)]
    seed: Option<u64>,
    /// 显示详细日志
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(dataset) = self.dataset {
            config.dataset_path = dataset;
        }
        if self.reverse {
            config.reversed = true;
        }
        if self.no_reverse {
            config.reversed = false;
        }
        if self.seed.is_some() {
            config.shuffle_seed = self.seed;
        }
        if self.verbose {
            config.verbose_logging = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置
    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    let mut app = App::initialize(config).await?;
    app.run().await?;

    Ok(())
}
