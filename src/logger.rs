use tracing_subscriber::EnvFilter;

/// 初始化 tracing
///
/// 日志写到 stderr，避免打乱终端界面；`RUST_LOG` 优先于 `verbose`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
