//! 日志工具模块
//!
//! 提供日志格式化和会话记录的辅助函数

use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;

use crate::config::Config;
use crate::models::SentenceDeck;
use crate::quiz::SessionStats;

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
/// - `deck`: 本次使用的数据集
pub fn init_log_file(log_file_path: &str, deck: &SentenceDeck) -> Result<()> {
    let log_header = format!(
        "{}\n测验日志 - {}\n数据集: {} ({} 句)\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        deck.display_name(),
        deck.len(),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 追加一轮测验的统计
pub fn append_session_summary(log_file_path: &str, round: usize, stats: &SessionStats) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let line = format!(
        "[{}] 第 {} 轮完成 | {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        round,
        stats
    );
    file.write_all(line.as_bytes())?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 句子翻译测验");
    info!("📁 数据集: {}", config.dataset_path);
    info!(
        "🔀 洗牌种子: {}",
        config
            .shuffle_seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "随机".to_string())
    );
    info!("{}", "=".repeat(60));
}

/// 记录数据集加载信息
pub fn log_deck_loaded(deck: &SentenceDeck) {
    info!("✓ 数据集 {} 加载完成，共 {} 句", deck.display_name(), deck.len());
    if let Some(first) = deck.pairs.first() {
        info!("📋 第一句: {}", truncate_text(&first.source_text, 30));
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `rounds`: 完成的轮数
/// - `stats`: 最后一轮的统计
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(rounds: usize, stats: &SessionStats, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 测验结束统计");
    info!(
        "结束时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 完成轮数: {}", rounds);
    info!("📈 最后一轮: {}", stats);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
