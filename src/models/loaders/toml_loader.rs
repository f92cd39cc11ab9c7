use crate::models::sentence::SentenceDeck;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载句子集合
///
/// 文件格式：
///
/// ```toml
/// name = "问候语"
///
/// [[pairs]]
/// source = "你好"
/// target = "Xin chào"
/// ```
pub async fn load_toml_deck(toml_file_path: &Path) -> Result<SentenceDeck> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let deck = parse_toml_deck(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    Ok(deck.with_file_path(toml_file_path.to_string_lossy().to_string()))
}

pub fn parse_toml_deck(content: &str) -> Result<SentenceDeck> {
    let deck: SentenceDeck = toml::from_str(content)?;
    Ok(deck)
}
