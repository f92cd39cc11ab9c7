pub mod json_loader;
pub mod toml_loader;

pub use json_loader::{load_json_deck, parse_json_deck};
pub use toml_loader::{load_toml_deck, parse_toml_deck};

use crate::error::{AppError, DatasetError};
use crate::models::sentence::SentenceDeck;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 按路径加载数据集
///
/// - `.json` / `.toml` 文件：直接加载
/// - 目录：加载其中所有数据文件并合并
pub async fn load_deck(path: &Path) -> Result<SentenceDeck> {
    if !path.exists() {
        return Err(AppError::Dataset(DatasetError::NotFound {
            path: path.display().to_string(),
        })
        .into());
    }

    if path.is_dir() {
        return load_all_decks(path).await;
    }

    match DeckFormat::from_path(path) {
        Some(DeckFormat::Json) => load_json_deck(path).await,
        Some(DeckFormat::Toml) => load_toml_deck(path).await,
        None => Err(AppError::Dataset(DatasetError::UnsupportedFormat {
            path: path.display().to_string(),
        })
        .into()),
    }
}

/// 从文件夹中加载所有数据文件，按文件名顺序合并为一个集合
///
/// 单个文件加载失败只记录警告并跳过
pub async fn load_all_decks(folder: &Path) -> Result<SentenceDeck> {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut entries = fs::read_dir(folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if DeckFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        tracing::warn!("在文件夹 {} 中没有找到数据文件", folder.display());
    }

    let mut merged = SentenceDeck::default()
        .with_file_path(folder.to_string_lossy().to_string());

    for path in files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        let loaded = match DeckFormat::from_path(&path) {
            Some(DeckFormat::Json) => load_json_deck(&path).await,
            Some(DeckFormat::Toml) => load_toml_deck(&path).await,
            None => continue,
        };

        match loaded {
            Ok(deck) => {
                tracing::info!("成功加载 {} 个句子", deck.len());
                merged.extend(deck);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(merged)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeckFormat {
    Json,
    Toml,
}

impl DeckFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(Self::Json),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }
}
