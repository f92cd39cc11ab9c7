use crate::models::sentence::{SentenceDeck, SentencePair};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// JSON 数据集既可以是句子数组，也可以是带 name 的对象
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDeck {
    List(Vec<SentencePair>),
    Deck(SentenceDeck),
}

/// 从 JSON 文件加载句子集合
pub async fn load_json_deck(json_file_path: &Path) -> Result<SentenceDeck> {
    let content = fs::read_to_string(json_file_path)
        .await
        .with_context(|| format!("无法读取JSON文件: {}", json_file_path.display()))?;

    let deck = parse_json_deck(&content)
        .with_context(|| format!("无法解析JSON文件: {}", json_file_path.display()))?;

    Ok(deck.with_file_path(json_file_path.to_string_lossy().to_string()))
}

pub fn parse_json_deck(content: &str) -> Result<SentenceDeck> {
    let deck = match serde_json::from_str::<JsonDeck>(content)? {
        JsonDeck::List(pairs) => SentenceDeck::new(pairs),
        JsonDeck::Deck(deck) => deck,
    };
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_array() {
        let deck = parse_json_deck(
            r#"[{"zh": "你好", "vi": "Xin chào"}, {"source": "再见", "target": "Tạm biệt"}]"#,
        )
        .unwrap();
        assert_eq!(deck.len(), 2);
        assert!(deck.name.is_none());
        assert_eq!(deck.pairs[1].source_text, "再见");
    }

    #[test]
    fn parses_object_form() {
        let deck = parse_json_deck(
            r#"{"name": "问候语", "pairs": [{"source": "你好", "target": "Xin chào"}]}"#,
        )
        .unwrap();
        assert_eq!(deck.name.as_deref(), Some("问候语"));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_json_deck("[]").unwrap().is_empty());
    }
}
