use serde::{Deserialize, Serialize};

/// 一组双语句子
///
/// 数据集里的字段名可以是 `source`/`target`，也兼容旧数据的 `zh`/`vi`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    #[serde(rename = "source", alias = "zh", alias = "source_text", alias = "sourceText")]
    pub source_text: String,
    #[serde(rename = "target", alias = "vi", alias = "target_text", alias = "targetText")]
    pub target_text: String,
}

impl SentencePair {
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

/// 只读的句子集合，加载之后不再修改
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceDeck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub pairs: Vec<SentencePair>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl SentenceDeck {
    pub fn new(pairs: Vec<SentencePair>) -> Self {
        Self {
            name: None,
            pairs,
            file_path: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }

    /// 显示用名称：优先 name，其次文件路径
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.file_path.clone())
            .unwrap_or_else(|| "未命名".to_string())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SentencePair> {
        self.pairs.get(index)
    }

    /// 把另一组句子追加到末尾，保持原有顺序
    pub fn extend(&mut self, other: SentenceDeck) {
        self.pairs.extend(other.pairs);
    }
}

impl From<Vec<SentencePair>> for SentenceDeck {
    fn from(pairs: Vec<SentencePair>) -> Self {
        Self::new(pairs)
    }
}
