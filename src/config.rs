use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 程序配置
///
/// 优先级：默认值 < 配置文件 (TOML) < 环境变量 < 命令行参数
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 数据集路径（.json / .toml 文件或目录）
    pub dataset_path: String,
    /// 源语言显示名称
    pub source_label: String,
    /// 目标语言显示名称
    pub target_label: String,
    /// 是否以 目标 → 源 方向开始
    pub reversed: bool,
    /// 固定洗牌种子，用于复现顺序
    pub shuffle_seed: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: "data/sentences.json".to_string(),
            source_label: "Trung".to_string(),
            target_label: "Việt".to_string(),
            reversed: false,
            shuffle_seed: None,
            verbose_logging: false,
            output_log_file: "quiz_log.txt".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量加载（未设置的项使用默认值）
    pub fn from_env() -> AppResult<Self> {
        Self::default().apply_env_from(|name| std::env::var(name).ok())
    }

    /// 从 TOML 配置文件加载，缺失的字段使用默认值
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    fn from_toml_str(content: &str, path: &Path) -> AppResult<Self> {
        let config = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 完整加载流程：可选配置文件，再叠加环境变量
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let base = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.apply_env_from(|name| std::env::var(name).ok())
    }

    /// 用环境变量覆盖当前配置
    pub fn apply_env_from<F>(self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            dataset_path: lookup("QUIZ_DATASET").unwrap_or(self.dataset_path),
            source_label: lookup("QUIZ_SOURCE_LABEL").unwrap_or(self.source_label),
            target_label: lookup("QUIZ_TARGET_LABEL").unwrap_or(self.target_label),
            reversed: parse_var(&lookup, "QUIZ_REVERSED", "bool")?.unwrap_or(self.reversed),
            shuffle_seed: parse_var(&lookup, "QUIZ_SHUFFLE_SEED", "u64")?.or(self.shuffle_seed),
            verbose_logging: parse_var(&lookup, "QUIZ_VERBOSE_LOGGING", "bool")?
                .unwrap_or(self.verbose_logging),
            output_log_file: lookup("QUIZ_OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
        })
    }
}

fn parse_var<T, F>(lookup: &F, var_name: &str, expected_type: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn env_overrides_defaults() {
        let config = Config::default()
            .apply_env_from(env(&[
                ("QUIZ_DATASET", "decks/"),
                ("QUIZ_REVERSED", "true"),
                ("QUIZ_SHUFFLE_SEED", "42"),
            ]))
            .unwrap();

        assert_eq!(config.dataset_path, "decks/");
        assert!(config.reversed);
        assert_eq!(config.shuffle_seed, Some(42));
        assert_eq!(config.source_label, "Trung");
    }

    #[test]
    fn bad_env_value_is_reported() {
        let err = Config::default()
            .apply_env_from(env(&[("QUIZ_SHUFFLE_SEED", "abc")]))
            .unwrap_err();

        match err {
            AppError::Config(ConfigError::EnvVarParseFailed { var_name, .. }) => {
                assert_eq!(var_name, "QUIZ_SHUFFLE_SEED")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            source_label = "中文"
            shuffle_seed = 7
            "#,
            Path::new("quiz.toml"),
        )
        .unwrap();

        assert_eq!(config.source_label, "中文");
        assert_eq!(config.shuffle_seed, Some(7));
        assert_eq!(config.target_label, "Việt");
        assert_eq!(config.output_log_file, "quiz_log.txt");
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = Config::from_toml_str("reversed = \"maybe\"", Path::new("quiz.toml")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::TomlParseFailed { .. })
        ));
    }
}
