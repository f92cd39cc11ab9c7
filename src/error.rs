use thiserror::Error;

/// 应用程序错误类型
///
/// 测验控制器本身没有错误路径；这里只覆盖数据集加载和配置
#[derive(Debug, Error)]
pub enum AppError {
    /// 数据集相关错误
    #[error("数据集错误: {0}")]
    Dataset(#[from] DatasetError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 数据集错误
#[derive(Debug, Error)]
pub enum DatasetError {
    /// 路径不存在
    #[error("数据集路径不存在: {path}")]
    NotFound { path: String },
    /// 不支持的文件格式
    #[error("不支持的数据集格式 (仅支持 .json / .toml): {path}")]
    UnsupportedFormat { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
