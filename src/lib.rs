//! # Sentence Quiz
//!
//! 双语句子翻译测验：随机顺序逐句出题，输入译文后检查（忽略大小写和首尾空白），
//! 直到所有句子都出现过一次。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 只读的句子集合 `SentenceDeck` 及 JSON / TOML 加载器
//!
//! ### ② 核心层（Quiz）
//! - `quiz/` - 测验状态机 `QuizSession`，唯一持有可变状态
//! - `PresentationHook` - 展示层的可选回调（句子切换、本轮结束）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 把主按钮、回车、跳过等意图翻译成控制器操作
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 初始化配置和数据集，运行终端交互循环
//!
//! `ui/` 只根据 `QuizView` 快照渲染文本。

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod quiz;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{load_deck, SentenceDeck, SentencePair};
pub use orchestrator::{App, RunSummary};
pub use quiz::{CheckResult, Direction, Phase, PresentationHook, QuizSession, QuizView, SessionStats};
pub use workflow::{FlowOutcome, Intent, QuizFlow};
