//! 编排层（Orchestration Layer）
//!
//! ```text
//! App (配置、数据集、终端循环)
//!     ↓
//! workflow::QuizFlow (按钮/回车 → 控制器操作)
//!     ↓
//! quiz::QuizSession (测验状态机)
//!     ↓
//! models (只读数据集)
//! ```

pub mod app;
pub mod session_log;

pub use app::{App, RunSummary};
pub use session_log::SessionLogHook;
