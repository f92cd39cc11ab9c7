use tracing::{debug, warn};

use crate::quiz::{PresentationHook, SessionStats};
use crate::utils::logging::append_session_summary;

/// 终端下的展示回调：记录句子切换，每轮结束时把统计写入日志文件
pub struct SessionLogHook {
    log_file_path: String,
    rounds: usize,
}

impl SessionLogHook {
    pub fn new(log_file_path: impl Into<String>) -> Self {
        Self {
            log_file_path: log_file_path.into(),
            rounds: 0,
        }
    }
}

impl PresentationHook for SessionLogHook {
    fn on_pair_changed(&mut self, pair_index: usize) {
        debug!("当前句子: #{}", pair_index);
    }

    fn on_finished(&mut self, stats: &SessionStats) {
        self.rounds += 1;
        if let Err(e) = append_session_summary(&self.log_file_path, self.rounds, stats) {
            warn!("写入日志文件失败 {}: {}", self.log_file_path, e);
        }
    }
}
