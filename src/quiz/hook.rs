use crate::quiz::state::SessionStats;

/// 展示层的可选回调
///
/// 句子切换后展示层通常需要把焦点放回输入框；控制器只负责通知
pub trait PresentationHook {
    /// 新的句子成为当前句子
    fn on_pair_changed(&mut self, _pair_index: usize) {}

    /// 本轮所有句子都已出现过
    fn on_finished(&mut self, _stats: &SessionStats) {}
}
