//! 测验状态
//!
//! `QuizState` 只由 [`QuizSession`](super::QuizSession) 修改，外部只读

use std::collections::VecDeque;
use std::fmt::Display;

/// 出题方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// 显示源语言，要求输入目标语言
    #[default]
    SourceToTarget,
    /// 显示目标语言，要求输入源语言
    TargetToSource,
}

impl Direction {
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Self::TargetToSource
        } else {
            Self::SourceToTarget
        }
    }

    pub fn is_reversed(self) -> bool {
        self == Self::TargetToSource
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::SourceToTarget => Self::TargetToSource,
            Self::TargetToSource => Self::SourceToTarget,
        }
    }

    /// 形如 "Trung → Việt" 的方向标签
    pub fn label(self, source_label: &str, target_label: &str) -> String {
        match self {
            Self::SourceToTarget => format!("{} → {}", source_label, target_label),
            Self::TargetToSource => format!("{} → {}", target_label, source_label),
        }
    }
}

/// 最近一次检查答案的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckResult {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

/// 测验所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Unrevealed,
    Revealed,
    Finished,
}

/// 本轮统计，仅用于显示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// 出现过的句子数
    pub shown: usize,
    /// 答对次数
    pub correct_checks: usize,
    /// 答错次数
    pub incorrect_checks: usize,
    /// 离开时已答对的句子数
    pub solved: usize,
    /// 跳过的句子数
    pub skipped: usize,
}

impl Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "已出现 {} 句 | 答对 {} 句 | 跳过 {} 句 | 检查 ✅{} ❌{}",
            self.shown, self.solved, self.skipped, self.correct_checks, self.incorrect_checks
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuizState {
    /// 本轮开始时确定的随机排列
    pub(crate) order: Vec<usize>,
    /// 尚未出现的索引
    pub(crate) pending: VecDeque<usize>,
    /// 当前句子的索引，None 表示没有进行中的句子
    pub(crate) cursor: Option<usize>,
    pub(crate) direction: Direction,
    pub(crate) revealed: bool,
    pub(crate) user_input: String,
    pub(crate) last_check: CheckResult,
    pub(crate) started: bool,
    pub(crate) stats: SessionStats,
}

impl QuizState {
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn last_check(&self) -> CheckResult {
        self.last_check
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn finished(&self) -> bool {
        self.started && self.cursor.is_none() && self.pending.is_empty()
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.cursor.is_none() {
            Phase::Finished
        } else if self.revealed {
            Phase::Revealed
        } else {
            Phase::Unrevealed
        }
    }

    pub fn remaining_count(&self) -> usize {
        self.pending.len() + usize::from(self.cursor.is_some())
    }

    /// 切换到下一句（或结束），清空与当前句相关的状态
    pub(crate) fn load_next(&mut self) -> Option<usize> {
        self.cursor = self.pending.pop_front();
        self.revealed = false;
        self.user_input.clear();
        self.last_check = CheckResult::Unknown;
        if self.cursor.is_some() {
            self.stats.shown += 1;
        }
        self.cursor
    }
}
