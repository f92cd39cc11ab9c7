//! 测验会话控制器
//!
//! 每轮把所有句子按随机顺序各出现一次，负责显示答案、检查答案、
//! 前进/跳过以及结束判断。所有操作都是全函数：不合法的调用直接忽略。

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::models::{SentenceDeck, SentencePair};
use crate::quiz::answer::answers_match;
use crate::quiz::hook::PresentationHook;
use crate::quiz::state::{CheckResult, Direction, Phase, QuizState, SessionStats};

/// 展示层读取的只读快照
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub phase: Phase,
    pub direction: Direction,
    pub prompt: Option<String>,
    /// 未显示答案时为题目，显示答案后为答案
    pub displayed: Option<String>,
    pub revealed: bool,
    pub user_input: String,
    pub last_check: CheckResult,
    pub remaining: usize,
    pub total: usize,
    pub stats: SessionStats,
}

pub struct QuizSession {
    deck: SentenceDeck,
    state: QuizState,
    rng: StdRng,
    hook: Option<Box<dyn PresentationHook>>,
}

impl QuizSession {
    pub fn new(deck: SentenceDeck) -> Self {
        Self::with_rng(deck, StdRng::from_entropy())
    }

    /// 固定种子，洗牌顺序可复现
    pub fn with_seed(deck: SentenceDeck, seed: u64) -> Self {
        Self::with_rng(deck, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(deck: SentenceDeck, rng: StdRng) -> Self {
        Self {
            deck,
            state: QuizState::default(),
            rng,
            hook: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.state.direction = direction;
        self
    }

    pub fn set_hook(&mut self, hook: Box<dyn PresentationHook>) {
        self.hook = Some(hook);
    }

    pub fn deck(&self) -> &SentenceDeck {
        &self.deck
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    // ========== 操作 ==========

    /// 开始新的一轮
    ///
    /// 丢弃上一轮的全部状态（方向设置除外），重新洗牌并取出第一句。
    /// 数据集为空时直接进入结束状态。
    pub fn start(&mut self) {
        let mut order: Vec<usize> = (0..self.deck.len()).collect();
        order.shuffle(&mut self.rng);

        self.state = QuizState {
            pending: order.iter().copied().collect(),
            order,
            direction: self.state.direction,
            started: true,
            ..QuizState::default()
        };
        self.state.load_next();

        debug!("开始新一轮: 共 {} 句", self.deck.len());
        self.after_transition();
    }

    /// 切换出题方向，不影响当前进度
    pub fn toggle_direction(&mut self) {
        self.state.direction = self.state.direction.flipped();
        debug!("切换方向: {:?}", self.state.direction);
    }

    /// 显示当前句子的答案
    pub fn reveal(&mut self) {
        if self.state.cursor.is_none() || self.state.revealed {
            return;
        }
        self.state.revealed = true;
    }

    /// 记录输入内容，不做检查
    pub fn set_input(&mut self, input: impl Into<String>) {
        if self.state.cursor.is_none() {
            return;
        }
        self.state.user_input = input.into();
    }

    /// 检查答案，只记录结果，不自动显示答案也不前进
    pub fn check_answer(&mut self, input: &str) -> CheckResult {
        let Some(expected) = self.current_expected_answer() else {
            return self.state.last_check;
        };

        let result = if answers_match(input, expected) {
            self.state.stats.correct_checks += 1;
            CheckResult::Correct
        } else {
            self.state.stats.incorrect_checks += 1;
            CheckResult::Incorrect
        };
        debug!("检查答案: {:?}", result);

        self.state.user_input = input.to_string();
        self.state.last_check = result;
        result
    }

    /// 前进到下一句；队列为空时结束本轮
    pub fn advance(&mut self) {
        if self.state.cursor.is_none() {
            return;
        }
        if self.state.last_check == CheckResult::Correct {
            self.state.stats.solved += 1;
        }
        self.move_to_next();
    }

    /// 跳过当前句，该句本轮不会再出现，也不计入答对
    pub fn skip(&mut self) {
        if self.state.cursor.is_none() {
            return;
        }
        self.state.stats.skipped += 1;
        self.move_to_next();
    }

    // ========== 只读访问 ==========

    pub fn current_pair(&self) -> Option<&SentencePair> {
        self.state.cursor.and_then(|index| self.deck.get(index))
    }

    pub fn current_prompt(&self) -> Option<&str> {
        let pair = self.current_pair()?;
        Some(match self.state.direction {
            Direction::SourceToTarget => &pair.source_text,
            Direction::TargetToSource => &pair.target_text,
        })
    }

    pub fn current_expected_answer(&self) -> Option<&str> {
        let pair = self.current_pair()?;
        Some(match self.state.direction {
            Direction::SourceToTarget => &pair.target_text,
            Direction::TargetToSource => &pair.source_text,
        })
    }

    pub fn displayed_text(&self) -> Option<&str> {
        if self.state.revealed {
            self.current_expected_answer()
        } else {
            self.current_prompt()
        }
    }

    pub fn remaining_count(&self) -> usize {
        self.state.remaining_count()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn finished(&self) -> bool {
        self.state.finished()
    }

    pub fn view(&self) -> QuizView {
        QuizView {
            phase: self.phase(),
            direction: self.state.direction,
            prompt: self.current_prompt().map(str::to_string),
            displayed: self.displayed_text().map(str::to_string),
            revealed: self.state.revealed,
            user_input: self.state.user_input.clone(),
            last_check: self.state.last_check,
            remaining: self.remaining_count(),
            total: self.deck.len(),
            stats: self.state.stats,
        }
    }

    fn move_to_next(&mut self) {
        self.state.load_next();
        self.after_transition();
    }

    fn after_transition(&mut self) {
        let Some(hook) = self.hook.as_mut() else {
            return;
        };
        match self.state.cursor {
            Some(index) => hook.on_pair_changed(index),
            None if self.state.finished() => hook.on_finished(&self.state.stats),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn deck(n: usize) -> SentenceDeck {
        (0..n)
            .map(|i| SentencePair::new(format!("源{i}"), format!("Target {i}")))
            .collect::<Vec<_>>()
            .into()
    }

    fn greeting() -> SentenceDeck {
        vec![SentencePair::new("你好", "Xin chào")].into()
    }

    #[test]
    fn every_index_visited_once() {
        for n in 0..8 {
            let mut session = QuizSession::with_seed(deck(n), n as u64);
            session.start();

            let mut order = session.state().order().to_vec();
            order.sort_unstable();
            assert_eq!(order, (0..n).collect::<Vec<_>>());

            let mut seen = Vec::new();
            while let Some(index) = session.state().cursor() {
                seen.push(index);
                session.advance();
            }
            assert_eq!(seen, session.state().order());
            assert_eq!(seen.iter().collect::<HashSet<_>>().len(), n);
            assert!(session.finished());
        }
    }

    #[test]
    fn greeting_scenario() {
        let mut session = QuizSession::with_seed(greeting(), 1);
        session.start();
        assert_eq!(session.current_prompt(), Some("你好"));
        assert_eq!(session.phase(), Phase::Unrevealed);

        assert_eq!(session.check_answer("xin chào"), CheckResult::Correct);
        assert!(!session.state().revealed());

        session.reveal();
        assert_eq!(session.displayed_text(), Some("Xin chào"));
        assert_eq!(session.phase(), Phase::Revealed);

        session.advance();
        assert!(session.finished());
        assert_eq!(session.remaining_count(), 0);
        assert_eq!(session.state().cursor(), None);
        assert_eq!(session.state().stats().solved, 1);
    }

    #[test]
    fn check_is_case_and_whitespace_insensitive() {
        let mut session = QuizSession::with_seed(vec![SentencePair::new("问候", "Hello")].into(), 0);
        session.start();
        let a = session.check_answer(" Hello ");
        let b = session.check_answer("hello");
        assert_eq!(a, CheckResult::Correct);
        assert_eq!(a, b);
        assert_eq!(session.check_answer("helo"), CheckResult::Incorrect);
    }

    #[test]
    fn toggle_keeps_progress() {
        let mut session = QuizSession::with_seed(deck(3), 9);
        session.start();
        session.reveal();
        session.check_answer("nope");
        let before = session.state().clone();

        session.toggle_direction();

        let after = session.state();
        assert_eq!(after.cursor(), before.cursor());
        assert_eq!(after.revealed(), before.revealed());
        assert_eq!(after.remaining_count(), before.remaining_count());
        assert_eq!(after.last_check(), CheckResult::Incorrect);
        assert_eq!(after.direction(), Direction::TargetToSource);
    }

    #[test]
    fn toggle_swaps_prompt_and_answer() {
        let mut session = QuizSession::with_seed(greeting(), 0);
        session.start();
        session.toggle_direction();
        assert_eq!(session.current_prompt(), Some("Xin chào"));
        assert_eq!(session.current_expected_answer(), Some("你好"));
        assert_eq!(session.check_answer(" 你好"), CheckResult::Correct);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut session = QuizSession::with_seed(deck(2), 3);
        session.start();
        session.reveal();
        let once = session.view();
        session.reveal();
        assert_eq!(session.view(), once);
    }

    #[test]
    fn three_skips_finish_and_fourth_is_noop() {
        let mut session = QuizSession::with_seed(deck(3), 5);
        session.start();
        session.skip();
        session.skip();
        session.skip();
        assert!(session.finished());
        assert_eq!(session.state().stats().skipped, 3);

        let before = session.view();
        session.skip();
        session.advance();
        assert_eq!(session.view(), before);
    }

    #[test]
    fn skipping_a_correct_pair_is_not_solved() {
        let mut session = QuizSession::with_seed(greeting(), 0);
        session.start();
        assert_eq!(session.check_answer("xin chào"), CheckResult::Correct);
        session.skip();

        let stats = session.state().stats();
        assert!(session.finished());
        assert_eq!(stats.solved, 0);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.correct_checks, 1);
    }

    #[test]
    fn empty_deck_finishes_immediately() {
        let mut session = QuizSession::new(SentenceDeck::default());
        session.start();
        assert!(session.finished());
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.remaining_count(), 0);
        assert_eq!(session.current_prompt(), None);
    }

    #[test]
    fn check_without_active_pair_is_noop() {
        let mut session = QuizSession::with_seed(greeting(), 0);
        session.start();
        session.check_answer("sai");
        session.advance();
        assert!(session.finished());

        assert_eq!(session.check_answer("Xin chào"), CheckResult::Unknown);
        assert_eq!(session.state().last_check(), CheckResult::Unknown);

        let mut idle = QuizSession::with_seed(greeting(), 0);
        assert_eq!(idle.check_answer("Xin chào"), CheckResult::Unknown);
        idle.reveal();
        idle.advance();
        assert_eq!(idle.phase(), Phase::NotStarted);
    }

    #[test]
    fn transition_clears_pair_state() {
        let mut session = QuizSession::with_seed(deck(2), 11);
        session.start();
        session.set_input("abc");
        session.check_answer("abc");
        session.reveal();
        session.advance();

        let state = session.state();
        assert!(!state.revealed());
        assert_eq!(state.user_input(), "");
        assert_eq!(state.last_check(), CheckResult::Unknown);
        assert_eq!(session.remaining_count(), 1);
    }

    #[test]
    fn restart_reshuffles_and_keeps_direction() {
        let mut session = QuizSession::with_seed(deck(4), 2).with_direction(Direction::TargetToSource);
        session.start();
        while !session.finished() {
            session.skip();
        }
        session.start();
        assert_eq!(session.phase(), Phase::Unrevealed);
        assert_eq!(session.remaining_count(), 4);
        assert_eq!(session.state().stats(), SessionStats { shown: 1, ..Default::default() });
        assert_eq!(session.state().direction(), Direction::TargetToSource);
    }

    #[derive(Default)]
    struct Recorder {
        pairs: Vec<usize>,
        finished: usize,
    }

    struct SharedRecorder(Rc<RefCell<Recorder>>);

    impl PresentationHook for SharedRecorder {
        fn on_pair_changed(&mut self, pair_index: usize) {
            self.0.borrow_mut().pairs.push(pair_index);
        }

        fn on_finished(&mut self, _stats: &SessionStats) {
            self.0.borrow_mut().finished += 1;
        }
    }

    #[test]
    fn hook_sees_every_pair_and_the_end() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut session = QuizSession::with_seed(deck(3), 4);
        session.set_hook(Box::new(SharedRecorder(recorder.clone())));

        session.start();
        session.advance();
        session.skip();
        session.advance();
        session.advance();

        let recorded = recorder.borrow();
        assert_eq!(recorded.pairs, session.state().order());
        assert_eq!(recorded.finished, 1);
    }
}
