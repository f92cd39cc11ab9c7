//! 测验交互流程 - 流程层
//!
//! 把按钮和回车键的语义翻译成控制器操作：
//!
//! - 主按钮：未开始 → 开始；未显示答案 → 显示答案；否则 → 下一句
//! - 回车：还没答对时检查答案（空输入忽略）；答对后先显示答案，再下一句

use tracing::{debug, info};

use crate::quiz::{CheckResult, Direction, QuizSession};
use crate::workflow::intent::Intent;

/// 一次意图处理的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    Started,
    Revealed,
    Checked(CheckResult),
    Advanced { finished: bool },
    Skipped { finished: bool },
    DirectionToggled(Direction),
    /// 回车时输入为空
    EmptyInput,
    /// 当前状态下该意图没有效果
    Ignored,
    Quit,
}

pub struct QuizFlow {
    session: QuizSession,
}

impl QuizFlow {
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    pub fn handle(&mut self, intent: Intent) -> FlowOutcome {
        debug!("处理意图: {:?}", intent);
        match intent {
            Intent::Primary => self.primary(),
            Intent::Enter => self.enter(),
            Intent::Submit(text) => {
                if self.session.current_pair().is_none() {
                    return FlowOutcome::Ignored;
                }
                self.session.set_input(text);
                self.enter()
            }
            Intent::Skip => {
                if self.session.current_pair().is_none() {
                    return FlowOutcome::Ignored;
                }
                self.session.skip();
                FlowOutcome::Skipped {
                    finished: self.finished_now(),
                }
            }
            Intent::ToggleDirection => {
                self.session.toggle_direction();
                FlowOutcome::DirectionToggled(self.session.state().direction())
            }
            Intent::Reset => self.start(),
            Intent::Quit => FlowOutcome::Quit,
        }
    }

    fn primary(&mut self) -> FlowOutcome {
        let state = self.session.state();
        if !state.started() || state.finished() {
            self.start()
        } else if !state.revealed() {
            self.session.reveal();
            FlowOutcome::Revealed
        } else {
            self.advance()
        }
    }

    fn enter(&mut self) -> FlowOutcome {
        if self.session.current_pair().is_none() {
            return FlowOutcome::Ignored;
        }

        let state = self.session.state();
        if state.last_check() != CheckResult::Correct {
            if state.user_input().trim().is_empty() {
                return FlowOutcome::EmptyInput;
            }
            let input = state.user_input().to_string();
            let result = self.session.check_answer(&input);
            return FlowOutcome::Checked(result);
        }

        if !state.revealed() {
            self.session.reveal();
            FlowOutcome::Revealed
        } else {
            self.advance()
        }
    }

    fn start(&mut self) -> FlowOutcome {
        self.session.start();
        info!("🚀 开始新一轮，共 {} 句", self.session.deck().len());
        FlowOutcome::Started
    }

    fn advance(&mut self) -> FlowOutcome {
        self.session.advance();
        FlowOutcome::Advanced {
            finished: self.finished_now(),
        }
    }

    fn finished_now(&self) -> bool {
        let finished = self.session.finished();
        if finished {
            info!("🎉 本轮完成: {}", self.session.state().stats());
        }
        finished
    }
}
