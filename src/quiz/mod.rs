pub mod answer;
pub mod hook;
pub mod session;
pub mod state;

pub use answer::answers_match;
pub use hook::PresentationHook;
pub use session::{QuizSession, QuizView};
pub use state::{CheckResult, Direction, Phase, QuizState, SessionStats};
