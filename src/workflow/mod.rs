pub mod intent;
pub mod quiz_flow;

pub use intent::Intent;
pub use quiz_flow::{FlowOutcome, QuizFlow};
