mod event;
mod machine;
pub mod prompts;

pub use event::{QuizEvent, QuizIntent};
pub use machine::{QuizCapabilities, QuizMachine, QuizPhase};
