#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod interpret;
pub mod model;

pub use error::QuizError;
pub use generator::QuestionGenerator;
pub use interpret::{
    NUMBER_WORDS, filter_answer_input, interpret_transcript, normalize_transcript,
    parse_typed_answer,
};
