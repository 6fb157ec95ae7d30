//! Text the quiz speaks or shows.

use quiz_core::model::{PlayerName, Question};

pub const CORRECT_SPOKEN: &str = "Correct! Well done!";
pub const RESET_SPOKEN: &str = "Quiz reset! Let's start over!";
pub const INVALID_SHOWN: &str = "Please enter a valid number";
pub const LISTENING_FEEDBACK: &str = "Listening... Speak your answer now.";
pub const RECOGNITION_ERROR_FEEDBACK: &str =
    "Error with voice recognition. Please try again or use text input.";
pub const RECOGNITION_UNSUPPORTED_FEEDBACK: &str = "Voice recognition not supported in this browser";

#[must_use]
pub fn welcome(name: &PlayerName) -> String {
    format!("Welcome {name}! Let's begin the math quiz.")
}

#[must_use]
pub fn ask(question: &Question) -> String {
    format!("What is {question}?")
}

#[must_use]
pub fn wrong(expected: i64) -> String {
    format!("Wrong! The correct answer is {expected}. Try again!")
}

#[must_use]
pub fn unheard_feedback(transcript: &str) -> String {
    format!("I heard: \"{transcript}\". Please say a number like \"5\" or \"five\".")
}

#[must_use]
pub fn unheard_spoken(transcript: &str) -> String {
    format!("I heard \"{transcript}\". Please say a number like five or ten.")
}
