use crate::timers::TimerTicket;
use crate::voice::RecognitionEvent;

/// User actions on either screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    EditName(String),
    SubmitName,
    EditAnswer(String),
    CheckAnswer,
    StartListening,
    Reset,
}

/// Everything that can drive the quiz, delivered one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    Intent(QuizIntent),
    Recognition(RecognitionEvent),
    Timer(TimerTicket),
}

impl From<QuizIntent> for QuizEvent {
    fn from(intent: QuizIntent) -> Self {
        Self::Intent(intent)
    }
}

impl From<RecognitionEvent> for QuizEvent {
    fn from(event: RecognitionEvent) -> Self {
        Self::Recognition(event)
    }
}

impl From<TimerTicket> for QuizEvent {
    fn from(ticket: TimerTicket) -> Self {
        Self::Timer(ticket)
    }
}
