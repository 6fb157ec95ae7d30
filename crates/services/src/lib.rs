#![forbid(unsafe_code)]

pub mod animation;
pub mod error;
pub mod quiz;
pub mod timers;
pub mod voice;

pub use animation::{AnimationCue, Animator};
pub use error::{RecognitionError, SpeechError};
pub use quiz::{QuizCapabilities, QuizEvent, QuizIntent, QuizMachine, QuizPhase};
pub use timers::{TimerKind, TimerScheduler, TimerTicket};
pub use voice::{
    ListenTicket, RecognitionEvent, RecognitionEventKind, SpeechRecognizer, SpeechSynthesizer,
    Utterance, VoiceInfo,
};
