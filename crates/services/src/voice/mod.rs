//! Adapters over the host's speech capabilities.
//!
//! Both capabilities are optional. A missing synthesizer makes the quiz silent,
//! a missing recognizer disables the voice answer button.

mod input;
mod output;

pub use input::{
    ListenState, ListenTicket, RecognitionConfig, RecognitionErrorCode, RecognitionEvent,
    RecognitionEventKind, RecognitionUpdate, SpeechRecognizer, VoiceInput,
};
pub use output::{
    SpeechSynthesizer, Utterance, VoiceInfo, VoiceOutput, VoiceProfile, select_narrator_voice,
};
