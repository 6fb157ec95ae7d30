//! Shared error types for the services crate.

use thiserror::Error;

/// Errors reported by a speech synthesis capability.
///
/// These never reach the quiz state; `VoiceOutput` logs and drops them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SpeechError {
    #[error("speech synthesis is not available")]
    Unavailable,
    #[error("speech synthesis failed: {0}")]
    Failed(String),
}

/// Errors emitted when starting a recognition session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecognitionError {
    #[error("speech recognition is not supported")]
    Unsupported,
    #[error("speech recognition failed to start: {0}")]
    StartFailed(String),
}
