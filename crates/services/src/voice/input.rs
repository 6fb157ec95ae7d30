use tracing::debug;

use crate::error::RecognitionError;

/// Identifies one recognition session.
///
/// Every event a recognizer reports carries the ticket of the session that
/// produced it, which lets `VoiceInput` drop events from superseded sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenTicket(u64);

impl ListenTicket {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Settings passed to the recognizer for each session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    pub continuous: bool,
    pub interim_results: bool,
    pub lang: String,
    pub max_alternatives: u32,
}

impl Default for RecognitionConfig {
    /// One utterance, final results only, US English, best alternative only.
    fn default() -> Self {
        Self {
            continuous: false,
            interim_results: false,
            lang: "en-US".to_string(),
            max_alternatives: 1,
        }
    }
}

/// Error codes reported by the recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionErrorCode {
    /// The session was stopped on purpose.
    Aborted,
    NoSpeech,
    AudioCapture,
    NotAllowed,
    Network,
    Other(String),
}

impl RecognitionErrorCode {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "aborted" => Self::Aborted,
            "no-speech" => Self::NoSpeech,
            "audio-capture" => Self::AudioCapture,
            "not-allowed" => Self::NotAllowed,
            "network" => Self::Network,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Aborted => "aborted",
            Self::NoSpeech => "no-speech",
            Self::AudioCapture => "audio-capture",
            Self::NotAllowed => "not-allowed",
            Self::Network => "network",
            Self::Other(code) => code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEventKind {
    Started,
    /// Best alternative of the first result.
    Transcript(String),
    Error(RecognitionErrorCode),
    Ended,
}

/// Lifecycle event from a recognizer, tagged with its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionEvent {
    pub ticket: ListenTicket,
    pub kind: RecognitionEventKind,
}

impl RecognitionEvent {
    #[must_use]
    pub fn new(ticket: ListenTicket, kind: RecognitionEventKind) -> Self {
        Self { ticket, kind }
    }
}

/// Host speech-to-text capability.
///
/// `start` returns immediately; the implementation later delivers
/// `RecognitionEvent`s for `ticket` back to the quiz.
pub trait SpeechRecognizer {
    /// # Errors
    ///
    /// Returns `RecognitionError::StartFailed` if the host refused to start.
    fn start(&self, ticket: ListenTicket, config: &RecognitionConfig)
    -> Result<(), RecognitionError>;

    fn stop(&self, ticket: ListenTicket);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListenState {
    #[default]
    Idle,
    /// Asked the recognizer to start; waiting for it to report `Started`.
    Starting,
    Listening,
}

/// What an accepted recognition event means for the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionUpdate {
    Listening,
    Heard(String),
    Failed(RecognitionErrorCode),
    /// Stopped on purpose; not a user-facing failure.
    Aborted,
    Ended,
}

/// Runs at most one recognition session at a time.
pub struct VoiceInput {
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    config: RecognitionConfig,
    current: Option<ListenTicket>,
    state: ListenState,
    next_ticket: u64,
}

impl VoiceInput {
    #[must_use]
    pub fn new(recognizer: Option<Box<dyn SpeechRecognizer>>) -> Self {
        Self {
            recognizer,
            config: RecognitionConfig::default(),
            current: None,
            state: ListenState::Idle,
            next_ticket: 1,
        }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.recognizer.is_some()
    }

    #[must_use]
    pub fn state(&self) -> ListenState {
        self.state
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.state == ListenState::Listening
    }

    /// A session is starting or listening.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state != ListenState::Idle
    }

    /// Ticket of the session whose events are still accepted, if any.
    #[must_use]
    pub fn current(&self) -> Option<ListenTicket> {
        self.current
    }

    /// Start a new session, stopping any session still in flight first.
    ///
    /// # Errors
    ///
    /// Returns `RecognitionError::Unsupported` without a recognizer, or the
    /// recognizer's own start failure.
    pub fn start(&mut self) -> Result<ListenTicket, RecognitionError> {
        if self.recognizer.is_none() {
            return Err(RecognitionError::Unsupported);
        }
        self.stop();

        let ticket = ListenTicket::new(self.next_ticket);
        self.next_ticket += 1;
        self.current = Some(ticket);

        let Some(recognizer) = self.recognizer.as_deref() else {
            return Err(RecognitionError::Unsupported);
        };
        if let Err(err) = recognizer.start(ticket, &self.config) {
            self.current = None;
            return Err(err);
        }
        self.state = ListenState::Starting;
        debug!(ticket = ticket.value(), "recognition started");
        Ok(ticket)
    }

    /// Stop the current session. Its later events are ignored.
    pub fn stop(&mut self) {
        self.state = ListenState::Idle;
        let Some(ticket) = self.current.take() else {
            return;
        };
        if let Some(recognizer) = self.recognizer.as_deref() {
            recognizer.stop(ticket);
        }
    }

    /// Apply an event from the recognizer.
    ///
    /// Returns `None` for events from any session other than the current one.
    pub fn accept(&mut self, event: RecognitionEvent) -> Option<RecognitionUpdate> {
        if self.current != Some(event.ticket) {
            debug!(ticket = event.ticket.value(), "dropping stale recognition event");
            return None;
        }

        let update = match event.kind {
            RecognitionEventKind::Started => {
                self.state = ListenState::Listening;
                return Some(RecognitionUpdate::Listening);
            }
            RecognitionEventKind::Transcript(transcript) => RecognitionUpdate::Heard(transcript),
            RecognitionEventKind::Error(RecognitionErrorCode::Aborted) => RecognitionUpdate::Aborted,
            RecognitionEventKind::Error(code) => RecognitionUpdate::Failed(code),
            RecognitionEventKind::Ended => RecognitionUpdate::Ended,
        };
        self.state = ListenState::Idle;
        self.current = None;
        Some(update)
    }
}
