use dioxus::document::eval;
use dioxus::prelude::{Coroutine, spawn};
use serde::Deserialize;
use services::voice::{RecognitionConfig, RecognitionErrorCode};
use services::{
    ListenTicket, QuizEvent, RecognitionError, RecognitionEvent, RecognitionEventKind,
    SpeechRecognizer,
};
use tracing::{debug, warn};

use super::scripts;

/// Messages posted by the recognition script through `dioxus.send`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum RecognitionMessage {
    Start,
    Result { transcript: String },
    Error { error: String },
    End,
}

impl RecognitionMessage {
    fn into_kind(self) -> RecognitionEventKind {
        match self {
            RecognitionMessage::Start => RecognitionEventKind::Started,
            RecognitionMessage::Result { transcript } => RecognitionEventKind::Transcript(transcript),
            RecognitionMessage::Error { error } => {
                RecognitionEventKind::Error(RecognitionErrorCode::from_code(&error))
            }
            RecognitionMessage::End => RecognitionEventKind::Ended,
        }
    }
}

/// Webkit/standard `SpeechRecognition` in the webview. Each session streams
/// its events back into the quiz tagged with the ticket it was started for.
pub struct EvalRecognizer {
    events: Coroutine<QuizEvent>,
}

impl EvalRecognizer {
    #[must_use]
    pub fn new(events: Coroutine<QuizEvent>) -> Self {
        Self { events }
    }
}

impl SpeechRecognizer for EvalRecognizer {
    fn start(
        &self,
        ticket: ListenTicket,
        config: &RecognitionConfig,
    ) -> Result<(), RecognitionError> {
        // The script starts running here, so a later `stop` always reaches it.
        let mut session = eval(&scripts::recognition_script(ticket, config));
        let events = self.events;
        spawn(async move {
            loop {
                let kind = match session.recv::<RecognitionMessage>().await {
                    Ok(message) => message.into_kind(),
                    Err(err) => {
                        warn!(ticket = ticket.value(), error = ?err, "recognition bridge closed");
                        RecognitionEventKind::Ended
                    }
                };
                let ended = kind == RecognitionEventKind::Ended;
                events.send(RecognitionEvent::new(ticket, kind).into());
                if ended {
                    debug!(ticket = ticket.value(), "recognition session finished");
                    break;
                }
            }
        });
        Ok(())
    }

    fn stop(&self, ticket: ListenTicket) {
        let _ = eval(&scripts::stop_recognition_script(ticket));
    }
}
