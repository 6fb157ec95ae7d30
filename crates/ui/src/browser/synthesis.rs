use dioxus::document::eval;
use dioxus::prelude::spawn;
use serde::Deserialize;
use services::{SpeechError, SpeechSynthesizer, Utterance, VoiceInfo};
use tracing::warn;

use super::scripts;

#[derive(Debug, Deserialize)]
struct SpeakReport {
    ok: bool,
    error: Option<String>,
}

/// `speechSynthesis` in the webview. The engine gives no completion feedback
/// the quiz cares about, so a failed utterance is only logged.
pub struct EvalSynthesizer {
    voices: Vec<VoiceInfo>,
}

impl EvalSynthesizer {
    #[must_use]
    pub fn new(voices: Vec<VoiceInfo>) -> Self {
        Self { voices }
    }
}

impl SpeechSynthesizer for EvalSynthesizer {
    fn voices(&self) -> Vec<VoiceInfo> {
        self.voices.clone()
    }

    fn cancel(&self) {
        let _ = eval(scripts::cancel_speech_script());
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        let report = eval(&scripts::speak_script(utterance));
        spawn(async move {
            match report.join::<SpeakReport>().await {
                Ok(SpeakReport { ok: true, .. }) => {}
                Ok(SpeakReport { error, .. }) => {
                    warn!(error = error.as_deref().unwrap_or("unknown"), "utterance rejected");
                }
                Err(err) => warn!(error = ?err, "speech script failed"),
            }
        });
        Ok(())
    }
}
