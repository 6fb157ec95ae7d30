use quiz_core::model::QuizSettings;
use tracing::{debug, warn};

use crate::error::SpeechError;

/// A synthesis voice offered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
}

impl VoiceInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// Which voice configuration an utterance uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceProfile {
    /// Host default voice at normal pitch.
    Default,
    /// Lower pitch and a male-sounding voice when one can be found. Used for
    /// every prompt the quiz speaks.
    Narrator,
}

/// One queued unit of synthesized speech.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    /// Name of the voice to use; `None` leaves the choice to the host.
    pub voice: Option<String>,
}

/// Host text-to-speech capability.
pub trait SpeechSynthesizer {
    fn voices(&self) -> Vec<VoiceInfo>;

    /// Drop whatever is speaking or queued.
    fn cancel(&self);

    /// Queue one utterance. Returns as soon as it is queued.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the host refused the utterance.
    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;
}

/// Pick the voice used for the narrator profile.
///
/// Takes the first voice whose name looks male, then the first English voice,
/// then the first voice at all.
#[must_use]
pub fn select_narrator_voice(voices: &[VoiceInfo]) -> Option<&VoiceInfo> {
    voices
        .iter()
        .find(|voice| looks_male(&voice.name))
        .or_else(|| voices.iter().find(|voice| voice.lang.contains("en")))
        .or_else(|| voices.first())
}

// Name heuristics for common male voices across browsers. The lowercase
// "male" check also matches "Female"; that is the established behaviour.
fn looks_male(name: &str) -> bool {
    (name.contains("Google") && name.contains("en"))
        || (name.contains("Microsoft") && name.contains("David"))
        || name.contains("Alex")
        || name.contains("Daniel")
        || name.contains("Fred")
        || name.to_lowercase().contains("male")
        || (name.contains("en-GB") && name.contains("Male"))
}

/// Speaks quiz prompts, keeping at most one utterance active.
pub struct VoiceOutput {
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    rate: f32,
    narrator_pitch: f32,
    default_pitch: f32,
}

impl VoiceOutput {
    #[must_use]
    pub fn new(synthesizer: Option<Box<dyn SpeechSynthesizer>>, settings: &QuizSettings) -> Self {
        Self {
            synthesizer,
            rate: settings.speech_rate(),
            narrator_pitch: settings.narrator_pitch(),
            default_pitch: settings.default_pitch(),
        }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.synthesizer.is_some()
    }

    /// Cancel anything in flight, then queue `text` with the given profile.
    ///
    /// Silently does nothing when synthesis is unavailable. Failures are logged
    /// and swallowed.
    pub fn speak(&self, text: &str, profile: VoiceProfile) {
        let Some(synthesizer) = self.synthesizer.as_deref() else {
            return;
        };
        synthesizer.cancel();

        let (pitch, voice) = match profile {
            VoiceProfile::Default => (self.default_pitch, None),
            VoiceProfile::Narrator => {
                let voices = synthesizer.voices();
                let voice = select_narrator_voice(&voices).map(|voice| voice.name.clone());
                if let Some(name) = voice.as_deref() {
                    debug!(voice = name, "using narrator voice");
                }
                (self.narrator_pitch, voice)
            }
        };

        let utterance = Utterance {
            text: text.to_string(),
            rate: self.rate,
            pitch,
            volume: 1.0,
            voice,
        };
        if let Err(err) = synthesizer.speak(&utterance) {
            warn!(error = %err, "speech error");
        }
    }

    pub fn speak_default(&self, text: &str) {
        self.speak(text, VoiceProfile::Default);
    }

    pub fn speak_narrator(&self, text: &str) {
        self.speak(text, VoiceProfile::Narrator);
    }

    pub fn cancel(&self) {
        if let Some(synthesizer) = self.synthesizer.as_deref() {
            synthesizer.cancel();
        }
    }
}
