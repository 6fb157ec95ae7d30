//! Capability implementations backed by the webview's JavaScript APIs.

mod animation;
mod recognition;
mod scripts;
mod synthesis;
mod timers;

use dioxus::document::eval;
use serde::Deserialize;
use services::VoiceInfo;
use tracing::{info, warn};

use crate::views::ViewError;

pub use animation::{Easing, EvalAnimator, Offset, Props, Step, Timeline, timeline_for};
pub use recognition::EvalRecognizer;
pub use synthesis::EvalSynthesizer;
pub use timers::TaskTimers;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HostVoice {
    pub name: String,
    pub lang: String,
}

/// What the webview offers for speech, as reported at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HostCapabilities {
    pub recognition: bool,
    pub synthesis: bool,
    #[serde(default)]
    pub voices: Vec<HostVoice>,
}

impl HostCapabilities {
    #[must_use]
    pub fn voice_infos(&self) -> Vec<VoiceInfo> {
        self.voices
            .iter()
            .map(|voice| VoiceInfo::new(voice.name.clone(), voice.lang.clone()))
            .collect()
    }

    #[must_use]
    pub fn fully_supported(&self) -> bool {
        self.recognition && self.synthesis
    }
}

/// Ask the webview which speech APIs exist. Disabled capabilities are not
/// probed and report as missing.
pub async fn probe_host(
    check_input: bool,
    check_output: bool,
) -> Result<HostCapabilities, ViewError> {
    if !check_input && !check_output {
        return Ok(HostCapabilities::default());
    }
    let script = scripts::probe_script(check_input, check_output);
    match eval(&script).join::<HostCapabilities>().await {
        Ok(host) => {
            info!(
                recognition = host.recognition,
                synthesis = host.synthesis,
                voices = host.voices.len(),
                "speech capabilities probed"
            );
            Ok(host)
        }
        Err(err) => {
            warn!(error = ?err, "speech capability probe failed");
            Err(ViewError::HostUnavailable)
        }
    }
}
