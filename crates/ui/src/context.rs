use std::sync::Arc;

use quiz_core::model::QuizSettings;

pub trait UiApp: Send + Sync {
    fn settings(&self) -> QuizSettings;

    /// Seed for the question stream; `None` draws from the OS.
    fn seed(&self) -> Option<u64>;

    fn speech_input_enabled(&self) -> bool;
    fn speech_output_enabled(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    settings: QuizSettings,
    seed: Option<u64>,
    speech_input_enabled: bool,
    speech_output_enabled: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
            seed: app.seed(),
            speech_input_enabled: app.speech_input_enabled(),
            speech_output_enabled: app.speech_output_enabled(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether the host should be probed for speech recognition at all.
    #[must_use]
    pub fn speech_input_enabled(&self) -> bool {
        self.speech_input_enabled
    }

    #[must_use]
    pub fn speech_output_enabled(&self) -> bool {
        self.speech_output_enabled
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
