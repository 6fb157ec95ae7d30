use std::time::Duration;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("maximum operand must be in 1..={MAX_OPERAND_LIMIT}")]
    InvalidMaxOperand,

    #[error("name length limit must be > 0")]
    InvalidNameMaxLen,

    #[error("speech rate must be in (0, 10], got {0}")]
    InvalidSpeechRate(f32),

    #[error("speech pitch must be in [0, 2], got {0}")]
    InvalidPitch(f32),
}

/// Largest accepted `max_operand`.
pub const MAX_OPERAND_LIMIT: u32 = 10_000;

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Tunables for a quiz session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSettings {
    max_operand: u32,
    name_max_len: usize,
    welcome_delay: Duration,
    advance_delay: Duration,
    prompt_delay: Duration,
    speech_rate: f32,
    narrator_pitch: f32,
    default_pitch: f32,
    animations: bool,
}

impl Default for QuizSettings {
    /// Values used by the shipped quiz:
    /// - operands in 1..=20
    /// - names up to 20 characters
    /// - 2s before the first question, 2s before advancing after a correct answer
    /// - questions read aloud 500ms after they appear
    fn default() -> Self {
        Self {
            max_operand: 20,
            name_max_len: 20,
            welcome_delay: Duration::from_millis(2_000),
            advance_delay: Duration::from_millis(2_000),
            prompt_delay: Duration::from_millis(500),
            speech_rate: 0.9,
            narrator_pitch: 0.8,
            default_pitch: 1.0,
            animations: true,
        }
    }
}

impl QuizSettings {
    /// Creates custom settings; delays and the animation flag keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a limit is zero, `max_operand` exceeds
    /// `MAX_OPERAND_LIMIT`, or a speech parameter is out of range.
    pub fn new(
        max_operand: u32,
        name_max_len: usize,
        speech_rate: f32,
        narrator_pitch: f32,
        default_pitch: f32,
    ) -> Result<Self, SettingsError> {
        if !(1..=MAX_OPERAND_LIMIT).contains(&max_operand) {
            return Err(SettingsError::InvalidMaxOperand);
        }
        if name_max_len == 0 {
            return Err(SettingsError::InvalidNameMaxLen);
        }
        if !(speech_rate > 0.0 && speech_rate <= 10.0) {
            return Err(SettingsError::InvalidSpeechRate(speech_rate));
        }
        for pitch in [narrator_pitch, default_pitch] {
            if !(0.0..=2.0).contains(&pitch) {
                return Err(SettingsError::InvalidPitch(pitch));
            }
        }

        Ok(Self {
            max_operand,
            name_max_len,
            speech_rate,
            narrator_pitch,
            default_pitch,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_delays(mut self, welcome: Duration, advance: Duration, prompt: Duration) -> Self {
        self.welcome_delay = welcome;
        self.advance_delay = advance;
        self.prompt_delay = prompt;
        self
    }

    /// All delays set to zero. Handy for driving the quiz in tests.
    #[must_use]
    pub fn without_delays(self) -> Self {
        self.with_delays(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }

    #[must_use]
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }

    #[must_use]
    pub fn max_operand(&self) -> u32 {
        self.max_operand
    }

    #[must_use]
    pub fn name_max_len(&self) -> usize {
        self.name_max_len
    }

    #[must_use]
    pub fn welcome_delay(&self) -> Duration {
        self.welcome_delay
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    #[must_use]
    pub fn prompt_delay(&self) -> Duration {
        self.prompt_delay
    }

    #[must_use]
    pub fn speech_rate(&self) -> f32 {
        self.speech_rate
    }

    #[must_use]
    pub fn narrator_pitch(&self) -> f32 {
        self.narrator_pitch
    }

    #[must_use]
    pub fn default_pitch(&self) -> f32 {
        self.default_pitch
    }

    #[must_use]
    pub fn animations(&self) -> bool {
        self.animations
    }
}
