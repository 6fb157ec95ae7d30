/// Result of checking one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { expected: i64 },
    Invalid,
}

/// Running score for the current quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    attempts: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one submission and its outcome.
    ///
    /// Every submission is an attempt, including invalid ones; only correct
    /// answers add to the score.
    pub fn record(&mut self, outcome: AnswerOutcome) {
        self.attempts = self.attempts.saturating_add(1);
        if outcome == AnswerOutcome::Correct {
            self.score = self.score.saturating_add(1);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Percentage of correct attempts, rounded half up; 0 before any attempt.
    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }
        let score = u64::from(self.score);
        let attempts = u64::from(self.attempts);
        let rounded = (score * 200 + attempts) / (attempts * 2);
        u32::try_from(rounded).unwrap_or(100)
    }
}
