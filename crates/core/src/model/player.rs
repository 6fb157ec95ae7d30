use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NameError {
    #[error("player name cannot be empty")]
    Empty,
}

/// Keep only ASCII letters and whitespace, in their original order and case,
/// capped at `max_len` characters.
///
/// This is the filter applied on every keystroke in the name field.
#[must_use]
pub fn filter_name_input(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphabetic() || ch.is_whitespace())
        .take(max_len)
        .collect()
}

/// Validated name of the person taking the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    /// Filter `raw` and build a name from what is left.
    ///
    /// # Errors
    ///
    /// Returns `NameError::Empty` if nothing but whitespace survives the filter.
    pub fn parse(raw: &str, max_len: usize) -> Result<Self, NameError> {
        let filtered = filter_name_input(raw, max_len);
        let trimmed = filtered.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
