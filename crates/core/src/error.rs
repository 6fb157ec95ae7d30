use thiserror::Error;

use crate::model::{NameError, SettingsError};

#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
