mod player;
mod question;
mod score;
mod settings;

pub use player::{NameError, PlayerName, filter_name_input};
pub use question::{Operator, Question};
pub use score::{AnswerOutcome, Scoreboard};
pub use settings::{MAX_OPERAND_LIMIT, QuizSettings, SettingsError};
