use quiz_core::model::AnswerOutcome;
use services::QuizMachine;
use services::quiz::prompts;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameEntryVm {
    pub name: String,
    pub can_start: bool,
    pub max_len: usize,
}

/// The result banner under the answer field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub class: &'static str,
    pub text: String,
}

impl From<AnswerOutcome> for ResultVm {
    fn from(outcome: AnswerOutcome) -> Self {
        match outcome {
            AnswerOutcome::Correct => Self {
                class: "correct",
                text: "✅ Correct! Well done!".to_string(),
            },
            AnswerOutcome::Incorrect { expected } => Self {
                class: "wrong",
                text: format!("❌ Try again! Correct answer: {expected}"),
            },
            AnswerOutcome::Invalid => Self {
                class: "invalid",
                text: prompts::INVALID_SHOWN.to_string(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub player: String,
    /// `None` until the welcome delay has passed.
    pub question: Option<String>,
    pub answer: String,
    pub can_check: bool,
    pub listening: bool,
    pub can_listen: bool,
    pub voice_feedback: Option<String>,
    pub result: Option<ResultVm>,
    pub score: u32,
    pub attempts: u32,
    pub accuracy: u32,
    pub voice_limited: bool,
}

impl QuizScreenVm {
    #[must_use]
    pub fn voice_button_label(&self) -> &'static str {
        if self.listening {
            "🎤 Listening..."
        } else {
            "🎤 Voice Answer"
        }
    }
}

#[must_use]
pub fn map_name_entry(machine: &QuizMachine) -> NameEntryVm {
    NameEntryVm {
        name: machine.name_input().to_string(),
        can_start: machine.can_start(),
        max_len: machine.settings().name_max_len(),
    }
}

#[must_use]
pub fn map_quiz_screen(machine: &QuizMachine) -> QuizScreenVm {
    let board = machine.scoreboard();
    QuizScreenVm {
        player: machine
            .player()
            .map(|name| name.as_str().to_string())
            .unwrap_or_default(),
        question: machine
            .question()
            .map(|question| format!("{} = ?", question.expression_text())),
        answer: machine.answer_input().to_string(),
        can_check: machine.can_check(),
        listening: machine.is_listening(),
        can_listen: machine.can_listen(),
        voice_feedback: machine.voice_feedback().map(str::to_string),
        result: machine.last_result().map(ResultVm::from),
        score: board.score(),
        attempts: board.attempts(),
        accuracy: board.accuracy_percent(),
        voice_limited: !(machine.recognition_supported() && machine.synthesis_supported()),
    }
}
