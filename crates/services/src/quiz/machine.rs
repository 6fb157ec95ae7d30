use quiz_core::model::{
    AnswerOutcome, NameError, PlayerName, Question, QuizSettings, Scoreboard, filter_name_input,
};
use quiz_core::{
    QuestionGenerator, filter_answer_input, interpret_transcript, normalize_transcript,
    parse_typed_answer,
};
use tracing::{debug, info, warn};

use crate::animation::{AnimationCue, Animator};
use crate::error::RecognitionError;
use crate::quiz::event::{QuizEvent, QuizIntent};
use crate::quiz::prompts;
use crate::timers::{TimerKind, TimerScheduler, TimerTicket};
use crate::voice::{
    RecognitionEvent, RecognitionUpdate, SpeechRecognizer, SpeechSynthesizer, VoiceInput,
    VoiceOutput,
};

//
// ─── CAPABILITIES ──────────────────────────────────────────────────────────────
//

/// Host capabilities the quiz drives.
///
/// `None` for a speech capability means the host does not provide it.
pub struct QuizCapabilities {
    pub synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    pub recognizer: Option<Box<dyn SpeechRecognizer>>,
    pub timers: Box<dyn TimerScheduler>,
    pub animator: Box<dyn Animator>,
}

//
// ─── MACHINE ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NameEntry,
    Active,
}

/// Session state and transition logic for the quiz.
///
/// All input arrives through [`QuizMachine::handle`] or the matching methods,
/// one event at a time. Delayed actions are tagged with the current epoch; the
/// epoch moves on when the quiz starts and whenever a new question is shown,
/// so callbacks scheduled for an older question do nothing.
pub struct QuizMachine {
    settings: QuizSettings,
    generator: QuestionGenerator,
    voice_out: VoiceOutput,
    voice_in: VoiceInput,
    timers: Box<dyn TimerScheduler>,
    animator: Box<dyn Animator>,

    phase: QuizPhase,
    name_input: String,
    player: Option<PlayerName>,
    question: Option<Question>,
    questions_asked: u64,
    answer_input: String,
    scoreboard: Scoreboard,
    last_result: Option<AnswerOutcome>,
    voice_feedback: Option<String>,
    epoch: u64,
}

impl QuizMachine {
    #[must_use]
    pub fn new(
        settings: QuizSettings,
        generator: QuestionGenerator,
        capabilities: QuizCapabilities,
    ) -> Self {
        let voice_out = VoiceOutput::new(capabilities.synthesizer, &settings);
        let voice_in = VoiceInput::new(capabilities.recognizer);
        Self {
            settings,
            generator,
            voice_out,
            voice_in,
            timers: capabilities.timers,
            animator: capabilities.animator,
            phase: QuizPhase::NameEntry,
            name_input: String::new(),
            player: None,
            question: None,
            questions_asked: 0,
            answer_input: String::new(),
            scoreboard: Scoreboard::new(),
            last_result: None,
            voice_feedback: None,
            epoch: 0,
        }
    }

    /// Apply one event.
    pub fn handle(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::Intent(intent) => self.apply_intent(intent),
            QuizEvent::Recognition(event) => self.on_recognition(event),
            QuizEvent::Timer(ticket) => self.on_timer(ticket),
        }
    }

    fn apply_intent(&mut self, intent: QuizIntent) {
        match intent {
            QuizIntent::EditName(raw) => self.edit_name(&raw),
            QuizIntent::SubmitName => {
                if let Err(err) = self.submit_name() {
                    debug!(error = %err, "name not accepted");
                }
            }
            QuizIntent::EditAnswer(raw) => self.edit_answer(&raw),
            QuizIntent::CheckAnswer => {
                self.check_answer();
            }
            QuizIntent::StartListening => self.start_listening(),
            QuizIntent::Reset => self.reset(),
        }
    }

    //
    // ─── NAME ENTRY ────────────────────────────────────────────────────────────
    //

    /// Animate the name entry screen in. Called once the screen is shown.
    pub fn introduce(&self) {
        if self.phase == QuizPhase::NameEntry {
            self.play(AnimationCue::NameEntryIntro);
        }
    }

    pub fn edit_name(&mut self, raw: &str) {
        self.name_input = filter_name_input(raw, self.settings.name_max_len());
    }

    /// Leave name entry and start the quiz.
    ///
    /// Speaks the welcome and schedules the first question.
    ///
    /// # Errors
    ///
    /// Returns `NameError::Empty` if the name field holds nothing but whitespace.
    pub fn submit_name(&mut self) -> Result<(), NameError> {
        if self.phase != QuizPhase::NameEntry {
            return Ok(());
        }
        let player = PlayerName::parse(&self.name_input, self.settings.name_max_len())?;
        info!(player = player.as_str(), "quiz started");

        self.play(AnimationCue::NameEntryExit);
        self.phase = QuizPhase::Active;
        self.epoch += 1;
        self.play(AnimationCue::QuizIntro);
        self.voice_out.speak_narrator(&prompts::welcome(&player));
        self.player = Some(player);
        self.schedule(self.settings.welcome_delay(), TimerKind::FirstQuestion);
        Ok(())
    }

    //
    // ─── ANSWERS ───────────────────────────────────────────────────────────────
    //

    pub fn edit_answer(&mut self, raw: &str) {
        self.answer_input = filter_answer_input(raw);
    }

    /// Submit the answer field. An empty field is ignored.
    pub fn check_answer(&mut self) -> Option<AnswerOutcome> {
        if self.answer_input.trim().is_empty() {
            return None;
        }
        let raw = self.answer_input.clone();
        self.submit_typed_answer(&raw)
    }

    /// Evaluate typed text against the current question.
    ///
    /// Non-numeric text still counts as an attempt and yields
    /// `AnswerOutcome::Invalid`. Returns `None` when no question is showing.
    pub fn submit_typed_answer(&mut self, raw: &str) -> Option<AnswerOutcome> {
        if !self.accepts_answers() {
            return None;
        }
        self.evaluate(parse_typed_answer(raw))
    }

    fn accepts_answers(&self) -> bool {
        self.phase == QuizPhase::Active && self.question.is_some()
    }

    fn evaluate(&mut self, value: Option<i64>) -> Option<AnswerOutcome> {
        let question = self.question.as_ref()?;
        let outcome = match value {
            None => AnswerOutcome::Invalid,
            Some(value) if question.is_correct(value) => AnswerOutcome::Correct,
            Some(_) => AnswerOutcome::Incorrect {
                expected: question.correct_answer(),
            },
        };
        self.scoreboard.record(outcome);
        self.last_result = Some(outcome);
        debug!(?outcome, attempts = self.scoreboard.attempts(), "answer checked");

        match outcome {
            AnswerOutcome::Correct => {
                self.play(AnimationCue::Correct);
                self.voice_out.speak_narrator(prompts::CORRECT_SPOKEN);
                self.schedule(self.settings.advance_delay(), TimerKind::NextQuestion);
            }
            AnswerOutcome::Incorrect { expected } => {
                self.play(AnimationCue::Incorrect);
                self.voice_out.speak_narrator(&prompts::wrong(expected));
            }
            AnswerOutcome::Invalid => {}
        }
        Some(outcome)
    }

    //
    // ─── QUESTIONS ─────────────────────────────────────────────────────────────
    //

    fn next_question(&mut self) {
        self.epoch += 1;
        let question = self.generator.generate();
        self.questions_asked += 1;
        debug!(question = %question, epoch = self.epoch, "new question");
        self.question = Some(question);

        self.answer_input.clear();
        self.last_result = None;
        self.voice_feedback = None;
        self.voice_in.stop();

        self.play(AnimationCue::QuestionEnter);
        self.schedule(self.settings.prompt_delay(), TimerKind::ReadQuestion);
    }

    /// Zero the score and move straight to a fresh question.
    pub fn reset(&mut self) {
        if self.phase != QuizPhase::Active {
            return;
        }
        info!("quiz reset");
        self.play(AnimationCue::ResetPulse);
        self.scoreboard.reset();
        self.last_result = None;
        self.answer_input.clear();
        self.voice_out.speak_narrator(prompts::RESET_SPOKEN);
        self.next_question();
    }

    fn schedule(&self, delay: std::time::Duration, kind: TimerKind) {
        self.timers.schedule(
            delay,
            TimerTicket {
                epoch: self.epoch,
                kind,
            },
        );
    }

    /// Run a delayed action if it still belongs to the current epoch.
    pub fn on_timer(&mut self, ticket: TimerTicket) {
        if ticket.epoch != self.epoch || self.phase != QuizPhase::Active {
            debug!(?ticket, epoch = self.epoch, "dropping stale timer");
            return;
        }
        match ticket.kind {
            TimerKind::FirstQuestion | TimerKind::NextQuestion => self.next_question(),
            TimerKind::ReadQuestion => {
                if let Some(question) = self.question.as_ref() {
                    self.voice_out.speak_narrator(&prompts::ask(question));
                }
            }
        }
    }

    //
    // ─── VOICE ─────────────────────────────────────────────────────────────────
    //

    pub fn start_listening(&mut self) {
        if self.phase != QuizPhase::Active {
            return;
        }
        match self.voice_in.start() {
            Ok(_) => {}
            Err(RecognitionError::Unsupported) => {
                self.voice_feedback = Some(prompts::RECOGNITION_UNSUPPORTED_FEEDBACK.to_string());
            }
            Err(err) => {
                warn!(error = %err, "recognition did not start");
                self.voice_feedback = Some(prompts::RECOGNITION_ERROR_FEEDBACK.to_string());
            }
        }
    }

    pub fn on_recognition(&mut self, event: RecognitionEvent) {
        let Some(update) = self.voice_in.accept(event) else {
            return;
        };
        match update {
            RecognitionUpdate::Listening => {
                self.voice_feedback = Some(prompts::LISTENING_FEEDBACK.to_string());
            }
            RecognitionUpdate::Heard(transcript) => self.on_transcript(&transcript),
            RecognitionUpdate::Failed(code) => {
                debug!(code = code.as_str(), "recognition failed");
                self.voice_feedback = Some(prompts::RECOGNITION_ERROR_FEEDBACK.to_string());
            }
            RecognitionUpdate::Aborted | RecognitionUpdate::Ended => {}
        }
    }

    fn on_transcript(&mut self, raw: &str) {
        let transcript = normalize_transcript(raw);
        debug!(transcript = transcript.as_str(), "heard");
        match interpret_transcript(&transcript) {
            Some(value) => {
                if !self.accepts_answers() {
                    return;
                }
                self.answer_input = value.to_string();
                self.voice_feedback = None;
                self.evaluate(Some(value));
            }
            None => {
                self.voice_feedback = Some(prompts::unheard_feedback(&transcript));
                self.voice_out
                    .speak_narrator(&prompts::unheard_spoken(&transcript));
            }
        }
    }

    /// Stop listening and silence speech, e.g. when the quiz view goes away.
    pub fn shutdown(&mut self) {
        self.voice_in.stop();
        self.voice_out.cancel();
    }

    fn play(&self, cue: AnimationCue) {
        if self.settings.animations() {
            self.animator.play(cue);
        }
    }

    //
    // ─── STATE ─────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    #[must_use]
    pub fn can_start(&self) -> bool {
        !self.name_input.trim().is_empty()
    }

    #[must_use]
    pub fn player(&self) -> Option<&PlayerName> {
        self.player.as_ref()
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Number of questions generated since the quiz started.
    #[must_use]
    pub fn questions_asked(&self) -> u64 {
        self.questions_asked
    }

    #[must_use]
    pub fn answer_input(&self) -> &str {
        &self.answer_input
    }

    #[must_use]
    pub fn can_check(&self) -> bool {
        !self.answer_input.is_empty()
    }

    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    #[must_use]
    pub fn last_result(&self) -> Option<AnswerOutcome> {
        self.last_result
    }

    #[must_use]
    pub fn voice_feedback(&self) -> Option<&str> {
        self.voice_feedback.as_deref()
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.voice_in.is_listening()
    }

    #[must_use]
    pub fn recognition_supported(&self) -> bool {
        self.voice_in.is_supported()
    }

    #[must_use]
    pub fn synthesis_supported(&self) -> bool {
        self.voice_out.is_supported()
    }

    #[must_use]
    pub fn can_listen(&self) -> bool {
        self.recognition_supported() && !self.voice_in.is_busy()
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
