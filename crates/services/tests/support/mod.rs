#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use quiz_core::QuestionGenerator;
use quiz_core::model::QuizSettings;
use services::voice::RecognitionConfig;
use services::{
    AnimationCue, Animator, ListenTicket, QuizCapabilities, QuizEvent, QuizIntent, QuizMachine,
    RecognitionError, RecognitionEvent, RecognitionEventKind, SpeechError, SpeechRecognizer,
    SpeechSynthesizer, TimerKind, TimerScheduler, TimerTicket, Utterance, VoiceInfo,
};

#[derive(Default)]
pub struct Recorder {
    pub spoken: Vec<Utterance>,
    pub cancels: usize,
    pub timers: Vec<(Duration, TimerTicket)>,
    pub cues: Vec<AnimationCue>,
    pub recognizer_calls: Vec<String>,
}

pub type SharedRecorder = Rc<RefCell<Recorder>>;

struct RecordingSynth(SharedRecorder);

impl SpeechSynthesizer for RecordingSynth {
    fn voices(&self) -> Vec<VoiceInfo> {
        vec![
            VoiceInfo::new("Samantha", "en-US"),
            VoiceInfo::new("Daniel", "en-GB"),
        ]
    }

    fn cancel(&self) {
        self.0.borrow_mut().cancels += 1;
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.0.borrow_mut().spoken.push(utterance.clone());
        Ok(())
    }
}

struct RecordingRecognizer(SharedRecorder);

impl SpeechRecognizer for RecordingRecognizer {
    fn start(
        &self,
        ticket: ListenTicket,
        _config: &RecognitionConfig,
    ) -> Result<(), RecognitionError> {
        self.0
            .borrow_mut()
            .recognizer_calls
            .push(format!("start {}", ticket.value()));
        Ok(())
    }

    fn stop(&self, ticket: ListenTicket) {
        self.0
            .borrow_mut()
            .recognizer_calls
            .push(format!("stop {}", ticket.value()));
    }
}

struct RecordingTimers(SharedRecorder);

impl TimerScheduler for RecordingTimers {
    fn schedule(&self, delay: Duration, ticket: TimerTicket) {
        self.0.borrow_mut().timers.push((delay, ticket));
    }
}

struct RecordingAnimator(SharedRecorder);

impl Animator for RecordingAnimator {
    fn play(&self, cue: AnimationCue) {
        self.0.borrow_mut().cues.push(cue);
    }
}

pub struct Options {
    pub synthesizer: bool,
    pub recognizer: bool,
    pub settings: QuizSettings,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            synthesizer: true,
            recognizer: true,
            settings: QuizSettings::default(),
        }
    }
}

pub struct Harness {
    pub machine: QuizMachine,
    pub recorder: SharedRecorder,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        let recorder = SharedRecorder::default();
        let capabilities = QuizCapabilities {
            synthesizer: options
                .synthesizer
                .then(|| Box::new(RecordingSynth(Rc::clone(&recorder))) as Box<dyn SpeechSynthesizer>),
            recognizer: options
                .recognizer
                .then(|| Box::new(RecordingRecognizer(Rc::clone(&recorder))) as Box<dyn SpeechRecognizer>),
            timers: Box::new(RecordingTimers(Rc::clone(&recorder))),
            animator: Box::new(RecordingAnimator(Rc::clone(&recorder))),
        };
        let generator = QuestionGenerator::seeded(42, options.settings.max_operand());
        let machine = QuizMachine::new(options.settings, generator, capabilities);
        Self { machine, recorder }
    }

    /// Enter a name, start the quiz and let the welcome delay elapse.
    pub fn started(name: &str) -> Self {
        let mut harness = Self::new();
        harness.start(name);
        harness
    }

    pub fn start(&mut self, name: &str) {
        self.send(QuizIntent::EditName(name.to_string()));
        self.send(QuizIntent::SubmitName);
        self.run_timers();
    }

    pub fn send(&mut self, event: impl Into<QuizEvent>) {
        self.machine.handle(event.into());
    }

    pub fn hear(&mut self, ticket: ListenTicket, kind: RecognitionEventKind) {
        self.send(RecognitionEvent::new(ticket, kind));
    }

    /// Take every pending timer, oldest first.
    pub fn take_timers(&mut self) -> Vec<TimerTicket> {
        self.recorder
            .borrow_mut()
            .timers
            .drain(..)
            .map(|(_, ticket)| ticket)
            .collect()
    }

    /// Fire pending timers, including ones scheduled while firing.
    pub fn run_timers(&mut self) {
        loop {
            let pending = self.take_timers();
            if pending.is_empty() {
                return;
            }
            for ticket in pending {
                self.send(ticket);
            }
        }
    }

    pub fn pending_kinds(&self) -> Vec<TimerKind> {
        self.recorder
            .borrow()
            .timers
            .iter()
            .map(|(_, ticket)| ticket.kind)
            .collect()
    }

    pub fn spoken_texts(&self) -> Vec<String> {
        self.recorder
            .borrow()
            .spoken
            .iter()
            .map(|utterance| utterance.text.clone())
            .collect()
    }

    pub fn last_spoken(&self) -> Option<String> {
        self.spoken_texts().pop()
    }

    pub fn correct_answer(&self) -> i64 {
        self.machine
            .question()
            .expect("question showing")
            .correct_answer()
    }
}
