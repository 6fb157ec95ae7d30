mod support;

use std::time::Duration;

use quiz_core::model::{AnswerOutcome, QuizSettings};
use services::{AnimationCue, QuizIntent, QuizPhase, TimerKind};

use support::{Harness, Options};

#[test]
fn submitting_a_name_welcomes_then_asks_first_question() {
    let mut harness = Harness::new();
    harness.send(QuizIntent::EditName("Jo4hn!23 Smith".into()));
    assert_eq!(harness.machine.name_input(), "John Smith");

    harness.send(QuizIntent::SubmitName);
    assert_eq!(harness.machine.phase(), QuizPhase::Active);
    assert_eq!(harness.machine.player().unwrap().as_str(), "John Smith");
    assert_eq!(
        harness.last_spoken().as_deref(),
        Some("Welcome John Smith! Let's begin the math quiz.")
    );
    assert!(harness.machine.question().is_none());
    assert_eq!(
        harness.recorder.borrow().timers[0].0,
        Duration::from_millis(2_000)
    );

    let first = harness.take_timers();
    assert_eq!(first.len(), 1);
    harness.send(first[0]);
    assert_eq!(harness.machine.questions_asked(), 1);
    assert_eq!(harness.pending_kinds(), [TimerKind::ReadQuestion]);

    harness.run_timers();
    let question = harness.machine.question().unwrap().clone();
    assert_eq!(
        harness.last_spoken(),
        Some(format!("What is {}?", question.expression_text()))
    );
    let narrator = harness.recorder.borrow().spoken.last().cloned().unwrap();
    assert_eq!(narrator.voice.as_deref(), Some("Daniel"));
    assert!((narrator.pitch - 0.8).abs() < f32::EPSILON);
}

#[test]
fn blank_name_keeps_name_entry() {
    let mut harness = Harness::new();
    harness.send(QuizIntent::EditName("123 !!".into()));
    assert!(!harness.machine.can_start());
    assert!(harness.machine.submit_name().is_err());
    assert_eq!(harness.machine.phase(), QuizPhase::NameEntry);
    assert!(harness.recorder.borrow().timers.is_empty());
}

#[test]
fn correct_answer_scores_and_schedules_next_question() {
    let mut harness = Harness::started("Ada");
    let answer = harness.correct_answer();
    let before = harness.machine.question().cloned();

    harness.send(QuizIntent::EditAnswer(answer.to_string()));
    harness.send(QuizIntent::CheckAnswer);

    let board = harness.machine.scoreboard();
    assert_eq!((board.score(), board.attempts()), (1, 1));
    assert_eq!(harness.machine.last_result(), Some(AnswerOutcome::Correct));
    assert_eq!(harness.last_spoken().as_deref(), Some("Correct! Well done!"));
    assert_eq!(harness.pending_kinds(), [TimerKind::NextQuestion]);
    assert_eq!(harness.machine.question().cloned(), before);

    harness.run_timers();
    assert_eq!(harness.machine.questions_asked(), 2);
    assert_eq!(harness.machine.last_result(), None);
    assert_eq!(harness.machine.answer_input(), "");
}

#[test]
fn incorrect_answer_keeps_question() {
    let mut harness = Harness::started("Ada");
    let answer = harness.correct_answer();
    let before = harness.machine.question().cloned();

    let outcome = harness.machine.submit_typed_answer(&(answer + 1).to_string());

    assert_eq!(outcome, Some(AnswerOutcome::Incorrect { expected: answer }));
    let board = harness.machine.scoreboard();
    assert_eq!((board.score(), board.attempts()), (0, 1));
    assert_eq!(harness.machine.question().cloned(), before);
    assert!(harness.pending_kinds().is_empty());
    assert_eq!(
        harness.last_spoken(),
        Some(format!("Wrong! The correct answer is {answer}. Try again!"))
    );
}

#[test]
fn non_numeric_typed_text_is_invalid_but_counted() {
    let mut harness = Harness::started("Ada");
    let spoken_before = harness.spoken_texts().len();

    let outcome = harness.machine.submit_typed_answer("abc");

    assert_eq!(outcome, Some(AnswerOutcome::Invalid));
    let board = harness.machine.scoreboard();
    assert_eq!((board.score(), board.attempts()), (0, 1));
    assert_eq!(harness.spoken_texts().len(), spoken_before);
    assert!(harness.pending_kinds().is_empty());
}

#[test]
fn oversized_typed_number_is_a_wrong_answer() {
    let mut harness = Harness::started("Ada");
    let answer = harness.correct_answer();

    let outcome = harness.machine.submit_typed_answer("99999999999999999999");

    assert_eq!(outcome, Some(AnswerOutcome::Incorrect { expected: answer }));
    assert_eq!(harness.machine.scoreboard().attempts(), 1);
}

#[test]
fn empty_answer_field_is_ignored() {
    let mut harness = Harness::started("Ada");
    harness.send(QuizIntent::EditAnswer("abc".into()));
    assert_eq!(harness.machine.answer_input(), "");
    assert!(!harness.machine.can_check());

    harness.send(QuizIntent::CheckAnswer);
    assert_eq!(harness.machine.scoreboard().attempts(), 0);
}

#[test]
fn reset_zeroes_score_and_asks_exactly_one_question() {
    let mut harness = Harness::started("Ada");
    let answer = harness.correct_answer();
    harness.machine.submit_typed_answer(&answer.to_string());
    let asked = harness.machine.questions_asked();

    harness.send(QuizIntent::Reset);

    let board = harness.machine.scoreboard();
    assert_eq!((board.score(), board.attempts()), (0, 0));
    assert_eq!(harness.machine.last_result(), None);
    assert_eq!(harness.machine.questions_asked(), asked + 1);
    assert!(
        harness
            .spoken_texts()
            .contains(&"Quiz reset! Let's start over!".to_string())
    );

    // The advance scheduled by the earlier correct answer is now stale.
    harness.run_timers();
    assert_eq!(harness.machine.questions_asked(), asked + 1);
}

#[test]
fn reset_during_welcome_drops_first_question_timer() {
    let mut harness = Harness::new();
    harness.send(QuizIntent::EditName("Ada".into()));
    harness.send(QuizIntent::SubmitName);
    harness.send(QuizIntent::Reset);
    assert_eq!(harness.machine.questions_asked(), 1);

    harness.run_timers();
    assert_eq!(harness.machine.questions_asked(), 1);
}

#[test]
fn repeated_correct_answers_advance_once() {
    let mut harness = Harness::started("Ada");
    let answer = harness.correct_answer().to_string();
    harness.machine.submit_typed_answer(&answer);
    harness.machine.submit_typed_answer(&answer);
    assert_eq!(harness.machine.scoreboard().score(), 2);
    assert_eq!(
        harness.pending_kinds(),
        [TimerKind::NextQuestion, TimerKind::NextQuestion]
    );

    harness.run_timers();
    assert_eq!(harness.machine.questions_asked(), 2);
}

#[test]
fn accuracy_tracks_attempts() {
    let mut harness = Harness::started("Ada");
    let answer = harness.correct_answer();
    harness.machine.submit_typed_answer(&(answer + 3).to_string());
    harness.machine.submit_typed_answer("-");
    harness.machine.submit_typed_answer(&answer.to_string());
    assert_eq!(harness.machine.scoreboard().accuracy_percent(), 33);
}

#[test]
fn answers_before_first_question_are_ignored() {
    let mut harness = Harness::new();
    harness.send(QuizIntent::EditName("Ada".into()));
    harness.send(QuizIntent::SubmitName);
    assert_eq!(harness.machine.submit_typed_answer("4"), None);
    assert_eq!(harness.machine.scoreboard().attempts(), 0);
}

#[test]
fn animation_cues_follow_transitions() {
    let mut harness = Harness::started("Ada");
    let answer = harness.correct_answer();
    harness.machine.submit_typed_answer(&(answer + 1).to_string());
    harness.machine.submit_typed_answer(&answer.to_string());

    assert_eq!(
        harness.recorder.borrow().cues,
        [
            AnimationCue::NameEntryExit,
            AnimationCue::QuizIntro,
            AnimationCue::QuestionEnter,
            AnimationCue::Incorrect,
            AnimationCue::Correct,
        ]
    );
}

#[test]
fn name_entry_intro_plays_only_before_the_quiz() {
    let mut harness = Harness::new();
    harness.machine.introduce();
    harness.start("Ada");
    harness.machine.introduce();

    let cues = harness.recorder.borrow().cues.clone();
    assert_eq!(
        cues.iter()
            .filter(|cue| **cue == AnimationCue::NameEntryIntro)
            .count(),
        1
    );
    assert_eq!(cues[0], AnimationCue::NameEntryIntro);
}

#[test]
fn animations_can_be_disabled() {
    let mut harness = Harness::with_options(Options {
        settings: QuizSettings::default().with_animations(false),
        ..Options::default()
    });
    harness.start("Ada");
    assert!(harness.recorder.borrow().cues.is_empty());
    assert!(harness.machine.question().is_some());
}

#[test]
fn quiz_runs_silently_without_synthesis() {
    let mut harness = Harness::with_options(Options {
        synthesizer: false,
        ..Options::default()
    });
    harness.start("Ada");
    let answer = harness.correct_answer();
    harness.machine.submit_typed_answer(&answer.to_string());

    assert!(!harness.machine.synthesis_supported());
    assert!(harness.spoken_texts().is_empty());
    assert_eq!(harness.recorder.borrow().cancels, 0);
    assert_eq!(harness.machine.scoreboard().score(), 1);
}

#[test]
fn every_utterance_cancels_the_previous_one() {
    let harness = Harness::started("Ada");
    let recorder = harness.recorder.borrow();
    assert_eq!(recorder.cancels, recorder.spoken.len());
}
