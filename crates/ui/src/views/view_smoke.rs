use services::{QuizIntent, QuizPhase};

use super::test_harness::setup_quiz_harness;

#[tokio::test(flavor = "current_thread")]
async fn name_entry_renders_with_start_disabled() {
    let harness = setup_quiz_harness().await;
    let html = harness.render();
    assert!(html.contains("Voice Math Quiz"), "missing title in {html}");
    assert!(html.contains("Start Challenge"), "missing start button in {html}");
    assert!(!harness.with_machine(|machine| machine.can_start()));
}

#[tokio::test(flavor = "current_thread")]
async fn name_field_drops_digits_and_symbols() {
    let mut harness = setup_quiz_harness().await;
    harness.send(QuizIntent::EditName("Ada99!".into())).await;
    assert_eq!(
        harness.with_machine(|machine| machine.name_input().to_string()),
        "Ada"
    );
    assert!(harness.with_machine(|machine| machine.can_start()));
}

#[tokio::test(flavor = "current_thread")]
async fn correct_answer_shows_result_and_score() {
    let mut harness = setup_quiz_harness().await;
    harness.send(QuizIntent::EditName("Ada".into())).await;
    harness.send(QuizIntent::SubmitName).await;

    assert_eq!(
        harness.with_machine(|machine| machine.phase()),
        QuizPhase::Active
    );
    let html = harness.render();
    assert!(html.contains("Welcome, Ada!"), "missing welcome in {html}");

    let (expression, answer) = harness.with_machine(|machine| {
        let question = machine.question().expect("first question asked");
        (question.expression_text(), question.correct_answer())
    });
    let html = harness.render();
    assert!(
        html.contains(&format!("{expression} = ?")),
        "missing question in {html}"
    );

    harness.send(QuizIntent::EditAnswer(answer.to_string())).await;
    harness.send(QuizIntent::CheckAnswer).await;

    let html = harness.render();
    assert!(html.contains("Correct! Well done!"), "missing result in {html}");
    assert!(html.contains("100%"), "missing accuracy in {html}");
    let board = harness.with_machine(|machine| machine.scoreboard());
    assert_eq!((board.score(), board.attempts()), (1, 1));
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_reveals_correct_one() {
    let mut harness = setup_quiz_harness().await;
    harness.send(QuizIntent::EditName("Ada".into())).await;
    harness.send(QuizIntent::SubmitName).await;

    let answer = harness.with_machine(|machine| {
        machine.question().expect("first question asked").correct_answer()
    });
    harness
        .send(QuizIntent::EditAnswer((answer + 1).to_string()))
        .await;
    harness.send(QuizIntent::CheckAnswer).await;

    let html = harness.render();
    let expected = format!("Try again! Correct answer: {answer}");
    assert!(html.contains(&expected), "missing {expected} in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_clears_stats_and_asks_again() {
    let mut harness = setup_quiz_harness().await;
    harness.send(QuizIntent::EditName("Ada".into())).await;
    harness.send(QuizIntent::SubmitName).await;
    harness.send(QuizIntent::EditAnswer("999".into())).await;
    harness.send(QuizIntent::CheckAnswer).await;
    let asked = harness.with_machine(|machine| machine.questions_asked());

    harness.send(QuizIntent::Reset).await;

    let board = harness.with_machine(|machine| machine.scoreboard());
    assert_eq!((board.score(), board.attempts()), (0, 0));
    assert_eq!(
        harness.with_machine(|machine| machine.questions_asked()),
        asked + 1
    );
}

#[tokio::test(flavor = "current_thread")]
async fn missing_speech_shows_limited_notice() {
    let mut harness = setup_quiz_harness().await;
    harness.send(QuizIntent::EditName("Ada".into())).await;
    harness.send(QuizIntent::SubmitName).await;

    let html = harness.render();
    assert!(
        html.contains("Voice features limited in this browser"),
        "missing notice in {html}"
    );
    assert!(!harness.with_machine(|machine| machine.can_listen()));

    harness.send(QuizIntent::StartListening).await;
    let html = harness.render();
    assert!(
        html.contains("Voice recognition not supported in this browser"),
        "missing unsupported feedback in {html}"
    );
}
