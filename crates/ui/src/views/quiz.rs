use dioxus::prelude::*;
use keyboard_types::Key;
use services::QuizIntent;

use crate::views::ViewError;
use crate::vm::QuizScreenVm;

#[component]
pub fn QuizView(
    vm: QuizScreenVm,
    dispatch: Callback<QuizIntent>,
    #[props(!optional)] probe_error: Option<ViewError>,
) -> Element {
    let voice_label = vm.voice_button_label();
    let probe_notice = probe_error.map(ViewError::message);
    let (result_class, result_text) = vm
        .result
        .as_ref()
        .map_or(("", String::new()), |result| (result.class, result.text.clone()));

    rsx! {
        div { class: "quiz-container",
            header { class: "header",
                h1 { "🧮 Voice Math Quiz" }
                p { class: "user-welcome", "Welcome, {vm.player}!" }
            }

            div { class: "question-container",
                div { class: "question",
                    if let Some(question) = vm.question.as_ref() {
                        "{question}"
                    } else {
                        "Get ready..."
                    }
                }
            }

            div { class: "controls",
                button {
                    class: "btn voice",
                    r#type: "button",
                    disabled: !vm.can_listen,
                    onclick: move |_| dispatch.call(QuizIntent::StartListening),
                    "{voice_label}"
                }
                button {
                    class: "btn secondary",
                    r#type: "button",
                    disabled: !vm.can_check,
                    onclick: move |_| dispatch.call(QuizIntent::CheckAnswer),
                    "✅ Check Answer"
                }
            }

            div { class: "input-container",
                input {
                    class: "answer-input",
                    r#type: "text",
                    placeholder: "Or type your answer...",
                    value: "{vm.answer}",
                    oninput: move |evt| dispatch.call(QuizIntent::EditAnswer(evt.value())),
                    onkeydown: move |evt| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            dispatch.call(QuizIntent::CheckAnswer);
                        }
                    },
                }
            }

            if let Some(feedback) = vm.voice_feedback.as_ref() {
                div { class: "voice-feedback", "{feedback}" }
            }

            if vm.listening {
                div { class: "recognition-status", "🎤 Listening... Speak now" }
            }

            div { class: "result {result_class}", "{result_text}" }

            div { class: "stats",
                div { class: "stat",
                    span { class: "stat-value", "{vm.score}" }
                    span { class: "stat-label", "Score" }
                }
                div { class: "stat",
                    span { class: "stat-value", "{vm.attempts}" }
                    span { class: "stat-label", "Attempts" }
                }
                div { class: "stat",
                    span { class: "stat-value", "{vm.accuracy}%" }
                    span { class: "stat-label", "Accuracy" }
                }
            }

            button {
                class: "btn reset",
                r#type: "button",
                onclick: move |_| dispatch.call(QuizIntent::Reset),
                "🔄 Reset Quiz"
            }

            div { class: "accessibility-notice",
                strong { "Voice Tips:" }
                " Say numbers like \"5\" or \"five\" or \"twenty\""
                if vm.voice_limited {
                    div { class: "voice-limited", "⚠️ Voice features limited in this browser" }
                }
                if let Some(notice) = probe_notice {
                    div { class: "voice-limited", "{notice}" }
                }
            }
        }
    }
}
