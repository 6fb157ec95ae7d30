use dioxus::prelude::*;
use keyboard_types::Key;
use services::QuizIntent;

use crate::vm::NameEntryVm;

#[component]
pub fn NameEntryView(vm: NameEntryVm, dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "name-entry",
            div { class: "name-container",
                h1 { class: "name-title", "🧮 Voice Math Quiz" }
                p { class: "name-subtitle", "Enter your name to begin the challenge" }

                div { class: "name-input-container",
                    input {
                        class: "name-input",
                        r#type: "text",
                        placeholder: "Type your name here (letters only)...",
                        maxlength: "{vm.max_len}",
                        autofocus: true,
                        value: "{vm.name}",
                        oninput: move |evt| dispatch.call(QuizIntent::EditName(evt.value())),
                        onkeydown: move |evt| {
                            if evt.data.key() == Key::Enter {
                                evt.prevent_default();
                                dispatch.call(QuizIntent::SubmitName);
                            }
                        },
                    }
                }

                button {
                    class: "start-btn",
                    r#type: "button",
                    disabled: !vm.can_start,
                    onclick: move |_| dispatch.call(QuizIntent::SubmitName),
                    "Start Challenge"
                }

                div { class: "name-tip", "💡 Tip: Use only letters for your name" }
            }
        }
    }
}
