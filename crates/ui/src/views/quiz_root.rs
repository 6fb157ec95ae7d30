use dioxus::prelude::*;
use futures::StreamExt;
use quiz_core::QuestionGenerator;
use services::{
    QuizCapabilities, QuizEvent, QuizIntent, QuizMachine, QuizPhase, SpeechRecognizer,
    SpeechSynthesizer,
};

use crate::browser::{
    EvalAnimator, EvalRecognizer, EvalSynthesizer, HostCapabilities, TaskTimers, probe_host,
};
use crate::context::AppContext;
use crate::views::{NameEntryView, QuizView, ViewError, ViewState, view_state_from_resource};
use crate::vm::{NameEntryVm, QuizScreenVm, map_name_entry, map_quiz_screen};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Probes the host's speech support, then runs the quiz.
#[component]
pub fn QuizRoot() -> Element {
    let ctx = use_context::<AppContext>();
    let check_input = ctx.speech_input_enabled();
    let check_output = ctx.speech_output_enabled();
    let probe = use_resource(move || async move { probe_host(check_input, check_output).await });

    match view_state_from_resource(probe) {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "loading", "Checking voice features..." }
        },
        ViewState::Ready(host) => rsx! {
            QuizSession { host, probe_error: None }
        },
        ViewState::Error(err) => rsx! {
            QuizSession { host: HostCapabilities::default(), probe_error: Some(err) }
        },
    }
}

fn build_machine(
    ctx: &AppContext,
    host: &HostCapabilities,
    events: Coroutine<QuizEvent>,
) -> QuizMachine {
    let settings = ctx.settings().clone();
    let generator = match ctx.seed() {
        Some(seed) => QuestionGenerator::seeded(seed, settings.max_operand()),
        None => QuestionGenerator::new(settings.max_operand()),
    };
    let synthesizer = (ctx.speech_output_enabled() && host.synthesis).then(|| {
        Box::new(EvalSynthesizer::new(host.voice_infos())) as Box<dyn SpeechSynthesizer>
    });
    let recognizer = (ctx.speech_input_enabled() && host.recognition)
        .then(|| Box::new(EvalRecognizer::new(events)) as Box<dyn SpeechRecognizer>);
    let capabilities = QuizCapabilities {
        synthesizer,
        recognizer,
        timers: Box::new(TaskTimers::new(events)),
        animator: Box::new(EvalAnimator),
    };
    QuizMachine::new(settings, generator, capabilities)
}

#[component]
fn QuizSession(
    host: HostCapabilities,
    #[props(!optional)] probe_error: Option<ViewError>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut machine = use_signal(|| None::<QuizMachine>);

    // Every event reaches the machine through this queue, one at a time.
    let events = use_coroutine(move |mut rx: UnboundedReceiver<QuizEvent>| async move {
        let mut machine = machine;
        while let Some(event) = rx.next().await {
            if let Some(machine) = machine.write().as_mut() {
                machine.handle(event);
            }
        }
    });

    use_hook(move || machine.set(Some(build_machine(&ctx, &host, events))));

    use_effect(move || {
        if let Some(machine) = machine.peek().as_ref() {
            machine.introduce();
        }
    });

    use_drop(move || {
        if let Ok(mut guard) = machine.try_write()
            && let Some(machine) = guard.as_mut()
        {
            machine.shutdown();
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| events.send(intent.into()));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, machine);
            }
        }
    }

    let screen = {
        let guard = machine.read();
        guard.as_ref().map(|machine| match machine.phase() {
            QuizPhase::NameEntry => Screen::NameEntry(map_name_entry(machine)),
            QuizPhase::Active => Screen::Quiz(map_quiz_screen(machine)),
        })
    };

    match screen {
        None => rsx! {},
        Some(Screen::NameEntry(vm)) => rsx! {
            NameEntryView { vm, dispatch }
        },
        Some(Screen::Quiz(vm)) => rsx! {
            QuizView { vm, dispatch, probe_error }
        },
    }
}

enum Screen {
    NameEntry(NameEntryVm),
    Quiz(QuizScreenVm),
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    machine: Rc<RefCell<Option<Signal<Option<QuizMachine>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        machine: Signal<Option<QuizMachine>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.machine.borrow_mut() = Some(machine);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn machine(&self) -> Signal<Option<QuizMachine>> {
        (*self.machine.borrow()).expect("quiz machine registered")
    }
}
