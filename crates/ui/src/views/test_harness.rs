use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::QuizSettings;
use services::{QuizIntent, QuizMachine};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizRoot;
use crate::views::quiz_root::QuizTestHandles;

struct TestApp {
    settings: QuizSettings,
    seed: u64,
}

impl UiApp for TestApp {
    fn settings(&self) -> QuizSettings {
        self.settings.clone()
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }

    fn speech_input_enabled(&self) -> bool {
        false
    }

    fn speech_output_enabled(&self) -> bool {
        false
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizRoot {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until queued events, zero-delay timers and re-renders have run.
    pub async fn settle(&mut self) {
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    pub async fn send(&mut self, intent: QuizIntent) {
        self.handles.dispatch().call(intent);
        self.settle().await;
    }

    pub fn with_machine<T>(&self, read: impl FnOnce(&QuizMachine) -> T) -> T {
        let machine = self.handles.machine();
        self.dom.in_runtime(|| {
            let guard = machine.peek();
            read(guard.as_ref().expect("machine built"))
        })
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// A quiz with speech disabled and no welcome or prompt delay. The advance
/// after a correct answer stays long so results remain on screen.
pub async fn setup_quiz_harness() -> ViewHarness {
    let settings = QuizSettings::default()
        .with_delays(Duration::ZERO, Duration::from_secs(60), Duration::ZERO)
        .with_animations(false);
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app: Arc::new(TestApp { settings, seed: 11 }),
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness.settle().await;
    harness
}
