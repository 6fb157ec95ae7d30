use dioxus::document::eval;
use serde::Serialize;
use serde_json::{Map, Value};
use services::{AnimationCue, Animator};
use tracing::{debug, warn};

use super::scripts;

// ─── TIMELINE MODEL ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    Power1Out,
    Power1InOut,
    Power2In,
    Power2Out,
    Power2InOut,
    BackOut,
    BackOutStrong,
}

impl Easing {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::Power1InOut => "cubic-bezier(0.455, 0.03, 0.515, 0.955)",
            Easing::Power2In => "cubic-bezier(0.55, 0.055, 0.675, 0.19)",
            Easing::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::Power2InOut => "cubic-bezier(0.645, 0.045, 0.355, 1)",
            Easing::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
            Easing::BackOutStrong => "cubic-bezier(0.34, 1.8, 0.64, 1)",
        }
    }
}

/// Animatable properties; unset fields are left to the element's style.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Props {
    pub opacity: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
    pub border_color: Option<&'static str>,
    pub box_shadow: Option<&'static str>,
}

impl Props {
    fn keyframe(&self) -> Map<String, Value> {
        let mut frame = Map::new();
        if let Some(opacity) = self.opacity {
            frame.insert("opacity".into(), Value::from(opacity));
        }
        if self.x.is_some() || self.y.is_some() || self.scale.is_some() {
            let transform = format!(
                "translate({}px, {}px) scale({})",
                self.x.unwrap_or(0.0),
                self.y.unwrap_or(0.0),
                self.scale.unwrap_or(1.0)
            );
            frame.insert("transform".into(), Value::from(transform));
        }
        if let Some(color) = self.border_color {
            frame.insert("borderColor".into(), Value::from(color));
        }
        if let Some(shadow) = self.box_shadow {
            frame.insert("boxShadow".into(), Value::from(shadow));
        }
        frame
    }
}

/// Where a step starts relative to the timeline built so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offset {
    AfterPrevious,
    /// Start this many milliseconds before the timeline's current end.
    Overlap(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub selector: &'static str,
    pub from: Option<Props>,
    pub to: Props,
    pub duration_ms: u32,
    pub easing: Easing,
    pub offset: Offset,
}

impl Step {
    fn to(selector: &'static str, to: Props, duration_ms: u32, easing: Easing) -> Self {
        Self {
            selector,
            from: None,
            to,
            duration_ms,
            easing,
            offset: Offset::AfterPrevious,
        }
    }

    fn from_to(
        selector: &'static str,
        from: Props,
        to: Props,
        duration_ms: u32,
        easing: Easing,
    ) -> Self {
        Self {
            from: Some(from),
            ..Self::to(selector, to, duration_ms, easing)
        }
    }

    fn overlap(mut self, ms: u32) -> Self {
        self.offset = Offset::Overlap(ms);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<Step>,
}

impl Timeline {
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Absolute start time of every step, in milliseconds.
    #[must_use]
    pub fn schedule(&self) -> Vec<u32> {
        let mut end = 0u32;
        self.steps
            .iter()
            .map(|step| {
                let start = match step.offset {
                    Offset::AfterPrevious => end,
                    Offset::Overlap(ms) => end.saturating_sub(ms),
                };
                end = end.max(start + step.duration_ms);
                start
            })
            .collect()
    }

    #[must_use]
    pub fn total_ms(&self) -> u32 {
        self.schedule()
            .iter()
            .zip(&self.steps)
            .map(|(start, step)| start + step.duration_ms)
            .max()
            .unwrap_or(0)
    }

    fn to_json(&self) -> Value {
        let steps = self
            .schedule()
            .into_iter()
            .zip(&self.steps)
            .map(|(delay, step)| ScheduledStep {
                selector: step.selector,
                keyframes: match step.from {
                    Some(from) => vec![from.keyframe(), step.to.keyframe()],
                    None => vec![step.to.keyframe()],
                },
                duration: step.duration_ms,
                delay,
                easing: step.easing.css(),
                fill: if step.from.is_some() { "both" } else { "forwards" },
            })
            .collect::<Vec<_>>();
        serde_json::to_value(steps).unwrap_or(Value::Null)
    }
}

#[derive(Serialize)]
struct ScheduledStep {
    selector: &'static str,
    keyframes: Vec<Map<String, Value>>,
    duration: u32,
    delay: u32,
    easing: &'static str,
    fill: &'static str,
}

// ─── CUES ───────────────────────────────────────────────────────────────────

const ANSWER_INPUT: &str = ".answer-input";
const RESULT: &str = ".result";
const QUIZ_CONTAINER: &str = ".quiz-container";

const ACCENT: &str = "#00ff88";

fn fade(opacity: f32) -> Props {
    Props {
        opacity: Some(opacity),
        ..Props::default()
    }
}

fn shake(x: f32) -> Step {
    Step::to(
        ANSWER_INPUT,
        Props {
            x: Some(x),
            ..Props::default()
        },
        100,
        Easing::Power1InOut,
    )
}

#[must_use]
pub fn timeline_for(cue: AnimationCue) -> Timeline {
    match cue {
        AnimationCue::NameEntryIntro => Timeline::new(vec![
            Step::from_to(
                ".name-title",
                Props {
                    y: Some(-50.0),
                    scale: Some(0.8),
                    ..fade(0.0)
                },
                Props {
                    y: Some(0.0),
                    scale: Some(1.0),
                    ..fade(1.0)
                },
                1000,
                Easing::BackOut,
            ),
            Step::from_to(
                ".name-subtitle",
                Props {
                    y: Some(30.0),
                    ..fade(0.0)
                },
                Props {
                    y: Some(0.0),
                    ..fade(1.0)
                },
                800,
                Easing::Power2Out,
            )
            .overlap(500),
            Step::from_to(
                ".name-input-container",
                Props {
                    scale: Some(0.9),
                    ..fade(0.0)
                },
                Props {
                    scale: Some(1.0),
                    ..fade(1.0)
                },
                800,
                Easing::Power2Out,
            )
            .overlap(300),
            Step::from_to(
                ".start-btn",
                Props {
                    y: Some(30.0),
                    ..fade(0.0)
                },
                Props {
                    y: Some(0.0),
                    ..fade(1.0)
                },
                600,
                Easing::Power2Out,
            ),
        ]),
        AnimationCue::NameEntryExit => Timeline::new(vec![Step::to(
            ".name-container",
            Props {
                scale: Some(0.9),
                ..fade(0.0)
            },
            500,
            Easing::Power2In,
        )]),
        AnimationCue::QuizIntro => Timeline::new(vec![
            Step::from_to(
                QUIZ_CONTAINER,
                Props {
                    scale: Some(0.95),
                    ..fade(0.0)
                },
                Props {
                    scale: Some(1.0),
                    ..fade(1.0)
                },
                1000,
                Easing::Power2Out,
            ),
            Step::from_to(
                ".header h1",
                Props {
                    y: Some(-30.0),
                    ..fade(0.0)
                },
                Props {
                    y: Some(0.0),
                    ..fade(1.0)
                },
                800,
                Easing::BackOut,
            )
            .overlap(500),
            Step::from_to(
                ".user-welcome",
                Props {
                    x: Some(-30.0),
                    ..fade(0.0)
                },
                Props {
                    x: Some(0.0),
                    ..fade(1.0)
                },
                600,
                Easing::Power2Out,
            )
            .overlap(300),
            Step::from_to(
                ".question-container",
                Props {
                    y: Some(50.0),
                    ..fade(0.0)
                },
                Props {
                    y: Some(0.0),
                    ..fade(1.0)
                },
                800,
                Easing::Power2Out,
            )
            .overlap(300),
            Step::from_to(
                ".controls",
                Props {
                    y: Some(30.0),
                    ..fade(0.0)
                },
                Props {
                    y: Some(0.0),
                    ..fade(1.0)
                },
                600,
                Easing::Power2Out,
            )
            .overlap(200),
        ]),
        AnimationCue::QuestionEnter => Timeline::new(vec![Step::from_to(
            ".question",
            Props {
                scale: Some(0.8),
                y: Some(30.0),
                ..fade(0.0)
            },
            Props {
                scale: Some(1.0),
                y: Some(0.0),
                ..fade(1.0)
            },
            600,
            Easing::BackOut,
        )]),
        AnimationCue::Correct => Timeline::new(vec![
            Step::to(
                RESULT,
                Props {
                    scale: Some(1.2),
                    ..Props::default()
                },
                300,
                Easing::BackOutStrong,
            ),
            Step::to(
                ANSWER_INPUT,
                Props {
                    box_shadow: Some("0 0 30px rgba(0, 255, 136, 0.8)"),
                    border_color: Some(ACCENT),
                    ..Props::default()
                },
                300,
                Easing::Power1Out,
            ),
            Step::to(
                RESULT,
                Props {
                    scale: Some(1.0),
                    ..Props::default()
                },
                300,
                Easing::Power2Out,
            ),
            Step::to(
                ANSWER_INPUT,
                Props {
                    box_shadow: Some("0 0 0px rgba(0, 255, 136, 0)"),
                    border_color: Some(ACCENT),
                    ..Props::default()
                },
                500,
                Easing::Power1Out,
            )
            .overlap(200),
        ]),
        AnimationCue::Incorrect => Timeline::new(vec![
            shake(-10.0),
            shake(10.0),
            shake(-8.0),
            shake(8.0),
            shake(0.0),
            Step::to(
                ANSWER_INPUT,
                Props {
                    border_color: Some("#ff6b6b"),
                    box_shadow: Some("0 0 20px rgba(255, 107, 107, 0.5)"),
                    ..Props::default()
                },
                200,
                Easing::Power1Out,
            ),
            Step::to(
                ANSWER_INPUT,
                Props {
                    border_color: Some(ACCENT),
                    box_shadow: Some("0 0 0px rgba(255, 107, 107, 0)"),
                    ..Props::default()
                },
                300,
                Easing::Power1Out,
            ),
        ]),
        AnimationCue::ResetPulse => Timeline::new(vec![
            Step::to(
                QUIZ_CONTAINER,
                Props {
                    scale: Some(0.95),
                    ..fade(0.8)
                },
                300,
                Easing::Power2InOut,
            ),
            Step::to(
                QUIZ_CONTAINER,
                Props {
                    scale: Some(1.0),
                    ..fade(1.0)
                },
                300,
                Easing::Power2Out,
            ),
        ]),
    }
}

// ─── WEBVIEW ANIMATOR ───────────────────────────────────────────────────────

/// Plays cue timelines with the Web Animations API. Fire and forget: nothing
/// in the quiz waits for an animation to finish.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvalAnimator;

impl Animator for EvalAnimator {
    fn play(&self, cue: AnimationCue) {
        let timeline = timeline_for(cue);
        let steps = timeline.to_json();
        if steps.is_null() {
            warn!(?cue, "animation timeline could not be encoded");
            return;
        }
        debug!(?cue, total_ms = timeline.total_ms(), "play animation");
        let _ = eval(&scripts::animation_script(&steps.to_string()));
    }
}
