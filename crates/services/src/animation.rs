/// Visual transitions the quiz asks for. What each cue looks like is up to the
/// animator; the quiz never waits for one to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationCue {
    NameEntryIntro,
    NameEntryExit,
    QuizIntro,
    QuestionEnter,
    Correct,
    Incorrect,
    ResetPulse,
}

pub trait Animator {
    fn play(&self, cue: AnimationCue);
}
