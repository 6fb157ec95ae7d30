use std::time::Duration;

/// Delayed actions the quiz schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Show the first question once the welcome has been spoken.
    FirstQuestion,
    /// Read the current question aloud.
    ReadQuestion,
    /// Move on after a correct answer.
    NextQuestion,
}

/// Handed to the scheduler and returned to the quiz when the delay elapses.
///
/// `epoch` is the quiz epoch at scheduling time; the quiz ignores tickets
/// from an older epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    pub epoch: u64,
    pub kind: TimerKind,
}

/// Fire-and-forget delayed callbacks.
pub trait TimerScheduler {
    fn schedule(&self, delay: Duration, ticket: TimerTicket);
}
