use std::time::Duration;

use dioxus::prelude::{Coroutine, spawn};
use services::{QuizEvent, TimerScheduler, TimerTicket};

/// One-shot timers as Dioxus tasks; the quiz drops tickets that went stale.
pub struct TaskTimers {
    events: Coroutine<QuizEvent>,
}

impl TaskTimers {
    #[must_use]
    pub fn new(events: Coroutine<QuizEvent>) -> Self {
        Self { events }
    }
}

impl TimerScheduler for TaskTimers {
    fn schedule(&self, delay: Duration, ticket: TimerTicket) {
        let events = self.events;
        spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            events.send(ticket.into());
        });
    }
}
