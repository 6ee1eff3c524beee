//! Single-timer debounce for search input.
//!
//! The caller supplies `Instant`s, so the event loop decides how long to wait
//! and tests never sleep.

use std::time::{Duration, Instant};

pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Arm the timer, replacing any pending deadline.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True once when the quiet window has elapsed; disarms the timer.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending deadline, `None` when idle.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
