use std::time::{Duration, Instant};

use tracing::trace;

/// Delay between the last window resize and the re-fit it triggers.
pub const FORCE_FIT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Single-slot debounce timer driven by caller-supplied instants.
///
/// At most one re-fit is pending; scheduling replaces the previous deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeDebouncer {
    delay: Duration,
    listening: bool,
    deadline: Option<Instant>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(FORCE_FIT_DEBOUNCE)
    }
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            listening: false,
            deadline: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn listen(&mut self) {
        self.listening = true;
    }

    /// Stops listening and drops any pending deadline.
    pub fn unlisten(&mut self) {
        self.listening = false;
        self.cancel();
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Arms the timer at `now + delay`. Returns `false` when not listening.
    pub fn schedule(&mut self, now: Instant) -> bool {
        if !self.listening {
            return false;
        }
        let deadline = now + self.delay;
        trace!(replaced = self.deadline.is_some(), "resize re-fit scheduled");
        self.deadline = Some(deadline);
        true
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn pending(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consumes the deadline when it has passed at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
