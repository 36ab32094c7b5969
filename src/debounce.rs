//! Coalescing of mutation-driven re-scan requests.
//!
//! Dynamic scope pages mutate in bursts; each notification arms (or re-arms)
//! a quiet-interval timer and a re-scan becomes due only once the interval
//! elapses with no newer notification. Arming again drops the pending
//! deadline, which is all the cancellation this model needs.
//!
//! Time is injected by the caller as `Instant`s so tests control the clock;
//! the type itself never sleeps or spawns anything.

use std::time::{Duration, Instant};

use crate::config::DebounceConfig;

/// Quiet-interval debouncer for "content changed" notifications.
#[derive(Debug)]
pub struct Debouncer {
    quiet_interval: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(config: &DebounceConfig) -> Self {
        Self {
            quiet_interval: config.quiet_interval,
            deadline: None,
        }
    }

    /// Record a mutation notification at `now`, re-arming the deadline.
    pub fn notify(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_interval);
    }

    /// True while a re-scan is armed but not yet due.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The instant the armed re-scan becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Check whether a re-scan is due at `now`; firing disarms the state so
    /// one burst of mutations yields exactly one re-scan.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
