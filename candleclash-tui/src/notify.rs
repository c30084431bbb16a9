//! Transient notifications with a deadline.
//!
//! Each slot holds at most one value. Showing a new value replaces the old
//! one and restarts its deadline, so rapid trades never stack flashes.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Countdown<T> {
    slot: Option<(T, Instant)>,
}

impl<T> Default for Countdown<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> Countdown<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `value` until `now + duration`, replacing anything already shown.
    pub fn show(&mut self, value: T, now: Instant, duration: Duration) {
        self.slot = Some((value, now + duration));
    }

    /// Drop the value once its deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        if matches!(&self.slot, Some((_, until)) if now >= *until) {
            self.slot = None;
        }
    }

    /// The value, if still within its deadline at `now`.
    pub fn visible(&self, now: Instant) -> Option<&T> {
        match &self.slot {
            Some((value, until)) if now < *until => Some(value),
            _ => None,
        }
    }

    /// The value as of the last `expire`.
    pub fn current(&self) -> Option<&T> {
        self.slot.as_ref().map(|(value, _)| value)
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
