//! Tick driver: an explicit scheduler polled by the host's run loop.
//!
//! There is at most one pending due instant. Re-arming replaces it, and
//! cancelling is simply clearing it, so two timers can never run at once.

use std::time::{Duration, Instant};

use crate::game::state::GameState;
use crate::game::tick::TickOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    interval: Duration,
    next_due: Instant,
}

/// Fixed-cadence scheduler for [`GameState::tick`].
#[derive(Debug, Clone, Default)]
pub struct TickDriver {
    armed: Option<Armed>,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Interval of the running timer, if any.
    pub fn interval(&self) -> Option<Duration> {
        self.armed.map(|a| a.interval)
    }

    /// When the next tick fires, if armed.
    pub fn next_due(&self) -> Option<Instant> {
        self.armed.map(|a| a.next_due)
    }

    /// Align the timer with the game's play state and interval.
    ///
    /// Runnable with no timer, or with a timer of a different interval:
    /// restart from `now`. Not runnable: tear the timer down. Call after every
    /// input that can change phase or speed.
    pub fn sync(&mut self, state: &GameState, now: Instant) {
        if !state.is_runnable() {
            self.armed = None;
            return;
        }
        let interval = Duration::from_millis(state.tick_interval_ms());
        match self.armed {
            Some(armed) if armed.interval == interval => {}
            _ => {
                self.armed = Some(Armed {
                    interval,
                    next_due: now + interval,
                });
            }
        }
    }

    /// Fire at most one tick if the timer is due.
    ///
    /// A late poll does not replay missed ticks; the next one is scheduled a
    /// full interval after `now`.
    pub fn poll(&mut self, state: &mut GameState, now: Instant) -> Option<TickOutcome> {
        let armed = self.armed?;
        if now < armed.next_due {
            return None;
        }

        let outcome = state.tick();
        if state.is_runnable() {
            self.armed = Some(Armed {
                interval: armed.interval,
                next_due: now + armed.interval,
            });
        } else {
            self.armed = None;
        }
        Some(outcome)
    }

    /// Drop the pending tick, e.g. when the game screen closes.
    pub fn cancel(&mut self) {
        self.armed = None;
    }
}
