//! Trailing-edge debounce for single-argument callbacks
//!
//! A [`Debounced`] owns its own pending slot, so any number of debounced
//! callbacks can live side by side without sharing timer state. It never
//! spawns threads or timers: the owner drives it by calling [`Debounced::poll`]
//! from its event loop.

use std::fmt;
use std::time::{Duration, Instant};

/// Debounced callback stored behind a trait object, for use as a struct field.
pub type BoxedDebounced<T> = Debounced<T, Box<dyn FnMut(T)>>;

struct Pending<T> {
    arg: T,
    deadline: Instant,
}

pub struct Debounced<T, F>
where
    F: FnMut(T),
{
    callback: F,
    wait: Duration,
    pending: Option<Pending<T>>,
}

impl<T, F> Debounced<T, F>
where
    F: FnMut(T),
{
    pub fn new(callback: F, wait: Duration) -> Self {
        Self {
            callback,
            wait,
            pending: None,
        }
    }

    /// Schedule `callback(arg)` one wait period from now, replacing any call
    /// that has not fired yet.
    pub fn call(&mut self, arg: T) {
        self.call_at(arg, Instant::now());
    }

    pub fn call_at(&mut self, arg: T, now: Instant) {
        self.pending = Some(Pending {
            arg,
            deadline: now + self.wait,
        });
    }

    /// Fire the pending call if its deadline has passed. Returns whether the
    /// callback ran.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.deadline <= now);
        if !due {
            return false;
        }

        let Some(pending) = self.pending.take() else {
            return false;
        };
        (self.callback)(pending.arg);
        true
    }

    /// Drop the pending call without running it. Returns whether one was
    /// pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Time left before the pending call is due, zero if it is already due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl<T, F> fmt::Debug for Debounced<T, F>
where
    F: FnMut(T),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.wait)
            .field("deadline", &self.deadline())
            .finish()
    }
}
