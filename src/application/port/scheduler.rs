// SPDX-License-Identifier: MPL-2.0
//! Timer port definition.
//!
//! The engine owns its timers as explicit, cancellable handles. A
//! [`Scheduler`] arms a timer that, when it expires, delivers a [`Wakeup`]
//! back to the engine's serialization point. Each wake-up carries the
//! [`TimerToken`] it was armed with so the engine can discard a wake-up
//! whose timer was cancelled while it was already in flight.

use std::time::Duration;

/// Identity of one armed timer. Tokens are never reused within an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw value, mostly useful for logging.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What the engine should do when a timer expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    /// The display time of the current toast is over.
    Dismiss(TimerToken),
    /// The exit grace period is over; clear content and drain the queue.
    Settle(TimerToken),
}

impl Wakeup {
    #[must_use]
    pub fn token(self) -> TimerToken {
        match self {
            Wakeup::Dismiss(token) | Wakeup::Settle(token) => token,
        }
    }
}

/// Port for arming and cancelling one-shot timers.
pub trait Scheduler: Send {
    /// Handle used to cancel an armed timer.
    type Handle: Send;

    /// Arms a timer that delivers `wakeup` after `delay`.
    fn schedule(&mut self, delay: Duration, wakeup: Wakeup) -> Self::Handle;

    /// Cancels a timer. Cancelling an already expired timer is a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}
