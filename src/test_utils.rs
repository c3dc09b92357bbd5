// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the engine ports.
//!
//! These fakes record what the engine asked for so unit tests can assert on
//! the exact call sequence and on the set of timers that are still armed.

use crate::application::port::{ActionExecutor, PresentationPort, Scheduler, Wakeup};
use crate::domain::notification::{Action, ResolvedNotification};
use std::sync::Mutex;
use std::time::Duration;

/// One call made on the presentation port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortCall {
    Render { message: String, animating: bool },
    Position,
    Show,
    Hide,
    Sound(String),
}

/// Presentation port that records every call.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<PortCall>,
}

impl PresentationPort for RecordingPresenter {
    fn render(&mut self, notification: &ResolvedNotification, animating: bool) {
        self.calls.push(PortCall::Render {
            message: notification.message().to_string(),
            animating,
        });
    }

    fn position(&mut self) {
        self.calls.push(PortCall::Position);
    }

    fn show(&mut self) {
        self.calls.push(PortCall::Show);
    }

    fn hide(&mut self) {
        self.calls.push(PortCall::Hide);
    }

    fn play_sound(&mut self, name: &str) {
        self.calls.push(PortCall::Sound(name.to_string()));
    }
}

/// Action executor that records the actions it was given.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    executed: Mutex<Vec<Action>>,
}

impl RecordingExecutor {
    pub fn executed(&self) -> Vec<Action> {
        self.executed.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl ActionExecutor for RecordingExecutor {
    fn execute(&self, action: &Action) {
        if let Ok(mut executed) = self.executed.lock() {
            executed.push(action.clone());
        }
    }
}

/// Scheduler whose timers only expire when a test says so.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    last_id: u64,
    armed: Vec<(u64, Duration, Wakeup)>,
}

impl ManualScheduler {
    /// Forgets an armed timer as if it had fired.
    pub fn expire(&mut self, wakeup: Wakeup) {
        self.armed.retain(|(_, _, armed)| *armed != wakeup);
    }

    /// Delays of the dismiss timers that are still armed.
    pub fn outstanding_dismiss_delays(&self) -> Vec<Duration> {
        self.armed
            .iter()
            .filter(|(_, _, w)| matches!(w, Wakeup::Dismiss(_)))
            .map(|(_, delay, _)| *delay)
            .collect()
    }

    /// Delays of the exit-grace timers that are still armed.
    pub fn outstanding_settle_delays(&self) -> Vec<Duration> {
        self.armed
            .iter()
            .filter(|(_, _, w)| matches!(w, Wakeup::Settle(_)))
            .map(|(_, delay, _)| *delay)
            .collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&mut self, delay: Duration, wakeup: Wakeup) -> Self::Handle {
        self.last_id += 1;
        self.armed.push((self.last_id, delay, wakeup));
        self.last_id
    }

    fn cancel(&mut self, handle: Self::Handle) {
        self.armed.retain(|(id, _, _)| *id != handle);
    }
}
