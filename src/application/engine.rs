// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle engine.
//!
//! The [`Engine`] owns the one piece of mutable state in the system: the
//! notification currently on screen, the visibility flag, the pending queue
//! and the timers. It is a plain synchronous state machine; the runtime
//! adapter (`infrastructure::runtime`) serializes every call onto a single
//! task and feeds timer expiry back in through [`Engine::on_wakeup`].
//!
//! # Lifecycle
//!
//! ```text
//!            show / enqueue                 dismiss timer, tap
//!   Idle ─────────────────────▶ Showing ──────────────────────▶ Leaving
//!    ▲                          │  ▲  show (replace, restart timer)  │
//!    │                          └──┘                                 │
//!    └──────────── exit grace elapsed (clear, pop queue) ◀───────────┘
//! ```
//!
//! `show` while `Showing` replaces the content in place and restarts the
//! dismiss timer. `show` while `Leaving` starts a fresh entry and abandons the
//! pending clear. `enqueue` only shows immediately when fully idle; otherwise
//! the request waits in a bounded FIFO that is drained after each exit grace.

use super::port::{ActionExecutor, PresentationPort, Scheduler, TimerToken, Wakeup};
use super::variants::VariantPicker;
use crate::domain::notification::{NotificationRequest, ResolvedNotification};
use std::collections::VecDeque;
use std::time::Duration;

/// Delay between hiding a toast and clearing it (exit transition length).
pub const DEFAULT_EXIT_GRACE: Duration = Duration::from_millis(300);

/// Maximum number of pending queued requests.
pub const DEFAULT_QUEUE_CAPACITY: usize = 3;

/// Tunables of the engine, normally taken from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Gap between `hide` and clearing the content. Also the minimum gap
    /// before the next queued notification appears.
    pub exit_grace: Duration,
    /// Bound of the pending queue (at least 1).
    pub queue_capacity: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            exit_grace: DEFAULT_EXIT_GRACE,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// Coarse engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing on screen, nothing to clear.
    Idle,
    /// A toast is visible and its dismiss timer is armed.
    Showing,
    /// Hidden, exit grace running; content still available.
    Leaving,
}

/// Result of [`Engine::enqueue`].
#[derive(Debug, Clone, PartialEq)]
pub enum EnqueueOutcome {
    /// The engine was idle and showed the request right away.
    Shown,
    /// The request waits in the pending queue.
    Queued,
    /// The queue was full; the oldest pending request was dropped to make room.
    Evicted(NotificationRequest),
}

/// Point-in-time view of the engine state.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSnapshot {
    pub phase: Phase,
    pub visible: bool,
    pub current: Option<ResolvedNotification>,
    pub pending: usize,
    /// Token of the armed dismiss timer. There is never more than one.
    pub dismiss_timer: Option<TimerToken>,
    /// Token of the armed exit-grace timer.
    pub settle_timer: Option<TimerToken>,
}

/// A timer the engine armed and may cancel.
#[derive(Debug)]
struct Armed<H> {
    token: TimerToken,
    handle: H,
}

/// The notification state machine.
pub struct Engine<P, A, S: Scheduler> {
    presenter: P,
    executor: A,
    scheduler: S,
    picker: VariantPicker,
    settings: EngineSettings,
    current: Option<ResolvedNotification>,
    visible: bool,
    pending: VecDeque<NotificationRequest>,
    dismiss_timer: Option<Armed<S::Handle>>,
    settle_timer: Option<Armed<S::Handle>>,
    last_token: u64,
}

impl<P, A, S> Engine<P, A, S>
where
    P: PresentationPort,
    A: ActionExecutor,
    S: Scheduler,
{
    /// Creates an idle engine.
    pub fn new(
        presenter: P,
        executor: A,
        scheduler: S,
        picker: VariantPicker,
        settings: EngineSettings,
    ) -> Self {
        let settings = EngineSettings {
            queue_capacity: settings.queue_capacity.max(1),
            ..settings
        };
        Self {
            presenter,
            executor,
            scheduler,
            picker,
            settings,
            current: None,
            visible: false,
            pending: VecDeque::with_capacity(settings.queue_capacity),
            dismiss_timer: None,
            settle_timer: None,
            last_token: 0,
        }
    }

    /// Shows `request` now, replacing whatever is on screen.
    pub fn show(&mut self, request: NotificationRequest) {
        let resolved = self.picker.resolve(request);

        if let Some(sound) = resolved.audible_sound() {
            self.presenter.play_sound(sound);
        }

        // A new toast supersedes a pending clear of the previous one.
        self.cancel_settle_timer();

        let duration = resolved.duration();
        let entering = !self.visible;
        self.presenter.render(&resolved, true);
        tracing::debug!(
            kind = %resolved.kind(),
            title = resolved.title(),
            duration_ms = duration.as_millis() as u64,
            replaced = !entering,
            "showing notification"
        );
        self.current = Some(resolved);

        if entering {
            self.visible = true;
            self.presenter.position();
            self.presenter.show();
        }

        self.restart_dismiss_timer(duration);
    }

    /// Shows `request` if nothing is on screen, otherwise queues it.
    pub fn enqueue(&mut self, request: NotificationRequest) -> EnqueueOutcome {
        if self.phase() == Phase::Idle {
            self.show(request);
            return EnqueueOutcome::Shown;
        }

        let evicted = if self.pending.len() >= self.settings.queue_capacity {
            self.pending.pop_front()
        } else {
            None
        };
        self.pending.push_back(request);

        match evicted {
            Some(dropped) => {
                tracing::warn!(
                    capacity = self.settings.queue_capacity,
                    dropped_title = dropped.title(),
                    "notification queue full, dropped oldest entry"
                );
                EnqueueOutcome::Evicted(dropped)
            }
            None => {
                tracing::debug!(pending = self.pending.len(), "notification queued");
                EnqueueOutcome::Queued
            }
        }
    }

    /// Hides the toast. The content is cleared after the exit grace, then
    /// the next queued request (if any) is shown. Calling it again before
    /// the grace has elapsed changes nothing.
    pub fn dismiss(&mut self) {
        self.cancel_dismiss_timer();

        if self.visible {
            self.visible = false;
            if let Some(current) = &self.current {
                self.presenter.render(current, false);
            }
            self.presenter.hide();
            tracing::debug!("dismissing notification");
        }

        if self.current.is_some() && self.settle_timer.is_none() {
            let token = self.next_token();
            let handle = self
                .scheduler
                .schedule(self.settings.exit_grace, Wakeup::Settle(token));
            self.settle_timer = Some(Armed { token, handle });
        }
    }

    /// Handles a tap on the toast: runs the action of the visible
    /// notification, if it has one, then dismisses.
    ///
    /// While leaving, `current` is still set but no longer visible; a tap in
    /// that window does not run the action again, it only dismisses.
    pub fn activate(&mut self) {
        if self.visible {
            let action = self
                .current
                .as_ref()
                .and_then(ResolvedNotification::action)
                .filter(|action| action.is_actionable());
            if let Some(action) = action {
                tracing::debug!(action = %action.kind(), target = ?action.target(), "running tap action");
                self.executor.execute(action);
            }
        }
        self.dismiss();
    }

    /// Delivers an expired timer. Wake-ups of cancelled timers are ignored.
    pub fn on_wakeup(&mut self, wakeup: Wakeup) {
        match wakeup {
            Wakeup::Dismiss(token) => {
                if self.dismiss_timer.as_ref().is_some_and(|t| t.token == token) {
                    self.dismiss_timer = None;
                    self.dismiss();
                } else {
                    tracing::trace!(token = token.value(), "stale dismiss wake-up ignored");
                }
            }
            Wakeup::Settle(token) => {
                if self.settle_timer.as_ref().is_some_and(|t| t.token == token) {
                    self.settle_timer = None;
                    self.settle();
                } else {
                    tracing::trace!(token = token.value(), "stale settle wake-up ignored");
                }
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.visible, &self.current) {
            (true, _) => Phase::Showing,
            (false, Some(_)) => Phase::Leaving,
            (false, None) => Phase::Idle,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn current(&self) -> Option<&ResolvedNotification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            phase: self.phase(),
            visible: self.visible,
            current: self.current.clone(),
            pending: self.pending.len(),
            dismiss_timer: self.dismiss_timer.as_ref().map(|t| t.token),
            settle_timer: self.settle_timer.as_ref().map(|t| t.token),
        }
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn executor(&self) -> &A {
        &self.executor
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[cfg(test)]
    pub(crate) fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn settle(&mut self) {
        self.current = None;
        if let Some(next) = self.pending.pop_front() {
            tracing::debug!(remaining = self.pending.len(), "showing next queued notification");
            self.show(next);
        }
    }

    /// Cancels the armed dismiss timer and arms a new one in the same call,
    /// so two dismiss timers never coexist.
    fn restart_dismiss_timer(&mut self, delay: Duration) {
        self.cancel_dismiss_timer();
        let token = self.next_token();
        let handle = self.scheduler.schedule(delay, Wakeup::Dismiss(token));
        self.dismiss_timer = Some(Armed { token, handle });
    }

    fn cancel_dismiss_timer(&mut self) {
        if let Some(armed) = self.dismiss_timer.take() {
            self.scheduler.cancel(armed.handle);
        }
    }

    fn cancel_settle_timer(&mut self) {
        if let Some(armed) = self.settle_timer.take() {
            self.scheduler.cancel(armed.handle);
        }
    }

    fn next_token(&mut self) -> TimerToken {
        self.last_token += 1;
        TimerToken::new(self.last_token)
    }
}
