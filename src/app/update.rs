// SPDX-License-Identifier: MPL-2.0
//! State transitions of the overlay window.
//!
//! Presentation events and animation ticks mutate the toast and decide
//! whether the overlay window has to be opened or closed. The decision is
//! returned as a [`WindowCommand`] so `App::update` can turn it into tasks.

use crate::infrastructure::PresentationEvent;
use crate::ui::notifications::ToastState;
use std::time::Instant;

/// What should happen to the overlay window after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    None,
    Open,
    Close,
}

/// Applies a presentation event to the toast.
///
/// `window_open` is whether an overlay window currently exists.
pub fn apply_presentation(
    toast: &mut ToastState,
    event: PresentationEvent,
    window_open: bool,
    now: Instant,
) -> WindowCommand {
    match event {
        PresentationEvent::Render {
            notification,
            animating,
        } => {
            toast.render(notification, animating, now);
            WindowCommand::None
        }
        PresentationEvent::Position => {
            if window_open {
                WindowCommand::None
            } else {
                WindowCommand::Open
            }
        }
        PresentationEvent::Show => {
            toast.show(now);
            WindowCommand::None
        }
        PresentationEvent::Hide => {
            toast.hide(now);
            WindowCommand::None
        }
    }
}

/// Advances the toast animation; closes the window once the exit is over.
pub fn apply_tick(toast: &mut ToastState, window_open: bool, now: Instant) -> WindowCommand {
    if toast.tick(now) && window_open {
        WindowCommand::Close
    } else {
        WindowCommand::None
    }
}
