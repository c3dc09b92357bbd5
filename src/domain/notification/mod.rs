// SPDX-License-Identifier: MPL-2.0
//! Notification request model.
//!
//! Producers build a [`NotificationRequest`]; the engine turns it into a
//! [`ResolvedNotification`] (message guaranteed non-empty) before showing it.

pub mod action;
pub mod kind;
pub mod request;

pub use action::{Action, ActionKind, UnknownAction};
pub use kind::{Kind, UnknownKind};
pub use request::{
    DisplayDuration, NotificationRequest, ResolvedNotification, DEFAULT_DURATION_SECS,
    DEFAULT_TITLE, MAX_DURATION_SECS, SOUND_NONE,
};
