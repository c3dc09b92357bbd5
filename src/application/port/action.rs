// SPDX-License-Identifier: MPL-2.0
//! Action execution port definition.
//!
//! The engine hands the current notification's [`Action`] to an
//! [`ActionExecutor`] when the toast is tapped and then dismisses
//! unconditionally, whatever the executor managed to do.

use crate::domain::notification::Action;

/// Port for click side effects (focus an application, open a URL).
///
/// Implementations never report failure: an unknown application or an
/// invalid URL is a silent no-op. Work that may block must be moved off the
/// calling thread, since the engine calls this from its serialization point.
pub trait ActionExecutor: Send {
    /// Performs `action`. Never called with an `ActionKind::None` action.
    fn execute(&self, action: &Action);
}

impl<T: ActionExecutor + Sync + ?Sized> ActionExecutor for std::sync::Arc<T> {
    fn execute(&self, action: &Action) {
        (**self).execute(action);
    }
}
