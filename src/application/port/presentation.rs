// SPDX-License-Identifier: MPL-2.0
//! Presentation port definition.
//!
//! This module defines the [`PresentationPort`] trait, the surface the engine
//! pushes display changes into. The toast UI implements it through an event
//! channel; tests implement it with a recorder.
//!
//! # Design Notes
//!
//! - Push model: the engine calls the port, the UI never polls engine state
//! - Calls must return quickly; the engine invokes them from its single
//!   serialization point
//! - The reverse direction (a tap on the toast) goes through
//!   `EngineHandle::activate`, not through this trait

use crate::domain::notification::ResolvedNotification;

// =============================================================================
// PresentationPort Trait
// =============================================================================

/// Port for rendering the toast.
///
/// # Call Order
///
/// On a fresh notification the engine calls `render`, then `position` and
/// `show`. On replacement only `render` is called. On dismissal the engine
/// calls `render` with `animating = false` followed by `hide`; the content
/// stays valid until the exit grace period has elapsed.
pub trait PresentationPort: Send {
    /// Displays `notification`. `animating` selects the animated glyph
    /// instead of the idle frame.
    fn render(&mut self, notification: &ResolvedNotification, animating: bool);

    /// Places the surface on the chosen display.
    fn position(&mut self);

    /// Makes the surface visible and starts the entry transition.
    fn show(&mut self);

    /// Starts the exit transition and hides the surface afterwards.
    fn hide(&mut self);

    /// Plays a system sound. Fire-and-forget: failures are swallowed by the
    /// implementation and never reach the engine.
    fn play_sound(&mut self, name: &str);
}
