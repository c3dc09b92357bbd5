// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The UI follows the Elm-style "state down, messages up" pattern. State is
//! driven by presentation events from the engine; the only message flowing
//! back is a tap on the toast.
//!
//! - [`notifications`] - Toast state, glyph animation and widget
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing, motion)

pub mod design_tokens;
pub mod notifications;
