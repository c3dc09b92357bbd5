// SPDX-License-Identifier: MPL-2.0
//! Toast notification surface.
//!
//! The agent shows one toast at a time, near the top of the screen. Its
//! lifecycle is owned by the engine; this module only mirrors the
//! presentation events it receives.
//!
//! # Components
//!
//! - [`glyph`] - Per-kind animated glyph frames
//! - [`toast`] - `ToastState` and the toast widget
//!
//! # Usage
//!
//! ```ignore
//! let mut toast = ToastState::new(config.animation_cap());
//! toast.render(notification, true, Instant::now());
//! toast.show(Instant::now());
//!
//! // In your view function
//! toast::view(&toast, Message::Tapped)
//! ```

pub mod glyph;
pub mod toast;

pub use glyph::GlyphAnimation;
pub use toast::{Stage, ToastState};
