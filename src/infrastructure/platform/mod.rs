// SPDX-License-Identifier: MPL-2.0
//! Desktop integration: tap actions, application focus and sounds.

pub mod actions;
pub mod focus;
pub mod sound;

pub use actions::{BrowserOpener, SystemActionExecutor, UrlOpener};
pub use focus::{AppFocuser, SystemFocuser};
pub use sound::{SoundPlayer, SystemSoundPlayer};
