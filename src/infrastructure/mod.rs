// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the Tokio plumbing around the engine.
//!
//! # Available Adapters
//!
//! - [`runtime`]: Engine task, [`EngineHandle`] and the Tokio [`Scheduler`]
//! - [`presenter`]: Channel-backed [`PresentationPort`]
//! - [`platform`]: Desktop [`ActionExecutor`], app focus and sounds
//! - [`ingress`]: Request URI codec and loopback transport
//!
//! [`Scheduler`]: crate::application::port::Scheduler
//! [`PresentationPort`]: crate::application::port::PresentationPort
//! [`ActionExecutor`]: crate::application::port::ActionExecutor

pub mod ingress;
pub mod platform;
pub mod presenter;
pub mod runtime;

// Re-export main types for convenience
pub use platform::{SystemActionExecutor, SystemSoundPlayer};
pub use presenter::{ChannelPresenter, PresentationEvent};
pub use runtime::{EngineHandle, EngineStopped};
