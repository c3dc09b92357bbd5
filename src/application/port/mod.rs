// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the engine remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`presentation`]: Rendering the toast (render, position, show, hide, sound)
//! - [`action`]: Click side effects (focus an application, open a URL)
//! - [`scheduler`]: One-shot cancellable timers
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no Tokio types)
//! - Traits are `Send` so the engine can live on its own task
//! - No `async fn` - the runtime adapter turns timer expiry into engine calls

pub mod action;
pub mod presentation;
pub mod scheduler;

// Re-export main types for convenience
pub use action::ActionExecutor;
pub use presentation::PresentationPort;
pub use scheduler::{Scheduler, TimerToken, Wakeup};
