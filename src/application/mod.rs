// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`engine`]: The notification lifecycle state machine
//! - [`variants`]: Default message resolution
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer talks to the engine through `infrastructure::runtime`

pub mod engine;
pub mod port;
pub mod variants;

pub use engine::{Engine, EngineSettings, EngineSnapshot, EnqueueOutcome, Phase};
pub use variants::VariantPicker;
