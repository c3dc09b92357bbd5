// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`notification`]: Request model ([`Kind`](notification::Kind),
//!   [`Action`](notification::Action),
//!   [`NotificationRequest`](notification::NotificationRequest),
//!   [`ResolvedNotification`](notification::ResolvedNotification))
//! - [`variants`]: Default message pools per kind

pub mod notification;
pub mod variants;
