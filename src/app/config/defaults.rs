// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Exit grace, queue bound and glyph animation length
//! - **Ingress**: Loopback address the agent listens on
//! - **Focus**: Fallback applications for focus actions
//! - **Logging**: Default log filter

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default delay between hiding a toast and clearing it (milliseconds).
pub const DEFAULT_EXIT_GRACE_MS: u64 = 300;

/// Minimum exit grace; the next queued toast never starts sooner.
pub const MIN_EXIT_GRACE_MS: u64 = 300;

/// Maximum exit grace.
pub const MAX_EXIT_GRACE_MS: u64 = 2_000;

/// Default bound of the pending queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 3;

/// Minimum queue bound.
pub const MIN_QUEUE_CAPACITY: usize = 1;

/// Maximum queue bound.
pub const MAX_QUEUE_CAPACITY: usize = 16;

/// Longest time the glyph keeps animating after a toast appears (seconds).
pub const DEFAULT_ANIMATION_CAP_SECS: f64 = 1.5;

/// Share of the display duration spent animating before the idle frame.
pub const ANIMATION_DURATION_RATIO: f64 = 0.45;

// ==========================================================================
// Ingress Defaults
// ==========================================================================

/// Loopback address of the agent's request listener.
pub const DEFAULT_INGRESS_ADDRESS: &str = "127.0.0.1:47615";

// ==========================================================================
// Focus Defaults
// ==========================================================================

/// Applications tried, in order, when the focus target is not running.
#[cfg(target_os = "macos")]
pub const DEFAULT_FOCUS_FALLBACKS: &[&str] = &["com.apple.Terminal", "com.googlecode.iterm2"];

/// Applications tried, in order, when the focus target is not running.
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_FOCUS_FALLBACKS: &[&str] = &["gnome-terminal", "konsole"];

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_EXIT_GRACE_MS > 0);
    assert!(DEFAULT_EXIT_GRACE_MS >= MIN_EXIT_GRACE_MS);
    assert!(DEFAULT_EXIT_GRACE_MS <= MAX_EXIT_GRACE_MS);

    assert!(MIN_QUEUE_CAPACITY > 0);
    assert!(DEFAULT_QUEUE_CAPACITY >= MIN_QUEUE_CAPACITY);
    assert!(DEFAULT_QUEUE_CAPACITY <= MAX_QUEUE_CAPACITY);

    assert!(DEFAULT_ANIMATION_CAP_SECS > 0.0);
    assert!(ANIMATION_DURATION_RATIO > 0.0);
    assert!(ANIMATION_DURATION_RATIO <= 1.0);
};
