// SPDX-License-Identifier: MPL-2.0
//! This module handles the agent's configuration, stored in a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Exit grace, queue bound, glyph animation cap
//! - `[ingress]` - Listener address shared by the agent and the command
//! - `[focus]` - Fallback applications for focus actions
//! - `[sound]` - Whether sounds are played
//! - `[log]` - Default log filter
//!
//! Every field is optional; missing values fall back to [`defaults`] and
//! out-of-range values are clamped by the accessor methods.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` command-line argument
//! 3. Set `NOTCHDROP_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use notchdrop::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("listening on {}", config.ingress_address());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::application::EngineSettings;
use crate::error::Result;
use crate::app::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast lifecycle settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Delay between hiding a toast and clearing it (milliseconds).
    #[serde(
        default = "default_exit_grace_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_grace_ms: Option<u64>,

    /// Bound of the pending queue.
    #[serde(
        default = "default_queue_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub queue_capacity: Option<usize>,

    /// Longest glyph animation after a toast appears (seconds).
    #[serde(
        default = "default_animation_cap_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_cap_secs: Option<f64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            exit_grace_ms: default_exit_grace_ms(),
            queue_capacity: default_queue_capacity(),
            animation_cap_secs: default_animation_cap_secs(),
        }
    }
}

/// Request listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IngressConfig {
    /// Loopback `host:port` the agent binds and the command connects to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Focus action settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FocusConfig {
    /// Applications tried in order when the focus target is not running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_apps: Option<Vec<String>>,
}

/// Sound settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SoundConfig {
    /// Play the sounds requested by notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LogConfig {
    /// `tracing` filter directive (e.g. `info`, `notchdrop=debug`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub ingress: IngressConfig,

    #[serde(default)]
    pub focus: FocusConfig,

    #[serde(default)]
    pub sound: SoundConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Engine tunables, clamped to their supported ranges.
    #[must_use]
    pub fn engine_settings(&self) -> EngineSettings {
        let grace_ms = self
            .toast
            .exit_grace_ms
            .unwrap_or(DEFAULT_EXIT_GRACE_MS)
            .clamp(MIN_EXIT_GRACE_MS, MAX_EXIT_GRACE_MS);
        let queue_capacity = self
            .toast
            .queue_capacity
            .unwrap_or(DEFAULT_QUEUE_CAPACITY)
            .clamp(MIN_QUEUE_CAPACITY, MAX_QUEUE_CAPACITY);
        EngineSettings {
            exit_grace: Duration::from_millis(grace_ms),
            queue_capacity,
        }
    }

    /// Longest glyph animation; non-positive or non-finite values fall back
    /// to the default.
    #[must_use]
    pub fn animation_cap(&self) -> Duration {
        let secs = self
            .toast
            .animation_cap_secs
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_ANIMATION_CAP_SECS);
        Duration::from_secs_f64(secs)
    }

    /// Listener address shared by agent and command.
    #[must_use]
    pub fn ingress_address(&self) -> String {
        self.ingress
            .address
            .clone()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INGRESS_ADDRESS.to_string())
    }

    /// Fallback applications for focus actions.
    #[must_use]
    pub fn fallback_apps(&self) -> Vec<String> {
        self.focus.fallback_apps.clone().unwrap_or_else(|| {
            DEFAULT_FOCUS_FALLBACKS
                .iter()
                .map(ToString::to_string)
                .collect()
        })
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound.enabled.unwrap_or(true)
    }

    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_exit_grace_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_GRACE_MS)
}

fn default_queue_capacity() -> Option<usize> {
    Some(DEFAULT_QUEUE_CAPACITY)
}

fn default_animation_cap_secs() -> Option<f64> {
    Some(DEFAULT_ANIMATION_CAP_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "failed to load {}, using defaults: {err}",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
