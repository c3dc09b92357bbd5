// SPDX-License-Identifier: MPL-2.0
//! Tracing setup for the two entry points.
//!
//! - The agent logs to `notchdrop.log` in the data directory, falling back
//!   to stderr when the file cannot be opened.
//! - The `notify` command logs to stderr and stays quiet below `warn`.
//!
//! `RUST_LOG` always wins over the configured level.

use crate::app::paths;
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "notchdrop.log";

/// Filter for the `notify` command.
pub const COMMAND_LOG_LEVEL: &str = "warn";

/// `RUST_LOG` if set and valid, else `default_level`, else `warn`.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(COMMAND_LOG_LEVEL))
}

/// Initializes logging for the long-running agent.
pub fn init_agent(default_level: &str) {
    let filter = env_filter(default_level);
    let (log_file, warnings) = open_log_file();

    let initialized = match log_file {
        Some((path, file)) => {
            let result = tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .try_init();
            if result.is_ok() {
                tracing::info!(path = %path.display(), "logging initialized");
            }
            result
        }
        None => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init(),
    };

    if initialized.is_ok() {
        for warning in warnings {
            tracing::warn!("{warning}");
        }
    }
}

/// Initializes stderr logging for the `notify` command.
pub fn init_command() {
    // Ignored if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(env_filter(COMMAND_LOG_LEVEL))
        .try_init();
}

fn log_file_path() -> Option<PathBuf> {
    paths::get_app_data_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();
    let Some(path) = log_file_path() else {
        warnings.push("no data directory, logging to stderr".to_string());
        return (None, warnings);
    };

    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warnings.push(format!(
                "failed to create log dir {}: {err}",
                parent.display()
            ));
            return (None, warnings);
        }
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => (Some((path, file)), warnings),
        Err(err) => {
            warnings.push(format!("failed to open log file {}: {err}", path.display()));
            (None, warnings)
        }
    }
}
