// SPDX-License-Identifier: MPL-2.0
//! Bringing a running application to the foreground.
//!
//! Application ids are bundle identifiers on macOS (`com.apple.Terminal`)
//! and window classes on Linux (`gnome-terminal`).

use std::io;
use std::process::{Command, Stdio};

/// Foregrounds running applications by id.
pub trait AppFocuser: Send + Sync {
    /// Activates `app_id` if it is running.
    ///
    /// Returns `Ok(false)` when no such application is running. Blocking.
    fn focus(&self, app_id: &str) -> io::Result<bool>;
}

/// Focuses applications through the platform's scripting tools.
///
/// - macOS: `osascript` (`application id "<id>" is running`, then `activate`)
/// - Linux: `wmctrl -x -a <class>`
#[derive(Debug, Clone, Default)]
pub struct SystemFocuser;

impl SystemFocuser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Ids are reverse-DNS names or window classes; anything else is refused
/// before it reaches a script.
fn is_valid_app_id(app_id: &str) -> bool {
    !app_id.is_empty()
        && app_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

fn quiet(program: &str) -> Command {
    let mut command = Command::new(program);
    command.stdin(Stdio::null()).stderr(Stdio::null());
    command
}

#[cfg(target_os = "macos")]
fn focus_running_app(app_id: &str) -> io::Result<bool> {
    let probe = quiet("osascript")
        .arg("-e")
        .arg(format!("application id \"{app_id}\" is running"))
        .output()?;
    if !probe.status.success() || String::from_utf8_lossy(&probe.stdout).trim() != "true" {
        return Ok(false);
    }
    let status = quiet("osascript")
        .arg("-e")
        .arg(format!("tell application id \"{app_id}\" to activate"))
        .stdout(Stdio::null())
        .status()?;
    Ok(status.success())
}

#[cfg(target_os = "linux")]
fn focus_running_app(app_id: &str) -> io::Result<bool> {
    let status = quiet("wmctrl")
        .args(["-x", "-a", app_id])
        .stdout(Stdio::null())
        .status()?;
    Ok(status.success())
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn focus_running_app(_app_id: &str) -> io::Result<bool> {
    Ok(false)
}

impl AppFocuser for SystemFocuser {
    fn focus(&self, app_id: &str) -> io::Result<bool> {
        if !is_valid_app_id(app_id) {
            tracing::debug!(app_id, "refusing malformed application id");
            return Ok(false);
        }
        focus_running_app(app_id)
    }
}
