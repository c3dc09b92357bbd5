// SPDX-License-Identifier: MPL-2.0
//! System sound playback.
//!
//! Sounds are played by a short-lived helper process spawned on the Tokio
//! runtime; the caller never waits for it and any failure is only logged.

use std::path::PathBuf;

/// Plays named system sounds.
pub trait SoundPlayer: Send + Sync {
    /// Starts playing `name` and returns immediately.
    fn play(&self, name: &str);
}

/// Plays sounds with the platform's command-line player.
///
/// - macOS: `afplay /System/Library/Sounds/<name>.aiff`
/// - Linux: `canberra-gtk-play --id <name>`
#[derive(Debug, Clone, Default)]
pub struct SystemSoundPlayer;

impl SystemSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Sound names are plain identifiers like `Glass` or `message-new-instant`.
fn is_valid_sound_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' ' | '.'))
        && !name.contains("..")
}

/// Program and arguments that play `name`, if this platform has a player.
fn player_command(name: &str) -> Option<(&'static str, Vec<String>)> {
    if cfg!(target_os = "macos") {
        let path: PathBuf = ["/System/Library/Sounds", &format!("{name}.aiff")]
            .iter()
            .collect();
        Some(("afplay", vec![path.to_string_lossy().into_owned()]))
    } else if cfg!(target_os = "linux") {
        Some(("canberra-gtk-play", vec!["--id".to_string(), name.to_string()]))
    } else {
        None
    }
}

impl SoundPlayer for SystemSoundPlayer {
    fn play(&self, name: &str) {
        if !is_valid_sound_name(name) {
            tracing::debug!(sound = name, "ignoring sound with unsupported name");
            return;
        }
        let Some((program, args)) = player_command(name) else {
            tracing::debug!(sound = name, "no sound player on this platform");
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(sound = name, "no async runtime, sound skipped");
            return;
        };

        let name = name.to_string();
        runtime.spawn(async move {
            let status = tokio::process::Command::new(program)
                .args(&args)
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .status()
                .await;
            match status {
                Ok(status) if status.success() => {}
                Ok(status) => tracing::debug!(sound = %name, %status, "sound player failed"),
                Err(err) => tracing::debug!(sound = %name, error = %err, "sound player unavailable"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_accepted() {
        assert!(is_valid_sound_name("Glass"));
        assert!(is_valid_sound_name("message-new-instant"));
        assert!(is_valid_sound_name("Sound 2"));
    }

    #[test]
    fn path_like_names_are_rejected() {
        assert!(!is_valid_sound_name(""));
        assert!(!is_valid_sound_name("../../etc/passwd"));
        assert!(!is_valid_sound_name("/tmp/x"));
        assert!(!is_valid_sound_name("a;rm"));
    }

    #[test]
    fn play_without_runtime_does_not_panic() {
        SystemSoundPlayer::new().play("Glass");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_uses_canberra() {
        let (program, args) = player_command("bell").unwrap();
        assert_eq!(program, "canberra-gtk-play");
        assert_eq!(args, vec!["--id", "bell"]);
    }
}
