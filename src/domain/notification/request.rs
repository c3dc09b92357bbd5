// SPDX-License-Identifier: MPL-2.0
//! Notification requests and their resolved form.

use super::action::Action;
use super::kind::Kind;
use std::time::Duration;

/// Title used when the sender does not provide one.
pub const DEFAULT_TITLE: &str = "NotchDrop";

/// Display time used when the request carries no duration (seconds).
pub const DEFAULT_DURATION_SECS: f64 = 2.8;

/// Longest display time (seconds). Longer requests are clamped to it.
pub const MAX_DURATION_SECS: f64 = 86_400.0;

/// Sound name meaning "stay silent".
pub const SOUND_NONE: &str = "none";

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a toast stays up, guaranteed above zero and at most
/// [`MAX_DURATION_SECS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDuration(f64);

impl DisplayDuration {
    /// Returns `None` for zero, negative, NaN or infinite seconds.
    /// Values above [`MAX_DURATION_SECS`] are clamped.
    #[must_use]
    pub fn from_secs(secs: f64) -> Option<Self> {
        (secs.is_finite() && secs > 0.0).then_some(Self(secs.min(MAX_DURATION_SECS)))
    }

    #[must_use]
    pub fn secs(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(DEFAULT_DURATION_SECS)
    }
}

// =============================================================================
// NotificationRequest
// =============================================================================

/// One notification as sent by a producer. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    title: String,
    message: String,
    kind: Kind,
    duration: Option<DisplayDuration>,
    sound: Option<String>,
    action: Option<Action>,
}

impl NotificationRequest {
    /// Creates a request with the default title and an empty message.
    pub fn new(kind: Kind) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            message: String::new(),
            kind,
            duration: None,
            sound: None,
            action: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn duration(&self) -> Option<DisplayDuration> {
        self.duration
    }

    #[must_use]
    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Attaches a message, keeping every other field. Used when resolving.
    pub(crate) fn resolve_with(self, message: String) -> ResolvedNotification {
        let message = if self.message.is_empty() {
            message
        } else {
            self.message
        };
        ResolvedNotification {
            title: self.title,
            message,
            kind: self.kind,
            duration: self.duration.unwrap_or_default(),
            sound: self.sound,
            action: self.action,
        }
    }
}

// =============================================================================
// ResolvedNotification
// =============================================================================

/// A request whose message is guaranteed non-empty and whose duration is
/// settled. Only produced by the variant picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNotification {
    title: String,
    message: String,
    kind: Kind,
    duration: DisplayDuration,
    sound: Option<String>,
    action: Option<Action>,
}

impl ResolvedNotification {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Effective display time.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration.as_duration()
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// The sound to play, if any. The `none` sentinel counts as silence.
    #[must_use]
    pub fn audible_sound(&self) -> Option<&str> {
        self.sound
            .as_deref()
            .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case(SOUND_NONE))
    }
}
