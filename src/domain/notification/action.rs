// SPDX-License-Identifier: MPL-2.0
//! Click actions attached to a notification.

use std::fmt;
use std::str::FromStr;

/// What tapping the toast does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionKind {
    /// Tapping only dismisses.
    #[default]
    None,
    /// Bring an application to the foreground.
    Focus,
    /// Open a URL with the default handler.
    OpenUrl,
}

impl ActionKind {
    /// Wire name of the action kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::None => "none",
            ActionKind::Focus => "focus",
            ActionKind::OpenUrl => "open-url",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown action `{}` (expected focus, open-url or none)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for ActionKind {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ActionKind::None),
            "focus" => Ok(ActionKind::Focus),
            "open-url" => Ok(ActionKind::OpenUrl),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// An action and its target.
///
/// For [`ActionKind::Focus`] the target is an application identifier, for
/// [`ActionKind::OpenUrl`] a URL. The target of [`ActionKind::None`] is
/// always dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Action {
    kind: ActionKind,
    target: Option<String>,
}

impl Action {
    /// Creates an action. A `None` action never keeps its target.
    pub fn new(kind: ActionKind, target: Option<String>) -> Self {
        let target = match kind {
            ActionKind::None => None,
            ActionKind::Focus | ActionKind::OpenUrl => target.filter(|t| !t.is_empty()),
        };
        Self { kind, target }
    }

    /// Action that does nothing besides dismissing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Focus the given application (or the fallbacks when `None`).
    pub fn focus(app_id: Option<impl Into<String>>) -> Self {
        Self::new(ActionKind::Focus, app_id.map(Into::into))
    }

    /// Open the given URL.
    pub fn open_url(url: impl Into<String>) -> Self {
        Self::new(ActionKind::OpenUrl, Some(url.into()))
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Whether tapping should run this action before dismissing.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        self.kind != ActionKind::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_action_drops_target() {
        let action = Action::new(ActionKind::None, Some("com.example".into()));
        assert_eq!(action.target(), None);
        assert!(!action.is_actionable());
    }

    #[test]
    fn empty_target_is_treated_as_absent() {
        let action = Action::new(ActionKind::Focus, Some(String::new()));
        assert_eq!(action.target(), None);
        assert!(action.is_actionable());
    }

    #[test]
    fn wire_names_round_trip() {
        for kind in [ActionKind::None, ActionKind::Focus, ActionKind::OpenUrl] {
            assert_eq!(kind.as_str().parse::<ActionKind>(), Ok(kind));
        }
        assert!("open_url".parse::<ActionKind>().is_err());
    }

    #[test]
    fn constructors_set_kind_and_target() {
        let focus = Action::focus(Some("com.apple.Terminal"));
        assert_eq!(focus.kind(), ActionKind::Focus);
        assert_eq!(focus.target(), Some("com.apple.Terminal"));

        let url = Action::open_url("https://example.com");
        assert_eq!(url.kind(), ActionKind::OpenUrl);
        assert_eq!(url.target(), Some("https://example.com"));
    }
}
