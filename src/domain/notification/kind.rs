// SPDX-License-Identifier: MPL-2.0
//! Notification kinds.

use std::fmt;
use std::str::FromStr;

/// Category of a notification. Selects the accent, the glyph and the pool
/// of default messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Something is blocked on the user.
    Waiting,
    /// A task finished successfully.
    Success,
    /// A task failed.
    Error,
    /// Plain status update.
    #[default]
    Info,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 4] = [Kind::Waiting, Kind::Success, Kind::Error, Kind::Info];

    /// Wire name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Waiting => "waiting",
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Info => "info",
        }
    }

    /// Accent colour as `#RRGGBB`.
    #[must_use]
    pub fn accent_hex(self) -> &'static str {
        match self {
            Kind::Waiting => "#D4A574",
            Kind::Success => "#7EC897",
            Kind::Error => "#E88B8B",
            Kind::Info => "#8BB8E8",
        }
    }

    /// Accent colour as RGB bytes.
    #[must_use]
    pub fn accent_rgb(self) -> (u8, u8, u8) {
        match self {
            Kind::Waiting => (0xD4, 0xA5, 0x74),
            Kind::Success => (0x7E, 0xC8, 0x97),
            Kind::Error => (0xE8, 0x8B, 0x8B),
            Kind::Info => (0x8B, 0xB8, 0xE8),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown kind `{}` (expected waiting, success, error or info)",
            self.0
        )
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(Kind::Waiting),
            "success" => Ok(Kind::Success),
            "error" => Ok(Kind::Error),
            "info" => Ok(Kind::Info),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_parse_back() {
        for kind in Kind::ALL {
            assert_eq!(kind.as_str().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "warning".parse::<Kind>().unwrap_err();
        assert_eq!(err, UnknownKind("warning".into()));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Error".parse::<Kind>().is_err());
    }

    #[test]
    fn accents_are_distinct() {
        let accents: std::collections::HashSet<_> =
            Kind::ALL.iter().map(|k| k.accent_rgb()).collect();
        assert_eq!(accents.len(), Kind::ALL.len());
    }

    #[test]
    fn hex_matches_rgb() {
        for kind in Kind::ALL {
            let (r, g, b) = kind.accent_rgb();
            assert_eq!(kind.accent_hex(), format!("#{r:02X}{g:02X}{b:02X}"));
        }
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(Kind::default(), Kind::Info);
    }
}
