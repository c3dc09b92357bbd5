// SPDX-License-Identifier: MPL-2.0
//! Wire format of notification requests.
//!
//! A request is a JSON object carried inside a URI:
//!
//! ```text
//! notchdrop://notify?b64=<base64url(JSON), no padding>
//! ```
//!
//! ```json
//! {
//!   "title": "Build",
//!   "message": "All green",
//!   "kind": "success",
//!   "duration": 4.0,
//!   "sound": "Glass",
//!   "action": { "type": "focus", "bundleId": "com.apple.Terminal" },
//!   "queue": true
//! }
//! ```
//!
//! `title`, `message` and `kind` are required, everything else is optional.
//! The decoder is lenient about the base64 flavour (padded or not, URL-safe
//! or standard alphabet) and, failing base64, accepts percent-encoded plain
//! JSON in the same parameter. Decoding is pure.

use crate::domain::notification::{
    Action, ActionKind, DisplayDuration, Kind, NotificationRequest,
};
use crate::error::IngressError;
use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::{Deserialize, Serialize};
use url::Url;

/// URI scheme addressing the agent.
pub const SCHEME: &str = "notchdrop";

/// URI host of the notify endpoint.
pub const HOST: &str = "notify";

/// Query parameter holding the payload.
pub const PAYLOAD_PARAM: &str = "b64";

/// URL-safe alphabet, padding optional.
const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A decoded request and how it should reach the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct IngressRequest {
    pub request: NotificationRequest,
    /// Wait for the current toast instead of replacing it.
    pub queue: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct WirePayload {
    title: String,
    message: String,
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action: Option<WireAction>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    queue: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "bundleId", default, skip_serializing_if = "Option::is_none")]
    bundle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}

impl WirePayload {
    fn from_request(request: &NotificationRequest, queue: bool) -> Self {
        Self {
            title: request.title().to_string(),
            message: request.message().to_string(),
            kind: request.kind().as_str().to_string(),
            duration: request.duration().map(DisplayDuration::secs),
            sound: request.sound().map(str::to_string),
            action: request.action().map(WireAction::from_action),
            queue,
        }
    }

    fn into_request(self) -> Result<IngressRequest, IngressError> {
        let kind: Kind = self
            .kind
            .parse()
            .map_err(|err| IngressError::InvalidPayload(format!("{err}")))?;

        let mut request = NotificationRequest::new(kind)
            .with_title(self.title)
            .with_message(self.message);
        if let Some(secs) = self.duration {
            let duration = DisplayDuration::from_secs(secs).ok_or(IngressError::InvalidDuration)?;
            request = request.with_duration(duration);
        }
        if let Some(sound) = self.sound {
            request = request.with_sound(sound);
        }
        if let Some(action) = self.action {
            request = request.with_action(action.into_action());
        }

        Ok(IngressRequest {
            request,
            queue: self.queue,
        })
    }
}

impl WireAction {
    fn from_action(action: &Action) -> Self {
        let target = action.target().map(str::to_string);
        let (bundle_id, url) = match action.kind() {
            ActionKind::Focus => (target, None),
            ActionKind::OpenUrl => (None, target),
            ActionKind::None => (None, None),
        };
        Self {
            kind: action.kind().as_str().to_string(),
            bundle_id,
            url,
            target: None,
        }
    }

    /// An unknown action type keeps the toast and makes the tap a plain
    /// dismiss.
    fn into_action(self) -> Action {
        let kind = match self.kind.parse::<ActionKind>() {
            Ok(kind) => kind,
            Err(err) => {
                tracing::debug!(error = %err, "unknown action type, tap will only dismiss");
                ActionKind::None
            }
        };
        let target = match kind {
            ActionKind::Focus => self.bundle_id.or(self.target),
            ActionKind::OpenUrl => self.url.or(self.target),
            ActionKind::None => None,
        };
        Action::new(kind, target)
    }
}

/// Decodes a JSON payload.
pub fn decode_payload(json: &[u8]) -> Result<IngressRequest, IngressError> {
    let wire: WirePayload = serde_json::from_slice(json)
        .map_err(|err| IngressError::InvalidPayload(err.to_string()))?;
    wire.into_request()
}

/// Decodes a `notchdrop://notify?b64=…` URI.
pub fn decode_uri(uri: &str) -> Result<IngressRequest, IngressError> {
    let url = Url::parse(uri.trim()).map_err(|err| IngressError::MalformedUri(err.to_string()))?;

    let host = url.host_str().unwrap_or_default();
    if url.scheme() != SCHEME || !host.eq_ignore_ascii_case(HOST) {
        return Err(IngressError::UnexpectedTarget(format!(
            "{}://{}",
            url.scheme(),
            host
        )));
    }

    let value = url
        .query_pairs()
        .find(|(name, _)| name == PAYLOAD_PARAM)
        .map(|(_, value)| value.into_owned())
        .ok_or(IngressError::MissingPayload)?;

    decode_param(&value)
}

/// Base64 first, then plain JSON.
fn decode_param(value: &str) -> Result<IngressRequest, IngressError> {
    let from_base64 = decode_base64(value).and_then(|bytes| decode_payload(&bytes));
    match from_base64 {
        Ok(decoded) => Ok(decoded),
        Err(base64_err) => match decode_payload(value.as_bytes()) {
            Ok(decoded) => Ok(decoded),
            // Report whichever attempt the sender most likely meant.
            Err(json_err) if value.trim_start().starts_with('{') => Err(json_err),
            Err(_) => Err(base64_err),
        },
    }
}

fn decode_base64(value: &str) -> Result<Vec<u8>, IngressError> {
    // Form decoding turns `+` into a space; map both standard-alphabet
    // characters onto their URL-safe equivalents.
    let normalized: String = value
        .trim()
        .chars()
        .map(|c| match c {
            '+' | ' ' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    LENIENT_URL_SAFE
        .decode(normalized.as_bytes())
        .map_err(|err| IngressError::InvalidPayload(format!("base64: {err}")))
}

/// Encodes `request` as a URI the agent accepts.
#[must_use]
pub fn encode_uri(request: &NotificationRequest, queue: bool) -> String {
    let wire = WirePayload::from_request(request, queue);
    // Plain structs of strings and numbers always serialize.
    let json = serde_json::to_vec(&wire).unwrap_or_default();
    format!(
        "{SCHEME}://{HOST}?{PAYLOAD_PARAM}={}",
        URL_SAFE_NO_PAD.encode(json)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::MAX_DURATION_SECS;
    use base64::engine::general_purpose::STANDARD;

    fn uri_for(json: &str) -> String {
        format!("notchdrop://notify?b64={}", URL_SAFE_NO_PAD.encode(json))
    }

    #[test]
    fn decodes_full_payload() {
        let decoded = decode_uri(&uri_for(
            r#"{"title":"Build","message":"All green","kind":"success","duration":4.5,
                "sound":"Glass","action":{"type":"focus","bundleId":"com.apple.Terminal"}}"#,
        ))
        .unwrap();

        let request = decoded.request;
        assert_eq!(request.title(), "Build");
        assert_eq!(request.message(), "All green");
        assert_eq!(request.kind(), Kind::Success);
        assert_eq!(request.duration().map(DisplayDuration::secs), Some(4.5));
        assert_eq!(request.sound(), Some("Glass"));
        assert_eq!(request.action(), Some(&Action::focus(Some("com.apple.Terminal"))));
        assert!(!decoded.queue);
    }

    #[test]
    fn encoded_uri_decodes_to_same_request() {
        let request = NotificationRequest::new(Kind::Waiting)
            .with_title("Agent")
            .with_message("needs input ✋")
            .with_duration(DisplayDuration::from_secs(1.25).unwrap())
            .with_action(Action::open_url("https://example.com/?a=1&b=2"));

        let uri = encode_uri(&request, true);
        assert!(uri.starts_with("notchdrop://notify?b64="));
        assert!(!uri.ends_with('='));

        let decoded = decode_uri(&uri).unwrap();
        assert_eq!(decoded.request, request);
        assert!(decoded.queue);
    }

    #[test]
    fn accepts_padded_standard_alphabet() {
        // `?>` forces `+`/`/` in standard base64 output.
        let json = r#"{"title":"??>>","message":"","kind":"info"}"#;
        let padded = STANDARD.encode(json);
        let uri = format!(
            "notchdrop://notify?b64={}",
            padded.replace('+', "%2B").replace('/', "%2F").replace('=', "%3D")
        );
        assert_eq!(decode_uri(&uri).unwrap().request.title(), "??>>");
    }

    #[test]
    fn accepts_percent_encoded_plain_json() {
        let uri = "notchdrop://notify?b64=%7B%22title%22%3A%22T%22%2C%22message%22%3A%22hi%22%2C%22kind%22%3A%22error%22%7D";
        let decoded = decode_uri(uri).unwrap();
        assert_eq!(decoded.request.kind(), Kind::Error);
        assert_eq!(decoded.request.message(), "hi");
    }

    #[test]
    fn rejects_wrong_scheme_or_host() {
        assert!(matches!(
            decode_uri("https://notify?b64=e30"),
            Err(IngressError::UnexpectedTarget(_))
        ));
        assert!(matches!(
            decode_uri("notchdrop://other?b64=e30"),
            Err(IngressError::UnexpectedTarget(_))
        ));
    }

    #[test]
    fn rejects_garbage_and_missing_parameter() {
        assert!(matches!(decode_uri("not a uri"), Err(IngressError::MalformedUri(_))));
        assert_eq!(
            decode_uri("notchdrop://notify?x=1"),
            Err(IngressError::MissingPayload)
        );
        assert!(matches!(
            decode_uri("notchdrop://notify?b64=%%%"),
            Err(IngressError::InvalidPayload(_))
        ));
    }

    #[test]
    fn rejects_unknown_kind() {
        let kind = decode_uri(&uri_for(r#"{"title":"t","message":"m","kind":"fatal"}"#));
        assert!(matches!(kind, Err(IngressError::InvalidPayload(msg)) if msg.contains("fatal")));
    }

    #[test]
    fn unknown_action_type_keeps_notification_without_action() {
        let decoded = decode_uri(&uri_for(
            r#"{"title":"t","message":"m","kind":"info",
                "action":{"type":"launch","bundleId":"com.example","url":"https://example.com"}}"#,
        ))
        .unwrap();
        assert_eq!(decoded.request.message(), "m");
        let action = decoded.request.action().unwrap();
        assert_eq!(action.kind(), ActionKind::None);
        assert_eq!(action.target(), None);
        assert!(!action.is_actionable());
    }

    #[test]
    fn enormous_duration_is_clamped_not_rejected() {
        let decoded = decode_uri(&uri_for(
            r#"{"title":"t","message":"m","kind":"info","duration":1e30}"#,
        ))
        .unwrap();
        let duration = decoded.request.duration().unwrap();
        assert_eq!(duration.secs(), MAX_DURATION_SECS);
        assert_eq!(duration.as_duration(), std::time::Duration::from_secs(86_400));
    }

    #[test]
    fn rejects_missing_required_fields() {
        let result = decode_uri(&uri_for(r#"{"message":"m","kind":"info"}"#));
        assert!(matches!(result, Err(IngressError::InvalidPayload(_))));
    }

    #[test]
    fn rejects_non_positive_duration() {
        for duration in ["0", "-1", "-0.5"] {
            let json = format!(r#"{{"title":"t","message":"m","kind":"info","duration":{duration}}}"#);
            assert_eq!(decode_uri(&uri_for(&json)), Err(IngressError::InvalidDuration));
        }
    }

    #[test]
    fn generic_target_field_is_accepted() {
        let decoded = decode_uri(&uri_for(
            r#"{"title":"t","message":"m","kind":"info","action":{"type":"open-url","target":"https://x.dev"}}"#,
        ))
        .unwrap();
        assert_eq!(decoded.request.action(), Some(&Action::open_url("https://x.dev")));
    }

    #[test]
    fn none_action_drops_its_target() {
        let decoded = decode_uri(&uri_for(
            r#"{"title":"t","message":"","kind":"info","action":{"type":"none","url":"https://x.dev"}}"#,
        ))
        .unwrap();
        let action = decoded.request.action().unwrap();
        assert_eq!(action.kind(), ActionKind::None);
        assert_eq!(action.target(), None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let decoded = decode_uri(&uri_for(
            r#"{"title":"t","message":"m","kind":"info","priority":9}"#,
        ));
        assert!(decoded.is_ok());
    }
}
