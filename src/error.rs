// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Ingress Error: {0}")]
    Ingress(#[from] IngressError),

    #[error("Delivery Error: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Reasons an inbound payload is dropped before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngressError {
    /// The URI could not be parsed at all.
    #[error("malformed URI: {0}")]
    MalformedUri(String),

    /// Scheme or host do not address this application.
    #[error("unexpected target `{0}`")]
    UnexpectedTarget(String),

    /// The `b64` query parameter is absent.
    #[error("missing payload parameter")]
    MissingPayload,

    /// Neither base64 nor plain JSON produced a valid payload.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Duration must be a finite number above zero.
    #[error("duration must be a positive number of seconds")]
    InvalidDuration,
}

/// Failures while handing a request to the running agent.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Nothing is listening at the configured address.
    #[error("agent not reachable at {address}: {source}")]
    Unreachable {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Connected, but the request could not be written or answered.
    #[error("transport failed: {0}")]
    Transport(#[source] std::io::Error),

    /// The agent answered with something other than `ok`.
    #[error("agent responded with `{0}`")]
    Rejected(String),
}

impl DeliveryError {
    /// Whether the command still completed from the sender's point of view.
    ///
    /// The agent was reached in both soft cases; only an unreachable agent
    /// is a hard failure.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        !matches!(self, DeliveryError::Unreachable { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_and_displays() {
        let err: Error = std::io::Error::other("disk on fire").into();
        assert!(err.to_string().contains("disk on fire"));
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn unreachable_agent_is_a_hard_failure() {
        let err = DeliveryError::Unreachable {
            address: "127.0.0.1:1".into(),
            source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
        };
        assert!(!err.is_soft());
        assert!(DeliveryError::Rejected("rejected".into()).is_soft());
        assert!(DeliveryError::Transport(std::io::Error::from(std::io::ErrorKind::BrokenPipe)).is_soft());
    }

    #[test]
    fn ingress_errors_wrap_into_crate_error() {
        let err: Error = IngressError::MissingPayload.into();
        assert_eq!(err.to_string(), "Ingress Error: missing payload parameter");
    }
}
