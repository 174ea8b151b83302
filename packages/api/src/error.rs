//! Error types for the registration flow.

use store::StoreError;
use thiserror::Error;

/// Why a registration submission did not complete.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Another submission from the same service is still pending.
    #[error("a registration request is already in flight")]
    InFlight,

    /// The request never got a response (DNS, connection refused, CORS, ...).
    #[error("signup request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a status outside 2xx.
    #[error("signup endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not JSON or had no string `token`.
    #[error("malformed signup response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to store token: {0}")]
    Storage(#[from] StoreError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The pending submission was aborted by its owner.
    #[error("registration was cancelled")]
    Cancelled,
}

impl RegistrationError {
    /// True for failures of the signup call itself (transport, status, body).
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Self::Request(_) | Self::Status { .. } | Self::Decode(_)
        )
    }
}

/// A navigation request the platform refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to navigate to {path}: {reason}")]
pub struct NavigationError {
    pub path: String,
    pub reason: String,
}

impl NavigationError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failure_category() {
        let status = RegistrationError::Status {
            status: 400,
            body: "username taken".to_string(),
        };
        assert!(status.is_request_failure());
        assert_eq!(
            status.to_string(),
            "signup endpoint returned 400: username taken"
        );

        let decode: RegistrationError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(decode.is_request_failure());

        assert!(!RegistrationError::InFlight.is_request_failure());
        assert!(!RegistrationError::Cancelled.is_request_failure());
        assert!(!RegistrationError::from(StoreError::Unavailable("no window".into()))
            .is_request_failure());
    }

    #[test]
    fn test_navigation_error_message() {
        let err: RegistrationError = NavigationError::new("/login", "blocked").into();
        assert_eq!(err.to_string(), "failed to navigate to /login: blocked");
    }
}
