//! # Registration models
//!
//! Three types cross the boundary between the form and the signup endpoint:
//!
//! ## [`RegistrationInput`]
//!
//! The three values the user typed, held exactly as entered. No trimming and
//! no validation happen here; an empty username or a malformed email is sent
//! as-is and left for the server to judge. [`RegistrationInput::to_request`]
//! projects it into the wire type.
//!
//! ## [`SignupRequest`] / [`SignupResponse`]
//!
//! The JSON bodies of the signup call. The request carries exactly
//! `username`, `email` and `password`; the response must carry at least a
//! string `token`, and any other fields the server adds are ignored.
//!
//! ## [`Token`]
//!
//! An opaque credential string. It is never inspected, only persisted.
//!
//! `Debug` output of every type here redacts the password and the token so
//! they can't leak into diagnostic logs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The current content of the registration form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegistrationInput {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Build the outgoing request body.
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST {endpoint_url}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body returned by a successful signup call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub token: Token,
}

/// Opaque authentication token issued by the signup endpoint.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_has_exactly_three_fields() {
        let input = RegistrationInput::new("alice", "alice@example.com", "secret");

        let body = serde_json::to_string(&input.to_request()).unwrap();

        assert_eq!(
            body,
            r#"{"username":"alice","email":"alice@example.com","password":"secret"}"#
        );
    }

    #[test]
    fn test_empty_input_is_sent_as_is() {
        let input = RegistrationInput::default();

        let request = input.to_request();
        assert_eq!(request.username, "");
        assert_eq!(request.email, "");
        assert_eq!(request.password, "");
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let input = RegistrationInput::new(" alice ", "not-an-email", "  ");

        let request = input.to_request();
        assert_eq!(request.username, " alice ");
        assert_eq!(request.email, "not-an-email");
        assert_eq!(request.password, "  ");
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let response: SignupResponse =
            serde_json::from_str(r#"{"token":"abc123","user":{"id":7}}"#).unwrap();

        assert_eq!(response.token.as_str(), "abc123");
    }

    #[test]
    fn test_response_without_token_is_rejected() {
        let result = serde_json::from_str::<SignupResponse>(r#"{"message":"ok"}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<SignupResponse>(r#"{"token":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let input = RegistrationInput::new("alice", "alice@example.com", "secret");
        let token = Token::new("abc123");

        let printed = format!("{input:?} {:?} {token:?}", input.to_request());

        assert!(printed.contains("alice@example.com"));
        assert!(!printed.contains("secret"));
        assert!(!printed.contains("abc123"));
    }
}
