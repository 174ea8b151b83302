//! # Registration configuration
//!
//! The endpoint, the post-signup destination and the storage key are supplied
//! at construction time instead of being baked into the form. The values can
//! come from code (builder methods) or from a TOML document:
//!
//! ```toml
//! endpoint_url = "http://localhost:8080/api/auth/signup"
//! redirect_path = "/login"
//! token_key = "token"
//! ```
//!
//! Every field has a default, so a missing or partial document is equivalent
//! to the default configuration with the given fields overridden.

use serde::{Deserialize, Serialize};

/// Settings consumed by [`crate::RegistrationService`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Absolute URL the signup request is POSTed to.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    /// Path navigated to after a successful signup.
    #[serde(default = "default_redirect_path")]
    pub redirect_path: String,
    /// Storage key the returned token is written under.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_endpoint_url() -> String {
    "http://localhost:8080/api/auth/signup".to_string()
}

fn default_redirect_path() -> String {
    "/login".to_string()
}

fn default_token_key() -> String {
    "token".to_string()
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            redirect_path: default_redirect_path(),
            token_key: default_token_key(),
        }
    }
}

impl RegistrationConfig {
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = url.into();
        self
    }

    pub fn with_redirect_path(mut self, path: impl Into<String>) -> Self {
        self.redirect_path = path.into();
        self
    }

    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.token_key = key.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
