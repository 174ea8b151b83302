//! HTTP side of the signup call.

use crate::error::RegistrationError;
use crate::models::{SignupRequest, SignupResponse};

/// Async trait for performing the signup request.
pub trait SignupClient {
    fn signup(
        &self,
        endpoint_url: &str,
        request: &SignupRequest,
    ) -> impl std::future::Future<Output = Result<SignupResponse, RegistrationError>>;
}

/// [`SignupClient`] backed by `reqwest` (fetch on wasm, hyper on native).
#[derive(Clone, Debug, Default)]
pub struct HttpSignupClient {
    http: reqwest::Client,
}

impl HttpSignupClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SignupClient for HttpSignupClient {
    async fn signup(
        &self,
        endpoint_url: &str,
        request: &SignupRequest,
    ) -> Result<SignupResponse, RegistrationError> {
        tracing::debug!(endpoint = endpoint_url, username = %request.username, "POST signup");

        let response = self.http.post(endpoint_url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistrationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
