//! # Registration service — one submission, end to end
//!
//! [`RegistrationService`] owns everything a signup submission touches: the
//! [`RegistrationConfig`], a [`SignupClient`] for the network call, a
//! [`KeyValueStore`] for the token and a [`Navigator`] for the redirect. The
//! UI hands it a [`RegistrationInput`] and gets back a `Result`.
//!
//! ## Submission
//!
//! 1. Claim the in-flight flag. If another submission is pending, return
//!    [`RegistrationError::InFlight`] without touching the network.
//! 2. POST `{username, email, password}` to `endpoint_url`.
//! 3. On success, write the returned token under `token_key`, then navigate
//!    to `redirect_path`. The token is stored as returned, empty or not.
//! 4. On failure, emit one `error` event and return the error. Nothing is
//!    stored and no navigation happens.
//!
//! ## Cancellation
//!
//! [`submit_abortable`](RegistrationService::submit_abortable) wraps the
//! submission in [`futures::future::abortable`]. Aborting drops the pending
//! request, releases the in-flight flag and resolves to
//! [`RegistrationError::Cancelled`].

use futures::future::{abortable, AbortHandle};
use store::KeyValueStore;

use crate::client::SignupClient;
use crate::config::RegistrationConfig;
use crate::error::RegistrationError;
use crate::guard::SubmitGuard;
use crate::models::{RegistrationInput, Token};
use crate::navigation::Navigator;

/// Performs registration submissions against a configured endpoint.
#[derive(Clone, Debug)]
pub struct RegistrationService<C, S, N> {
    config: RegistrationConfig,
    client: C,
    store: S,
    navigator: N,
    guard: SubmitGuard,
}

impl<C, S, N> RegistrationService<C, S, N>
where
    C: SignupClient,
    S: KeyValueStore,
    N: Navigator,
{
    pub fn new(config: RegistrationConfig, client: C, store: S, navigator: N) -> Self {
        Self {
            config,
            client,
            store,
            navigator,
            guard: SubmitGuard::new(),
        }
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    /// Whether a submission is currently pending.
    pub fn is_submitting(&self) -> bool {
        self.guard.is_active()
    }

    /// Submit the form once.
    pub async fn submit(&self, input: &RegistrationInput) -> Result<Token, RegistrationError> {
        let Some(_in_flight) = self.guard.try_acquire() else {
            tracing::warn!("Registration already in flight, ignoring submission");
            return Err(RegistrationError::InFlight);
        };

        tracing::info!(
            username = %input.username,
            endpoint = %self.config.endpoint_url,
            "Submitting registration"
        );

        match self.perform(input).await {
            Ok(token) => {
                tracing::info!(redirect = %self.config.redirect_path, "Registration succeeded");
                Ok(token)
            }
            Err(e) => {
                tracing::error!("Failed to register: {}", e);
                Err(e)
            }
        }
    }

    async fn perform(&self, input: &RegistrationInput) -> Result<Token, RegistrationError> {
        let response = self
            .client
            .signup(&self.config.endpoint_url, &input.to_request())
            .await?;

        self.store
            .set_item(&self.config.token_key, response.token.as_str())
            .await?;
        self.navigator.navigate(&self.config.redirect_path)?;

        Ok(response.token)
    }

    /// Read back the token persisted by an earlier successful submission.
    pub async fn stored_token(&self) -> Result<Option<Token>, RegistrationError> {
        Ok(self
            .store
            .get_item(&self.config.token_key)
            .await?
            .map(Token::from))
    }
}

impl<C, S, N> RegistrationService<C, S, N>
where
    C: SignupClient + Clone + 'static,
    S: KeyValueStore + Clone + 'static,
    N: Navigator + Clone + 'static,
{
    /// Like [`submit`](Self::submit), but returns a `'static` future together
    /// with a handle that cancels it.
    pub fn submit_abortable(
        &self,
        input: RegistrationInput,
    ) -> (
        impl std::future::Future<Output = Result<Token, RegistrationError>> + 'static,
        AbortHandle,
    ) {
        let service = self.clone();
        let (submission, handle) = abortable(async move { service.submit(&input).await });

        let submission = async move {
            match submission.await {
                Ok(result) => result,
                Err(_aborted) => {
                    tracing::info!("Registration cancelled");
                    Err(RegistrationError::Cancelled)
                }
            }
        };

        (submission, handle)
    }
}
