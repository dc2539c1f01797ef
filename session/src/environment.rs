//! Session environment.
//!
//! All external dependencies of the session reducer, injected as an
//! explicitly constructed value with a process-wide lifecycle - the
//! module-level singleton the original console relied on does not exist
//! here.

use crate::credentials::{CredentialStore, SessionTokens};
use brewdesk_api::error::Result;
use brewdesk_api::resources::{AuthApi, AuthOutcome};
use std::sync::Arc;

/// Seam over the authentication endpoints.
///
/// The production implementation is [`AuthApi`]; tests script outcomes
/// through a mock.
pub trait AuthGateway: Send + Sync {
    /// Exchange email and password for a token.
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<AuthOutcome>> + Send;

    /// Create an account and obtain a token, with any follow-up calls the
    /// backend requires.
    fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<AuthOutcome>> + Send;

    /// Exchange a Google credential for a token.
    fn sign_in_with_google(
        &self,
        credential: &str,
    ) -> impl std::future::Future<Output = Result<AuthOutcome>> + Send;
}

impl AuthGateway for AuthApi {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        self.login(email, password).await
    }

    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<AuthOutcome> {
        self.register(name, email, password).await
    }

    async fn sign_in_with_google(&self, credential: &str) -> Result<AuthOutcome> {
        self.google_login(credential).await
    }
}

/// Session environment.
///
/// # Type Parameters
///
/// - `G`: Authentication gateway
#[derive(Clone)]
pub struct SessionEnvironment<G>
where
    G: AuthGateway + Clone,
{
    /// Authentication gateway.
    pub auth: G,

    /// Durable credential storage.
    pub credentials: Arc<dyn CredentialStore>,

    /// Live token cell shared with the API client.
    pub tokens: Arc<SessionTokens>,
}

impl<G> SessionEnvironment<G>
where
    G: AuthGateway + Clone,
{
    /// Create a new session environment.
    #[must_use]
    pub fn new(auth: G, credentials: Arc<dyn CredentialStore>, tokens: Arc<SessionTokens>) -> Self {
        Self {
            auth,
            credentials,
            tokens,
        }
    }
}
