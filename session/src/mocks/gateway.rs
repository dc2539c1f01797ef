//! Scripted authentication gateway.

use crate::environment::AuthGateway;
use brewdesk_api::ApiError;
use brewdesk_api::error::Result;
use brewdesk_api::resources::AuthOutcome;

/// Gateway whose outcome is fixed at construction.
#[derive(Debug, Clone)]
pub struct MockAuthGateway {
    outcome: std::result::Result<String, String>,
}

impl MockAuthGateway {
    /// Every exchange succeeds with the given token.
    #[must_use]
    pub fn accepting(token: &str) -> Self {
        Self {
            outcome: Ok(token.to_string()),
        }
    }

    /// Every exchange fails with the given message, as a 401 would
    /// surface it.
    #[must_use]
    pub fn rejecting(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }

    fn resolve(&self) -> Result<AuthOutcome> {
        match &self.outcome {
            Ok(token) => Ok(AuthOutcome {
                token: token.clone(),
                user: None,
            }),
            Err(message) => Err(ApiError::Unauthorized {
                message: message.clone(),
            }),
        }
    }
}

impl AuthGateway for MockAuthGateway {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<AuthOutcome> {
        self.resolve()
    }

    async fn sign_up(&self, _name: &str, _email: &str, _password: &str) -> Result<AuthOutcome> {
        self.resolve()
    }

    async fn sign_in_with_google(&self, _credential: &str) -> Result<AuthOutcome> {
        self.resolve()
    }
}
