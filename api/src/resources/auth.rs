//! Authentication endpoints.
//!
//! Sign-in exchanges credentials for a bearer token. Registration is a
//! two-step exchange when the backend acknowledges without a token: the
//! account is created, then a follow-up login obtains the token. Either
//! the whole exchange succeeds or the caller gets an error - there is no
//! half-authenticated outcome.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Minimal account details some auth responses carry alongside the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Login name.
    #[serde(default)]
    pub user_name: Option<String>,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// The result of a completed authentication exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    /// Bearer token to attach to subsequent requests.
    pub token: String,
    /// Account details, when the backend included them.
    pub user: Option<AccountSummary>,
}

#[derive(Debug, Deserialize)]
struct TokenData {
    token: String,
    #[serde(default)]
    user: Option<AccountSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    username: &'a str,
    full_name: &'a str,
    phone_number: Option<&'a str>,
    role_id: i64,
}

#[derive(Debug, Serialize)]
struct GoogleLoginRequest<'a> {
    token: &'a str,
}

/// Authentication service.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    /// Create the service over a shared client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange email and password for a bearer token.
    ///
    /// # Errors
    ///
    /// Surfaces the server's message verbatim on a 401 (e.g.
    /// "Invalid email or password"); other failures follow the standard
    /// taxonomy.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        let envelope: Envelope<TokenData> = self
            .client
            .post("/api/Auth/login", &LoginRequest { email, password })
            .await?;
        let data = envelope.into_data()?;
        Ok(AuthOutcome {
            token: data.token,
            user: data.user,
        })
    }

    /// Create an account, then obtain a token.
    ///
    /// The backend sometimes returns the token straight from registration
    /// and sometimes only acknowledges; in the latter case a follow-up
    /// login completes the exchange. The token is only surfaced once the
    /// whole exchange has succeeded.
    ///
    /// # Errors
    ///
    /// Returns the registration failure, or the follow-up login failure if
    /// the account was created but the token exchange failed.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthOutcome> {
        let envelope: Envelope<TokenData> = self
            .client
            .post(
                "/api/Auth/register",
                &RegisterRequest {
                    email,
                    password,
                    username: name,
                    full_name: name,
                    phone_number: None,
                    role_id: 0,
                },
            )
            .await?;

        match envelope.into_optional()? {
            Some(data) => Ok(AuthOutcome {
                token: data.token,
                user: data.user,
            }),
            // Registered without a token - log in to get one.
            None => {
                tracing::debug!("Registration acknowledged without token, performing follow-up login");
                self.login(email, password).await
            },
        }
    }

    /// Exchange a third-party Google credential for a bearer token.
    ///
    /// # Errors
    ///
    /// Surfaces the server's message when the credential is rejected.
    pub async fn google_login(&self, credential: &str) -> Result<AuthOutcome> {
        let envelope: Envelope<TokenData> = self
            .client
            .post(
                "/api/Auth/google-login",
                &GoogleLoginRequest { token: credential },
            )
            .await?;
        let data = envelope.into_data()?;
        Ok(AuthOutcome {
            token: data.token,
            user: data.user,
        })
    }
}
