//! HTTP client wrapper for the backend API.
//!
//! One configured [`ApiClient`] per process. Every outgoing request reads
//! the live session token at call time and attaches it as a bearer header;
//! every 401 response clears the token source synchronously and notifies
//! subscribers before the error propagates. The wrapper never retries,
//! never de-duplicates, and never navigates.

use crate::error::{ApiError, Result};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Source of the current bearer token.
///
/// Implemented by the session layer over its credential store, so the
/// client always observes the token the session last wrote - a token
/// refreshed mid-session is honored on the next call - and `clear` wipes
/// both the live and the persisted copy in one step.
pub trait TokenSource: Send + Sync {
    /// The current bearer token, if a session exists.
    fn token(&self) -> Option<String>;

    /// Discard the token. Called by the client on any 401 response.
    fn clear(&self);
}

/// A token source for unauthenticated use (sign-in screens, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenSource for NoToken {
    fn token(&self) -> Option<String> {
        None
    }

    fn clear(&self) {}
}

/// Configured HTTP client for the backend API.
///
/// Cloning is cheap; all clones share the underlying connection pool, the
/// token source, and the unauthorized-notification channel.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
    unauthorized: broadcast::Sender<()>,
}

impl ApiClient {
    /// Create a new client against the given base URL.
    ///
    /// `base_url` should not end with a slash; request paths start with
    /// `/api/...`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenSource>) -> Self {
        let (unauthorized, _) = broadcast::channel(8);
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            tokens,
            unauthorized,
        }
    }

    /// Create a client from the `BREWDESK_API_URL` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the variable is not set.
    pub fn from_env(tokens: Arc<dyn TokenSource>) -> Result<Self> {
        let base_url = std::env::var("BREWDESK_API_URL")
            .map_err(|_| ApiError::Decode("BREWDESK_API_URL is not set".to_string()))?;
        Ok(Self::new(base_url, tokens))
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Subscribe to 401 notifications.
    ///
    /// The session store listens here so that an unauthorized response from
    /// any resource module tears the session down, no matter which call
    /// triggered it.
    #[must_use]
    pub fn subscribe_unauthorized(&self) -> broadcast::Receiver<()> {
        self.unauthorized.subscribe()
    }

    /// `GET path`, decoding the response body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, non-2xx statuses, and
    /// undecodable bodies.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(Method::GET, path, None::<&()>).await
    }

    /// `POST path` with a JSON body, decoding the response body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, non-2xx statuses, and
    /// undecodable bodies.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send_json(Method::POST, path, Some(body)).await
    }

    /// `PUT path` with a JSON body, decoding the response body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, non-2xx statuses, and
    /// undecodable bodies.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send_json(Method::PUT, path, Some(body)).await
    }

    /// `PUT path` with no body, ignoring the response body.
    ///
    /// Used by query-parameter endpoints such as the user active toggle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and non-2xx statuses.
    pub async fn put_empty(&self, path: &str) -> Result<()> {
        let response = self.execute(Method::PUT, path, None::<&()>).await?;
        self.check_status(response).await.map(|_| ())
    }

    /// `POST path` with a JSON body, ignoring the response body.
    ///
    /// For acknowledgement-only endpoints whose body carries nothing the
    /// caller needs (and is sometimes empty altogether).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and non-2xx statuses.
    pub async fn post_no_content<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        self.check_status(response).await.map(|_| ())
    }

    /// `PUT path` with a JSON body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and non-2xx statuses.
    pub async fn put_no_content<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        self.check_status(response).await.map(|_| ())
    }

    /// `DELETE path`, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and non-2xx statuses.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.execute(Method::DELETE, path, None::<&()>).await?;
        self.check_status(response).await.map(|_| ())
    }

    /// `POST path` with a multipart form, decoding the response body as `T`.
    ///
    /// Only the image upload endpoint uses multipart; everything else is
    /// JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, non-2xx statuses, and
    /// undecodable bodies.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Sending multipart request");
        metrics::counter!("api.requests.total", "method" => "POST").increment(1);

        let mut request = self.http.post(&url).multipart(form);
        if let Some(token) = self.tokens.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| self.network_error(&e))?;
        let response = self.check_status(response).await?;
        Self::decode_body(response).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let response = self.execute(method, path, body).await?;
        let response = self.check_status(response).await?;
        Self::decode_body(response).await
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, %url, "Sending request");
        metrics::counter!("api.requests.total", "method" => method.as_str().to_string())
            .increment(1);

        let mut request = self.http.request(method, &url);

        // The token is read at call time, never captured at construction,
        // so a token refreshed mid-session is honored on the next call.
        if let Some(token) = self.tokens.token() {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await.map_err(|e| self.network_error(&e))
    }

    /// Map a transport failure into the network error category.
    fn network_error(&self, error: &reqwest::Error) -> ApiError {
        metrics::counter!("api.requests.errors", "kind" => "network").increment(1);
        tracing::warn!(error = %error, "Transport failure");
        ApiError::Network {
            detail: error.to_string(),
        }
    }

    /// Turn non-2xx responses into errors, running the 401 interceptor.
    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            // Clear the stored session before the error propagates; callers
            // are responsible for any redirect, the client never navigates.
            tracing::warn!("Unauthorized - clearing stored session");
            self.tokens.clear();
            let _ = self.unauthorized.send(());
        }

        metrics::counter!("api.requests.errors", "status" => status.as_u16().to_string())
            .increment(1);

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
