//! Response envelope normalization.
//!
//! The backend does not use one response shape. Some endpoints wrap their
//! payload as `{ "success": bool, "data": ..., "message": ... }`, others
//! return the raw array or object, and paginated endpoints nest a
//! `{ "pageData", "pageInfo" }` page inside the wrapper. This module is the
//! single place that knows about all of it: resource modules decode through
//! [`Envelope`] and downstream code never branches on shape.

use crate::error::ApiError;
use serde::Deserialize;

/// A response body that may or may not be wrapped in the
/// `{ success, data, message }` envelope.
///
/// Deserialization tries the wrapped shape first; anything without a
/// `success` field falls through to the bare payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// The `{ success, data, message }` wrapper.
    Wrapped {
        /// Whether the server considered the operation successful.
        success: bool,
        /// The payload; absent on some mutation acknowledgements.
        data: Option<T>,
        /// Optional human-readable message.
        message: Option<String>,
    },
    /// The payload with no wrapper at all.
    Bare(T),
}

impl<T> Envelope<T> {
    /// Unwrap into the payload, treating `success: false` as an error and
    /// a missing payload as a decode failure.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] when the envelope reports `success: false`
    ///   (carrying the server's message when present)
    /// - [`ApiError::Decode`] when a successful envelope has no `data`
    pub fn into_data(self) -> Result<T, ApiError> {
        match self {
            Self::Bare(data) => Ok(data),
            Self::Wrapped {
                success: true,
                data: Some(data),
                ..
            } => Ok(data),
            Self::Wrapped {
                success: true,
                data: None,
                ..
            } => Err(ApiError::Decode(
                "response reported success but carried no data".to_string(),
            )),
            Self::Wrapped {
                success: false,
                message,
                ..
            } => Err(ApiError::Api {
                status: 200,
                message: message.unwrap_or_else(|| "Request failed".to_string()),
            }),
        }
    }

    /// Unwrap into an optional payload, treating `success: false` as an
    /// error but tolerating an absent `data` field.
    ///
    /// Mutation endpoints acknowledge with `{ success: true, message }` and
    /// no entity; callers that refetch afterwards use this form.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] when the envelope reports `success: false`.
    pub fn into_optional(self) -> Result<Option<T>, ApiError> {
        match self {
            Self::Bare(data) => Ok(Some(data)),
            Self::Wrapped {
                success: true,
                data,
                ..
            } => Ok(data),
            Self::Wrapped {
                success: false,
                message,
                ..
            } => Err(ApiError::Api {
                status: 200,
                message: message.unwrap_or_else(|| "Request failed".to_string()),
            }),
        }
    }

    /// The envelope's message, when the wrapped shape carried one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Wrapped { message, .. } => message.as_deref(),
            Self::Bare(_) => None,
        }
    }
}
