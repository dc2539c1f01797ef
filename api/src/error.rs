//! Error taxonomy for the backend API boundary.
//!
//! Every failure a resource module can surface is one of these variants.
//! The display strings are what management pages render, so message
//! derivation follows a strict priority: server field-level validation
//! errors, then the server's top-level message, then a status-specific
//! default, then a generic failure message.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// A single field's validation failures, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field name, as named by the server.
    pub field: String,
    /// Validation messages for that field.
    pub messages: Vec<String>,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.messages.join("; "))
    }
}

/// Error taxonomy for requests against the backend API.
///
/// `Network` means no response reached the client at all; every other
/// variant carries a server-assigned status. A 401 tears the session down
/// at the client layer before this error ever reaches a caller; a 403 does
/// not (the session stays valid, the action was merely forbidden).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response received (offline, DNS failure, connection refused,
    /// transport timeout). Never retried automatically.
    #[error("Network error. Please check your connection.")]
    Network {
        /// Underlying transport error text, for logs.
        detail: String,
    },

    /// 401 from the server. The session has already been cleared as a side
    /// effect of receiving this response.
    #[error("{message}")]
    Unauthorized {
        /// Server message, or the status default.
        message: String,
    },

    /// 403 from the server: the action is forbidden for this role, but the
    /// session itself remains valid.
    #[error("{message}")]
    Forbidden {
        /// Server message, or the status default.
        message: String,
    },

    /// 400 with field-level detail. Rendered as a multi-line,
    /// field-qualified message.
    #[error("{}", format_validation(.message, .fields))]
    Validation {
        /// Top-level server message, if any.
        message: String,
        /// Per-field validation failures.
        fields: Vec<FieldError>,
    },

    /// 404. Surfaced verbatim: in this backend it usually means a
    /// misconfigured endpoint path rather than a missing record.
    #[error("{message}")]
    NotFound {
        /// Server message, or the status default.
        message: String,
    },

    /// 5xx. Never retried automatically.
    #[error("Server error. Please try again later.")]
    Server {
        /// The exact status code, for logs.
        status: u16,
    },

    /// Any other non-2xx status.
    #[error("{message}")]
    Api {
        /// The status code.
        status: u16,
        /// Derived human-readable message.
        message: String,
    },

    /// A 2xx response whose body failed to parse.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// The resource does not expose this operation (e.g. user accounts
    /// cannot be deleted through this console).
    #[error("Operation not supported: {operation}")]
    Unsupported {
        /// The missing operation name.
        operation: &'static str,
    },
}

fn format_validation(message: &str, fields: &[FieldError]) -> String {
    if fields.is_empty() {
        return message.to_string();
    }
    let mut lines = Vec::with_capacity(fields.len() + 1);
    if !message.is_empty() {
        lines.push(message.to_string());
    }
    for field in fields {
        lines.push(field.to_string());
    }
    lines.join("\n")
}

/// Wire shape of a server error body.
///
/// The backend is not consistent: plain failures carry `message`,
/// validation failures carry an `errors` map (and sometimes a `title`
/// instead of a `message`). Absent fields are tolerated everywhere.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    title: Option<String>,
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    /// Classify a non-2xx response into the error taxonomy.
    ///
    /// `body` is the raw response text; it is parsed leniently, so a body
    /// that is not JSON (or is empty) still produces a sensible message
    /// from the status-specific defaults.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let server_message = parsed.message.or(parsed.title).filter(|m| !m.is_empty());

        let fields: Vec<FieldError> = parsed
            .errors
            .unwrap_or_default()
            .into_iter()
            .map(|(field, messages)| FieldError { field, messages })
            .collect();

        match status {
            400 => Self::Validation {
                message: server_message
                    .unwrap_or_else(|| "Invalid data. Please check your input.".to_string()),
                fields,
            },
            401 => Self::Unauthorized {
                message: server_message
                    .unwrap_or_else(|| "Unauthorized. Please login again.".to_string()),
            },
            403 => Self::Forbidden {
                message: server_message
                    .unwrap_or_else(|| "You do not have permission to perform this action.".to_string()),
            },
            404 => Self::NotFound {
                message: server_message.unwrap_or_else(|| "Endpoint not found.".to_string()),
            },
            500..=599 => Self::Server { status },
            _ => Self::Api {
                status,
                message: server_message
                    .unwrap_or_else(|| format!("Request failed with status {status}")),
            },
        }
    }

    /// `true` when the session was torn down as a consequence of this error.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// `true` for failures where no response reached the client.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_priority_prefers_field_errors() {
        let body = r#"{"message":"Validation failed","errors":{"price":["must be positive"],"code":["required"]}}"#;
        let error = ApiError::from_response(400, body);

        let rendered = error.to_string();
        assert!(rendered.contains("Validation failed"));
        assert!(rendered.contains("code: required"));
        assert!(rendered.contains("price: must be positive"));
    }

    #[test]
    fn message_priority_falls_back_to_top_level_message() {
        let error = ApiError::from_response(401, r#"{"message":"Invalid email or password"}"#);
        assert_eq!(error.to_string(), "Invalid email or password");
    }

    #[test]
    fn message_priority_falls_back_to_status_default() {
        let error = ApiError::from_response(401, "");
        assert_eq!(error.to_string(), "Unauthorized. Please login again.");
    }

    #[test]
    fn server_errors_are_generic() {
        let error = ApiError::from_response(503, r#"{"message":"stack trace here"}"#);
        assert_eq!(error.to_string(), "Server error. Please try again later.");
    }

    #[test]
    fn forbidden_does_not_classify_as_unauthorized() {
        let error = ApiError::from_response(403, "{}");
        assert!(!error.is_unauthorized());
        assert!(matches!(error, ApiError::Forbidden { .. }));
    }

    #[test]
    fn not_found_surfaces_server_message_verbatim() {
        let error = ApiError::from_response(404, r#"{"message":"No such plan"}"#);
        assert_eq!(error.to_string(), "No such plan");
    }

    #[test]
    fn non_json_body_still_classifies() {
        let error = ApiError::from_response(400, "<html>Bad Request</html>");
        assert!(matches!(error, ApiError::Validation { .. }));
    }
}
