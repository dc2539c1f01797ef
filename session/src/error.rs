//! Error types for session operations.

use thiserror::Error;

/// Errors raised by the session layer itself.
///
/// Authentication failures are not errors at this level - they are
/// `SignInFailed`/`SignUpFailed` actions carrying the server's message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The credential pair could not be written durably.
    #[error("Failed to store credentials: {message}")]
    Storage {
        /// Underlying storage error text.
        message: String,
    },
}
