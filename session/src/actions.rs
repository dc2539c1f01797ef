//! Session actions.
//!
//! User intents (`Bootstrap`, `SignIn`, `SignOut`, ...) and the feedback
//! actions their effects produce. Sign-in and sign-up are terminal pairs:
//! every attempt ends in exactly one `*Succeeded` or `*Failed` action,
//! which is what request/response callers wait for.

use crate::credentials::StoredCredentials;
use crate::state::Session;

/// All inputs to the session reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    // ═══════════════════════════════════════════════════════════════════
    // Hydration
    // ═══════════════════════════════════════════════════════════════════
    /// Load persisted credentials. Sent once at process start.
    Bootstrap,

    /// Hydration finished, successfully or not. `None` covers both absent
    /// and corrupt stored data.
    BootstrapCompleted {
        /// The stored pair, when present and parseable.
        credentials: Option<StoredCredentials>,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Sign-in / sign-up
    // ═══════════════════════════════════════════════════════════════════
    /// Exchange email and password for a session.
    SignIn {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },

    /// Create an account, then establish a session.
    SignUp {
        /// Display name.
        name: String,
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },

    /// Exchange a Google credential for a session.
    GoogleSignIn {
        /// The third-party credential.
        credential: String,
    },

    /// An authentication exchange completed and the credentials were
    /// persisted.
    SignInSucceeded {
        /// The established session.
        session: Session,
    },

    /// An authentication exchange failed. The session is untouched and
    /// nothing was persisted.
    SignInFailed {
        /// The server's message, verbatim where it supplied one.
        message: String,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Teardown
    // ═══════════════════════════════════════════════════════════════════
    /// Explicit sign-out.
    SignOut,

    /// The HTTP layer observed a 401; the stored token is already gone.
    Unauthorized,
}

impl SessionAction {
    /// `true` for the terminal actions of an authentication exchange.
    #[must_use]
    pub const fn is_auth_terminal(&self) -> bool {
        matches!(self, Self::SignInSucceeded { .. } | Self::SignInFailed { .. })
    }
}
