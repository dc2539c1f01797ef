//! Session state types.
//!
//! The session is the client-held proof of authentication: a bearer token
//! plus the signed-in user's identity. It is in exactly one of three
//! states, and `Initializing` exists so protected pages can render nothing
//! (rather than flash a redirect) while persisted credentials load.

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user, as the console knows it.
///
/// The backend does not return a full profile from every auth endpoint, so
/// this is deliberately thin: an identifier to address the account by and
/// a name to greet it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable identifier, usually the email address.
    pub identifier: String,
    /// Name shown in the header bar.
    pub display_name: String,
}

/// An authenticated session: token plus user identity.
///
/// Invariant: a `Session` always holds both. `is_authenticated` is true
/// exactly when a `Session` exists, so "token present AND user present"
/// cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token attached to every request.
    pub token: String,
    /// The signed-in user.
    pub user: UserProfile,
}

/// The session state machine.
///
/// Transitions:
/// - `Initializing → Authenticated` when persisted credentials hydrate
/// - `Initializing → Unauthenticated` when nothing (or corrupt data) is stored
/// - `Unauthenticated → Authenticated` on successful sign-in or sign-up
/// - `Authenticated → Unauthenticated` on sign-out or any 401 response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted credentials have not been examined yet. Protected routes
    /// render nothing in this state.
    #[default]
    Initializing,

    /// No valid session. Protected routes redirect to sign-in.
    Unauthenticated,

    /// A session exists; protected routes render unconditionally.
    Authenticated(Session),
}

impl SessionState {
    /// `true` once hydration has settled, in either direction.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        !matches!(self, Self::Initializing)
    }

    /// `true` when a token and user are both present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The current session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// The current bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            user: UserProfile {
                identifier: "a@b.com".to_string(),
                display_name: "A".to_string(),
            },
        }
    }

    #[test]
    fn default_state_is_initializing() {
        let state = SessionState::default();
        assert!(!state.is_initialized());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn authenticated_exposes_session_and_token() {
        let state = SessionState::Authenticated(session());
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("tok"));
        assert_eq!(state.session().map(|s| s.user.identifier.as_str()), Some("a@b.com"));
    }

    #[test]
    fn unauthenticated_is_settled_but_not_authenticated() {
        let state = SessionState::Unauthenticated;
        assert!(state.is_initialized());
        assert!(!state.is_authenticated());
        assert!(state.token().is_none());
    }
}
