//! Route guard.
//!
//! Gates navigation to management pages on session validity. The guard is
//! a pure function of the session state and the requested path; it never
//! performs the redirect itself.

use crate::state::SessionState;

/// The sign-in route unauthenticated navigation is redirected to.
pub const SIGN_IN_PATH: &str = "/signin";

/// What to render for a guarded route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session is still hydrating: render nothing. Not even a loading
    /// indicator - rendering anything here produces a flash of redirect
    /// (or of protected content) before persisted state loads.
    Pending,

    /// No session: redirect to sign-in, remembering where the user was
    /// headed so sign-in can return there.
    RedirectToSignIn {
        /// The originally requested path.
        from: String,
    },

    /// A session exists: render the page unconditionally. Role checks are
    /// server-enforced and surface as 403 errors at call time, not here.
    Allow,
}

impl GuardDecision {
    /// `true` when the wrapped page should render.
    #[must_use]
    pub const fn allows(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide what a guarded route should render for the current session
/// state.
#[must_use]
pub fn evaluate(state: &SessionState, requested_path: &str) -> GuardDecision {
    match state {
        SessionState::Initializing => GuardDecision::Pending,
        SessionState::Unauthenticated => GuardDecision::RedirectToSignIn {
            from: requested_path.to_string(),
        },
        SessionState::Authenticated(_) => GuardDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Session, UserProfile};

    fn authenticated() -> SessionState {
        SessionState::Authenticated(Session {
            token: "tok".to_string(),
            user: UserProfile {
                identifier: "a@b.com".to_string(),
                display_name: "A".to_string(),
            },
        })
    }

    #[test]
    fn initializing_renders_nothing_and_does_not_redirect() {
        let decision = evaluate(&SessionState::Initializing, "/coffee");
        assert_eq!(decision, GuardDecision::Pending);
    }

    #[test]
    fn unauthenticated_redirects_and_captures_the_destination() {
        let decision = evaluate(&SessionState::Unauthenticated, "/subscriptions");
        assert_eq!(
            decision,
            GuardDecision::RedirectToSignIn {
                from: "/subscriptions".to_string()
            }
        );
    }

    #[test]
    fn authenticated_allows_unconditionally() {
        let decision = evaluate(&authenticated(), "/users");
        assert!(decision.allows());
    }
}
