//! Session reducer.
//!
//! Implements the session state machine. All I/O - credential hydration,
//! the authentication exchanges, persistence - happens in effects; the
//! reducer itself only transitions state and keeps the live token cell in
//! step with those transitions, so a request issued right after a
//! transition already sees the new token.
//!
//! Failure semantics: an authentication exchange either fully succeeds
//! (token obtained, pair persisted, state `Authenticated`) or leaves the
//! store `Unauthenticated` with nothing persisted. The persistence write
//! happens inside the effect, before `SignInSucceeded` is dispatched, so a
//! crash between the two leaves a stored session that the next bootstrap
//! simply hydrates.

use crate::actions::SessionAction;
use crate::credentials::StoredCredentials;
use crate::environment::{AuthGateway, SessionEnvironment};
use crate::state::{Session, SessionState, UserProfile};
use brewdesk_api::resources::AuthOutcome;
use brewdesk_api::TokenSource;
use brewdesk_core::effect::Effect;
use brewdesk_core::reducer::Reducer;
use brewdesk_core::{SmallVec, smallvec};

/// Session reducer.
#[derive(Debug, Clone, Default)]
pub struct SessionReducer<G> {
    _phantom: std::marker::PhantomData<G>,
}

impl<G> SessionReducer<G> {
    /// Create a new session reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }

    /// Build the session for a completed exchange, deriving the profile
    /// from whatever account details the backend included.
    fn session_from_outcome(
        outcome: AuthOutcome,
        fallback_identifier: &str,
        fallback_name: &str,
    ) -> Session {
        let (identifier, display_name) = outcome.user.map_or_else(
            || (fallback_identifier.to_string(), fallback_name.to_string()),
            |account| {
                let identifier = account
                    .email
                    .unwrap_or_else(|| fallback_identifier.to_string());
                let display_name = account
                    .full_name
                    .or(account.user_name)
                    .unwrap_or_else(|| fallback_name.to_string());
                (identifier, display_name)
            },
        );

        Session {
            token: outcome.token,
            user: UserProfile {
                identifier,
                display_name,
            },
        }
    }
}

impl<G> Reducer for SessionReducer<G>
where
    G: AuthGateway + Clone + Send + Sync + 'static,
{
    type State = SessionState;
    type Action = SessionAction;
    type Environment = SessionEnvironment<G>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════
            // Bootstrap: hydrate persisted credentials
            // ═══════════════════════════════════════════════════════════
            SessionAction::Bootstrap => {
                let credentials = env.credentials.clone();

                smallvec![Effect::future(async move {
                    let credentials = credentials.load();
                    Some(SessionAction::BootstrapCompleted { credentials })
                })]
            },

            SessionAction::BootstrapCompleted { credentials } => {
                match credentials {
                    Some(stored) => {
                        tracing::info!(user = %stored.user.identifier, "Session restored");
                        env.tokens.install(&stored.token);
                        *state = SessionState::Authenticated(Session {
                            token: stored.token,
                            user: stored.user,
                        });
                    },
                    None => {
                        *state = SessionState::Unauthenticated;
                    },
                }
                smallvec![]
            },

            // ═══════════════════════════════════════════════════════════
            // Authentication exchanges
            // ═══════════════════════════════════════════════════════════
            SessionAction::SignIn { email, password } => {
                let auth = env.auth.clone();
                let credentials = env.credentials.clone();

                smallvec![Effect::future(async move {
                    let action = match auth.sign_in(&email, &password).await {
                        Ok(outcome) => {
                            let session =
                                Self::session_from_outcome(outcome, &email, &email);
                            persist(&*credentials, &session)
                        },
                        Err(error) => SessionAction::SignInFailed {
                            message: error.to_string(),
                        },
                    };
                    Some(action)
                })]
            },

            SessionAction::SignUp {
                name,
                email,
                password,
            } => {
                let auth = env.auth.clone();
                let credentials = env.credentials.clone();

                smallvec![Effect::future(async move {
                    let action = match auth.sign_up(&name, &email, &password).await {
                        Ok(outcome) => {
                            let session = Self::session_from_outcome(outcome, &email, &name);
                            persist(&*credentials, &session)
                        },
                        Err(error) => SessionAction::SignInFailed {
                            message: error.to_string(),
                        },
                    };
                    Some(action)
                })]
            },

            SessionAction::GoogleSignIn { credential } => {
                let auth = env.auth.clone();
                let credentials = env.credentials.clone();

                smallvec![Effect::future(async move {
                    let action = match auth.sign_in_with_google(&credential).await {
                        Ok(outcome) => {
                            let session = Self::session_from_outcome(
                                outcome,
                                "google-account",
                                "Google Account",
                            );
                            persist(&*credentials, &session)
                        },
                        Err(error) => SessionAction::SignInFailed {
                            message: error.to_string(),
                        },
                    };
                    Some(action)
                })]
            },

            SessionAction::SignInSucceeded { session } => {
                tracing::info!(user = %session.user.identifier, "Signed in");
                env.tokens.install(&session.token);
                *state = SessionState::Authenticated(session);
                smallvec![]
            },

            SessionAction::SignInFailed { message } => {
                tracing::warn!(%message, "Authentication failed");
                *state = SessionState::Unauthenticated;
                smallvec![]
            },

            // ═══════════════════════════════════════════════════════════
            // Teardown
            // ═══════════════════════════════════════════════════════════
            SessionAction::SignOut => {
                tracing::info!("Signed out");
                env.tokens.clear();
                *state = SessionState::Unauthenticated;
                smallvec![]
            },

            SessionAction::Unauthorized => {
                // The HTTP layer already cleared the stored token; clearing
                // again here keeps the transition idempotent no matter how
                // the action reached us.
                if state.is_authenticated() {
                    tracing::warn!("Session torn down after unauthorized response");
                }
                env.tokens.clear();
                *state = SessionState::Unauthenticated;
                smallvec![]
            },
        }
    }
}

/// Persist the pair and produce the terminal action for the exchange.
///
/// The token is written only after the full exchange has succeeded; a
/// persistence failure downgrades the outcome to `SignInFailed`.
fn persist(
    credentials: &dyn crate::credentials::CredentialStore,
    session: &Session,
) -> SessionAction {
    let stored = StoredCredentials {
        token: session.token.clone(),
        user: session.user.clone(),
    };
    match credentials.save(&stored) {
        Ok(()) => SessionAction::SignInSucceeded {
            session: session.clone(),
        },
        Err(error) => {
            tracing::error!(error = %error, "Failed to persist credentials");
            SessionAction::SignInFailed {
                message: error.to_string(),
            }
        },
    }
}
