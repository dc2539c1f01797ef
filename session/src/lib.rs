//! # Brewdesk Session
//!
//! Session state machine, credential persistence, and route guard for the
//! brewdesk console.
//!
//! Authentication is implemented as a reducer and effects:
//!
//! ```text
//! Action → Reducer → (State, Effects) → Effect Execution → More Actions
//! ```
//!
//! The session is the only cross-feature shared mutable state in the
//! process: the reducer writes the token, every API call reads it, and a
//! 401 from any resource module tears it down.
//!
//! ## Example: sign-in flow
//!
//! ```rust,ignore
//! use brewdesk_session::*;
//!
//! // 1. Hydrate persisted credentials at startup
//! store.send(SessionAction::Bootstrap).await?;
//!
//! // 2. Guard a management route
//! match guard::evaluate(&store.state(|s| s.clone()).await, "/coffee") {
//!     GuardDecision::Allow => { /* render */ },
//!     GuardDecision::RedirectToSignIn { from } => { /* go to /signin */ },
//!     GuardDecision::Pending => { /* render nothing yet */ },
//! }
//!
//! // 3. Sign in and wait for the terminal action
//! let result = store.send_and_wait_for(
//!     SessionAction::SignIn { email, password },
//!     |action| action.is_auth_terminal(),
//!     timeout,
//! ).await?;
//! ```

// Public modules
pub mod actions;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod guard;
pub mod listener;
pub mod mocks;
pub mod reducer;
pub mod state;

// Re-export main types for convenience
pub use actions::SessionAction;
pub use credentials::{CredentialStore, FileCredentialStore, SessionTokens, StoredCredentials};
pub use environment::{AuthGateway, SessionEnvironment};
pub use error::SessionError;
pub use guard::{GuardDecision, SIGN_IN_PATH};
pub use listener::{SessionStore, forward_unauthorized};
pub use reducer::SessionReducer;
pub use state::{Session, SessionState, UserProfile};
