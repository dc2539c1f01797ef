//! Bridges the HTTP layer's 401 notifications into the session store.
//!
//! The API client clears the stored token the instant a 401 arrives; this
//! listener makes the state machine follow, regardless of which resource
//! module triggered the call.

use crate::actions::SessionAction;
use crate::environment::{AuthGateway, SessionEnvironment};
use crate::reducer::SessionReducer;
use crate::state::SessionState;
use brewdesk_api::ApiClient;
use brewdesk_runtime::Store;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// The store type driving the session state machine.
pub type SessionStore<G> =
    Store<SessionState, SessionAction, SessionEnvironment<G>, SessionReducer<G>>;

/// Forward every unauthorized notification from the client into the
/// session store as [`SessionAction::Unauthorized`].
///
/// Returns the forwarding task's handle; the task ends when the client
/// (and with it the notification channel) is dropped.
pub fn forward_unauthorized<G>(client: &ApiClient, store: SessionStore<G>) -> JoinHandle<()>
where
    G: AuthGateway + Clone + Send + Sync + 'static,
{
    let mut rx = client.subscribe_unauthorized();

    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(()) => {
                    if store.send(SessionAction::Unauthorized).await.is_err() {
                        break;
                    }
                },
                // Dropped notifications collapse into one teardown; the
                // transition is idempotent.
                Err(RecvError::Lagged(_)) => {
                    if store.send(SessionAction::Unauthorized).await.is_err() {
                        break;
                    }
                },
                Err(RecvError::Closed) => break,
            }
        }
    })
}
