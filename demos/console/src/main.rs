//! Console demo binary.
//!
//! Wires the whole client core together against a live backend: credential
//! store → API client → session store → route guard → page store, then
//! walks the coffee catalog page through load and search.

mod config;

use anyhow::Context;
use brewdesk_api::ApiClient;
use brewdesk_api::resources::{AuthApi, CoffeeItems};
use brewdesk_pages::{ListAction, ListEnvironment, ListReducer, ListState};
use brewdesk_runtime::Store;
use brewdesk_session::{
    FileCredentialStore, GuardDecision, SessionAction, SessionEnvironment, SessionReducer,
    SessionState, SessionTokens, forward_unauthorized, guard,
};
use config::ConsoleConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brewdesk_console=info,brewdesk_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConsoleConfig::from_env();
    println!("=== Brewdesk Console ===");
    println!("API: {}\n", config.api_url);

    // Construction order matters: the token cell is shared between the
    // session store (writer) and the API client (reader).
    let credentials = Arc::new(FileCredentialStore::new(&config.state_dir));
    let tokens = SessionTokens::new(credentials.clone());
    let client = ApiClient::new(config.api_url.clone(), tokens.clone());
    let auth = AuthApi::new(client.clone());

    let session_store = Store::new(
        SessionState::default(),
        SessionReducer::new(),
        SessionEnvironment::new(auth, credentials, tokens),
    );
    forward_unauthorized(&client, session_store.clone());

    // Hydrate persisted credentials before touching any protected page.
    let mut handle = session_store
        .send(SessionAction::Bootstrap)
        .await
        .context("session store rejected bootstrap")?;
    let _ = handle.wait_with_timeout(REQUEST_TIMEOUT).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Route guard for the coffee management page.
    let state = session_store.state(Clone::clone).await;
    match guard::evaluate(&state, "/coffee") {
        GuardDecision::Allow => {
            println!(
                "Restored session for {}",
                state
                    .session()
                    .map_or("<unknown>", |s| s.user.display_name.as_str())
            );
        },
        GuardDecision::RedirectToSignIn { from } => {
            println!("No session; sign-in required (will return to {from})");

            let Some(sign_in) = config.sign_in.clone() else {
                println!("Set BREWDESK_EMAIL and BREWDESK_PASSWORD to sign in.");
                return Ok(());
            };

            let result = session_store
                .send_and_wait_for(
                    SessionAction::SignIn {
                        email: sign_in.email,
                        password: sign_in.password,
                    },
                    |a| a.is_auth_terminal(),
                    REQUEST_TIMEOUT,
                )
                .await
                .context("sign-in did not complete")?;

            match result {
                SessionAction::SignInSucceeded { session } => {
                    println!("Signed in as {}", session.user.display_name);
                },
                SessionAction::SignInFailed { message } => {
                    anyhow::bail!("sign-in failed: {message}");
                },
                _ => unreachable!("predicate only admits terminal actions"),
            }
        },
        GuardDecision::Pending => {
            anyhow::bail!("session still initializing after bootstrap");
        },
    }

    // Page mount: the coffee catalog list controller.
    let catalog_store = Store::new(
        ListState::default(),
        ListReducer::<CoffeeItems>::new(),
        ListEnvironment::new(CoffeeItems::new(client.clone())),
    );

    println!("\n>>> Loading coffee catalog");
    let loaded = catalog_store
        .send_and_wait_for(
            ListAction::Load,
            |a| matches!(a, ListAction::LoadSucceeded { .. } | ListAction::LoadFailed { .. }),
            REQUEST_TIMEOUT,
        )
        .await
        .context("catalog load did not complete")?;
    tokio::time::sleep(Duration::from_millis(50)).await;

    if let ListAction::LoadFailed { message } = loaded {
        anyhow::bail!("catalog load failed: {message}");
    }

    let items = catalog_store.state(|s| s.items.clone()).await;
    println!("{} catalog entries:", items.len());
    for item in &items {
        println!(
            "  [{:>4}] {:<24} {:<8} {}",
            item.id,
            item.coffee_name,
            item.code,
            if item.is_active { "active" } else { "inactive" }
        );
    }

    // Client-side filtering: pure recompute, no refetch.
    println!("\n>>> Filtering for \"latte\"");
    let _ = catalog_store
        .send(ListAction::SearchChanged {
            term: "latte".to_string(),
        })
        .await;
    let visible = catalog_store.state(ListState::visible_items).await;
    println!("{} matching entries", visible.len());

    let _ = catalog_store.send(ListAction::ClearFilters).await;
    let visible = catalog_store.state(|s| s.visible_items().len()).await;
    println!("cleared filter: {visible} entries visible again");

    // Graceful shutdown: drain in-flight effects.
    let _ = catalog_store.shutdown(Duration::from_secs(5)).await;
    let _ = session_store.shutdown(Duration::from_secs(5)).await;

    Ok(())
}
