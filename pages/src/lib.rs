//! # Brewdesk Pages
//!
//! The list-controller pattern behind every brewdesk management page,
//! implemented once and instantiated per resource.
//!
//! Two controller shapes cover the whole console:
//!
//! - [`ListReducer`]: fetch the full collection, filter client-side
//!   (search term + dropdown), mutate through modals. Used by the coffee
//!   catalog, plans, subscriptions, time windows, cup tracking, and
//!   plan/coffee links.
//! - [`PagedReducer`]: keyword and page number travel to the server, and
//!   the controller trusts the returned page envelope. Used by the coffee
//!   and user search views.
//!
//! ## Example: a coffee catalog page
//!
//! ```rust,ignore
//! use brewdesk_pages::{ListAction, ListEnvironment, ListReducer, ListState};
//! use brewdesk_api::resources::CoffeeItems;
//! use brewdesk_runtime::Store;
//!
//! let service = CoffeeItems::new(client);
//! let store = Store::new(
//!     ListState::default(),
//!     ListReducer::<CoffeeItems>::new(),
//!     ListEnvironment::new(service),
//! );
//!
//! // Page mount
//! store.send(ListAction::Load).await?;
//! // Search box
//! store.send(ListAction::SearchChanged { term: "latte".into() }).await?;
//! let visible = store.state(|s| s.visible_items()).await;
//! ```

pub mod bindings;
pub mod controller;
pub mod forms;
pub mod mocks;
pub mod paged;

// Re-export main types for convenience
pub use controller::{
    ListAction, ListEnvironment, ListPhase, ListRecord, ListReducer, ListState, MutationState,
    ResourceClient,
};
pub use forms::{
    CoffeeForm, CupTrackingForm, FormError, PlanCoffeeOptionForm, PlanForm, SubscriptionForm,
    TimeWindowForm, UserForm,
};
pub use paged::{PagedAction, PagedEnvironment, PagedReducer, PagedState, SearchClient};
