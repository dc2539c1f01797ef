//! The list-controller pattern.
//!
//! Every management page is the same machine: load a collection, filter it
//! client-side, mutate through modals, reconcile. This module implements
//! that machine once, generic over the resource's service module and
//! record type; each page is an instantiation, not a reimplementation.
//!
//! Filtering is a pure function of `(items, search_term, filter)`: the
//! full collection is retained untouched, so relaxing a filter never
//! refetches. Mutations are optimistic-free - local state changes only
//! after the server confirms - and mutation failures land in
//! mutation-local state so a failed edit never blanks an already-rendered
//! list.

use brewdesk_api::ApiError;
use brewdesk_api::error::Result;
use brewdesk_core::effect::Effect;
use brewdesk_core::reducer::Reducer;
use brewdesk_core::{SmallVec, smallvec};

/// A record that can be rendered and filtered in a list page.
pub trait ListRecord: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// The page's dropdown filter value (category id, active flag, ...).
    type Filter: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static;

    /// Server-assigned identifier.
    fn record_id(&self) -> i64;

    /// Whether the record matches a (non-empty, lowercased) search term.
    fn matches_search(&self, term: &str) -> bool;

    /// Whether the record matches the dropdown filter.
    fn matches_filter(&self, filter: &Self::Filter) -> bool;
}

/// Seam over a resource service module.
///
/// Implemented by each `brewdesk-api` service. Operations a resource does
/// not expose keep the default body and surface
/// [`ApiError::Unsupported`] - user accounts cannot be deleted through
/// this console, user subscriptions cannot be created.
pub trait ResourceClient: Clone + Send + Sync + 'static {
    /// The record type this service manages.
    type Record: ListRecord;
    /// The submission payload for create/update.
    type Draft: Clone + std::fmt::Debug + Send + Sync + 'static;

    /// Fetch the full collection.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Self::Record>>> + Send;

    /// Create a record, returning it when the backend echoes it back.
    fn create(
        &self,
        draft: Self::Draft,
    ) -> impl std::future::Future<Output = Result<Option<Self::Record>>> + Send {
        let _ = draft;
        async { Err(ApiError::Unsupported { operation: "create" }) }
    }

    /// Update a record, returning it when the backend echoes it back.
    fn update(
        &self,
        id: i64,
        draft: Self::Draft,
    ) -> impl std::future::Future<Output = Result<Option<Self::Record>>> + Send {
        let _ = (id, draft);
        async { Err(ApiError::Unsupported { operation: "update" }) }
    }

    /// Delete a record.
    fn remove(&self, id: i64) -> impl std::future::Future<Output = Result<()>> + Send {
        let _ = id;
        async { Err(ApiError::Unsupported { operation: "remove" }) }
    }
}

/// Where the collection fetch currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListPhase {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed. Previously loaded items stay visible.
    Failed,
}

/// Busy flag and error for the page's current mutation, kept apart from
/// the list's own fetch state: one failed edit must not blank the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationState {
    /// A create/update/delete is in flight.
    pub in_flight: bool,
    /// The last mutation's error, shown in the modal.
    pub error: Option<String>,
}

/// State for one page's list controller.
///
/// Created on page activation, discarded on navigation away. `items` is
/// the full fetched collection; filtering never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R: ListRecord> {
    /// The full fetched collection.
    pub items: Vec<R>,
    /// Fetch state.
    pub phase: ListPhase,
    /// The last fetch error.
    pub error: Option<String>,
    /// Current search box contents.
    pub search_term: String,
    /// Current dropdown filter, `None` meaning "all".
    pub filter: Option<R::Filter>,
    /// The current mutation's state.
    pub mutation: MutationState,
}

impl<R: ListRecord> Default for ListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: ListPhase::default(),
            error: None,
            search_term: String::new(),
            filter: None,
            mutation: MutationState::default(),
        }
    }
}

impl<R: ListRecord> ListState<R> {
    /// The records the table should show right now.
    ///
    /// Pure function of `(items, search_term, filter)`: recomputing with
    /// the same inputs gives the same result, and clearing both criteria
    /// returns the full collection without a refetch.
    #[must_use]
    pub fn visible_items(&self) -> Vec<R> {
        let term = self.search_term.trim().to_lowercase();
        self.items
            .iter()
            .filter(|record| term.is_empty() || record.matches_search(&term))
            .filter(|record| {
                self.filter
                    .as_ref()
                    .is_none_or(|filter| record.matches_filter(filter))
            })
            .cloned()
            .collect()
    }

    /// `true` while the collection fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading)
    }
}

/// All inputs to a list controller.
#[derive(Debug, Clone)]
pub enum ListAction<S: ResourceClient> {
    // ═══════════════════════════════════════════════════════════════════
    // Fetching
    // ═══════════════════════════════════════════════════════════════════
    /// Fetch the collection (mount, refresh).
    Load,
    /// The fetch succeeded.
    LoadSucceeded {
        /// The fetched collection.
        items: Vec<S::Record>,
    },
    /// The fetch failed. Previously loaded items are kept.
    LoadFailed {
        /// Human-readable failure.
        message: String,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Client-side filtering
    // ═══════════════════════════════════════════════════════════════════
    /// The search box changed.
    SearchChanged {
        /// New search term.
        term: String,
    },
    /// The dropdown filter changed; `None` restores "all".
    FilterChanged {
        /// New filter value.
        filter: Option<<S::Record as ListRecord>::Filter>,
    },
    /// Reset search and filter, restoring the full collection.
    ClearFilters,

    // ═══════════════════════════════════════════════════════════════════
    // Mutations (optimistic-free)
    // ═══════════════════════════════════════════════════════════════════
    /// Submit a create.
    Create {
        /// The submission payload.
        draft: S::Draft,
    },
    /// Create confirmed; the collection is refetched.
    CreateSucceeded {
        /// The created record, when the backend echoed it.
        record: Option<S::Record>,
    },
    /// Create failed; mutation-local error only.
    CreateFailed {
        /// Human-readable failure.
        message: String,
    },

    /// Submit an update.
    Update {
        /// Target record.
        id: i64,
        /// The submission payload.
        draft: S::Draft,
    },
    /// Update confirmed; the returned record is patched in place, or the
    /// collection refetched when the backend echoed nothing.
    UpdateSucceeded {
        /// Target record.
        id: i64,
        /// The updated record, when the backend echoed it.
        record: Option<S::Record>,
    },
    /// Update failed; mutation-local error only.
    UpdateFailed {
        /// Human-readable failure.
        message: String,
    },

    /// Submit a delete.
    Delete {
        /// Target record.
        id: i64,
    },
    /// Delete confirmed; the record leaves the in-memory collection now,
    /// never before confirmation.
    DeleteSucceeded {
        /// The deleted record's id.
        id: i64,
    },
    /// Delete failed; the record stays.
    DeleteFailed {
        /// Human-readable failure.
        message: String,
    },
}

/// Environment for a list controller: the resource's service module.
#[derive(Clone)]
pub struct ListEnvironment<S: ResourceClient> {
    /// The service this page's controller talks to.
    pub service: S,
}

impl<S: ResourceClient> ListEnvironment<S> {
    /// Create the environment.
    #[must_use]
    pub const fn new(service: S) -> Self {
        Self { service }
    }
}

/// The list controller reducer, generic over the resource service.
#[derive(Debug, Clone, Default)]
pub struct ListReducer<S> {
    _phantom: std::marker::PhantomData<S>,
}

impl<S> ListReducer<S> {
    /// Create a new list controller reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S> Reducer for ListReducer<S>
where
    S: ResourceClient,
{
    type State = ListState<S::Record>;
    type Action = ListAction<S>;
    type Environment = ListEnvironment<S>;

    #[allow(clippy::too_many_lines)] // one arm per action keeps the machine in one place
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════
            // Fetching
            // ═══════════════════════════════════════════════════════════
            ListAction::Load => {
                // At most one fetch in flight per controller.
                if state.is_loading() {
                    return smallvec![];
                }
                state.phase = ListPhase::Loading;
                state.error = None;

                let service = env.service.clone();
                smallvec![Effect::future(async move {
                    let action = match service.list().await {
                        Ok(items) => ListAction::LoadSucceeded { items },
                        Err(error) => ListAction::LoadFailed {
                            message: error.to_string(),
                        },
                    };
                    Some(action)
                })]
            },

            ListAction::LoadSucceeded { items } => {
                tracing::debug!(count = items.len(), "Collection loaded");
                state.items = items;
                state.phase = ListPhase::Loaded;
                state.error = None;
                smallvec![]
            },

            ListAction::LoadFailed { message } => {
                tracing::warn!(%message, "Collection load failed");
                // Stale-but-visible beats blank-on-error: items survive.
                state.phase = ListPhase::Failed;
                state.error = Some(message);
                smallvec![]
            },

            // ═══════════════════════════════════════════════════════════
            // Client-side filtering
            // ═══════════════════════════════════════════════════════════
            ListAction::SearchChanged { term } => {
                state.search_term = term;
                smallvec![]
            },

            ListAction::FilterChanged { filter } => {
                state.filter = filter;
                smallvec![]
            },

            ListAction::ClearFilters => {
                state.search_term.clear();
                state.filter = None;
                smallvec![]
            },

            // ═══════════════════════════════════════════════════════════
            // Create
            // ═══════════════════════════════════════════════════════════
            ListAction::Create { draft } => {
                state.mutation.in_flight = true;
                state.mutation.error = None;

                let service = env.service.clone();
                smallvec![Effect::future(async move {
                    let action = match service.create(draft).await {
                        Ok(record) => ListAction::CreateSucceeded { record },
                        Err(error) => ListAction::CreateFailed {
                            message: error.to_string(),
                        },
                    };
                    Some(action)
                })]
            },

            ListAction::CreateSucceeded { record: _ } => {
                state.mutation.in_flight = false;
                state.mutation.error = None;
                // Confirmed create: refetch so the table shows the
                // server's ordering and server-assigned fields.
                self.reduce(state, ListAction::Load, env)
            },

            ListAction::CreateFailed { message } => {
                state.mutation.in_flight = false;
                state.mutation.error = Some(message);
                smallvec![]
            },

            // ═══════════════════════════════════════════════════════════
            // Update
            // ═══════════════════════════════════════════════════════════
            ListAction::Update { id, draft } => {
                state.mutation.in_flight = true;
                state.mutation.error = None;

                let service = env.service.clone();
                smallvec![Effect::future(async move {
                    let action = match service.update(id, draft).await {
                        Ok(record) => ListAction::UpdateSucceeded { id, record },
                        Err(error) => ListAction::UpdateFailed {
                            message: error.to_string(),
                        },
                    };
                    Some(action)
                })]
            },

            ListAction::UpdateSucceeded { id, record } => {
                state.mutation.in_flight = false;
                state.mutation.error = None;
                match record {
                    Some(updated) => {
                        if let Some(slot) = state.items.iter_mut().find(|r| r.record_id() == id) {
                            *slot = updated;
                        }
                        smallvec![]
                    },
                    // Backend acknowledged without the entity: refetch.
                    None => self.reduce(state, ListAction::Load, env),
                }
            },

            ListAction::UpdateFailed { message } => {
                state.mutation.in_flight = false;
                state.mutation.error = Some(message);
                smallvec![]
            },

            // ═══════════════════════════════════════════════════════════
            // Delete
            // ═══════════════════════════════════════════════════════════
            ListAction::Delete { id } => {
                state.mutation.in_flight = true;
                state.mutation.error = None;

                let service = env.service.clone();
                smallvec![Effect::future(async move {
                    let action = match service.remove(id).await {
                        Ok(()) => ListAction::DeleteSucceeded { id },
                        Err(error) => ListAction::DeleteFailed {
                            message: error.to_string(),
                        },
                    };
                    Some(action)
                })]
            },

            ListAction::DeleteSucceeded { id } => {
                state.mutation.in_flight = false;
                state.mutation.error = None;
                state.items.retain(|record| record.record_id() != id);
                smallvec![]
            },

            ListAction::DeleteFailed { message } => {
                state.mutation.in_flight = false;
                state.mutation.error = Some(message);
                smallvec![]
            },
        }
    }
}
