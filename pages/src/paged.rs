//! Server-paginated list controller.
//!
//! For resources searched server-side (the coffee catalog's keyword
//! search, the user directory): the keyword and page number travel as
//! request parameters, and the controller trusts the server's returned
//! page and total-page-count instead of filtering locally.

use brewdesk_api::error::Result;
use brewdesk_api::{Page, PageQuery, SearchCondition};
use brewdesk_core::effect::Effect;
use brewdesk_core::reducer::Reducer;
use brewdesk_core::{SmallVec, smallvec};

use crate::controller::ListPhase;

/// Seam over a server-side search endpoint.
pub trait SearchClient: Clone + Send + Sync + 'static {
    /// The record type returned by the search.
    type Record: Clone + std::fmt::Debug + Send + Sync + 'static;

    /// Run the search for one page of results.
    fn search(
        &self,
        condition: SearchCondition,
        page: PageQuery,
    ) -> impl std::future::Future<Output = Result<Page<Self::Record>>> + Send;
}

/// State for a server-paginated page.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedState<R> {
    /// The current page of records, replaced wholesale on every response.
    pub items: Vec<R>,
    /// Fetch state.
    pub phase: ListPhase,
    /// The last fetch error.
    pub error: Option<String>,
    /// The submitted keyword (not the live search box contents).
    pub keyword: String,
    /// Include soft-deleted records.
    pub include_deleted: bool,
    /// Zero-based current page.
    pub page_num: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total page count, as the server last reported it.
    pub total_pages: u32,
    /// Total matching items, when the server reports it.
    pub total_items: Option<u64>,
}

impl<R> Default for PagedState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: ListPhase::Idle,
            error: None,
            keyword: String::new(),
            include_deleted: false,
            page_num: 0,
            page_size: 10,
            total_pages: 0,
            total_items: None,
        }
    }
}

impl<R> PagedState<R> {
    /// `true` while a search is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading)
    }

    /// `true` when a next page exists according to the server.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page_num + 1 < self.total_pages
    }
}

/// All inputs to a paginated controller.
#[derive(Debug, Clone)]
pub enum PagedAction<S: SearchClient> {
    /// Submit a new keyword; resets to the first page.
    Submit {
        /// The keyword to search for.
        keyword: String,
    },
    /// Navigate to a page of the current search.
    GoToPage {
        /// Zero-based target page.
        page_num: u32,
    },
    /// Re-run the current search on the current page.
    Refresh,
    /// The search succeeded; the page replaces the current items.
    SearchSucceeded {
        /// The server's page of results.
        page: Page<S::Record>,
    },
    /// The search failed. The current items stay visible.
    SearchFailed {
        /// Human-readable failure.
        message: String,
    },
}

/// Environment for a paginated controller.
#[derive(Clone)]
pub struct PagedEnvironment<S: SearchClient> {
    /// The search endpoint this page talks to.
    pub service: S,
}

impl<S: SearchClient> PagedEnvironment<S> {
    /// Create the environment.
    #[must_use]
    pub const fn new(service: S) -> Self {
        Self { service }
    }
}

/// The paginated controller reducer.
#[derive(Debug, Clone, Default)]
pub struct PagedReducer<S> {
    _phantom: std::marker::PhantomData<S>,
}

impl<S> PagedReducer<S> {
    /// Create a new paginated controller reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S> PagedReducer<S>
where
    S: SearchClient,
{
    fn fetch(
        state: &PagedState<S::Record>,
        env: &PagedEnvironment<S>,
    ) -> SmallVec<[Effect<PagedAction<S>>; 4]> {
        let service = env.service.clone();
        let condition = SearchCondition {
            keyword: state.keyword.clone(),
            is_delete: state.include_deleted,
        };
        let page = PageQuery {
            page_num: state.page_num,
            page_size: state.page_size,
        };

        smallvec![Effect::future(async move {
            let action = match service.search(condition, page).await {
                Ok(page) => PagedAction::SearchSucceeded { page },
                Err(error) => PagedAction::SearchFailed {
                    message: error.to_string(),
                },
            };
            Some(action)
        })]
    }
}

impl<S> Reducer for PagedReducer<S>
where
    S: SearchClient,
{
    type State = PagedState<S::Record>;
    type Action = PagedAction<S>;
    type Environment = PagedEnvironment<S>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            PagedAction::Submit { keyword } => {
                if state.is_loading() {
                    return smallvec![];
                }
                state.keyword = keyword;
                state.page_num = 0;
                state.phase = ListPhase::Loading;
                state.error = None;
                Self::fetch(state, env)
            },

            PagedAction::GoToPage { page_num } => {
                if state.is_loading() {
                    return smallvec![];
                }
                state.page_num = page_num;
                state.phase = ListPhase::Loading;
                state.error = None;
                Self::fetch(state, env)
            },

            PagedAction::Refresh => {
                if state.is_loading() {
                    return smallvec![];
                }
                state.phase = ListPhase::Loading;
                state.error = None;
                Self::fetch(state, env)
            },

            PagedAction::SearchSucceeded { page } => {
                // The server's page envelope is authoritative.
                state.items = page.page_data;
                state.page_num = page.page_info.page_num;
                state.page_size = page.page_info.page_size;
                state.total_pages = page.page_info.total_pages;
                state.total_items = page.page_info.total_items;
                state.phase = ListPhase::Loaded;
                state.error = None;
                smallvec![]
            },

            PagedAction::SearchFailed { message } => {
                tracing::warn!(%message, "Search failed");
                state.phase = ListPhase::Failed;
                state.error = Some(message);
                smallvec![]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockDirectory;
    use brewdesk_api::{PageInfo, UserAccount};
    use brewdesk_testing::{ReducerTest, assertions};

    fn account(id: i64, user_name: &str) -> UserAccount {
        UserAccount {
            id,
            user_name: user_name.to_string(),
            full_name: user_name.to_uppercase(),
            email: format!("{user_name}@example.com"),
            phone_number: None,
            role_id: 1,
            is_active: true,
        }
    }

    fn env() -> PagedEnvironment<MockDirectory> {
        PagedEnvironment::new(MockDirectory::default())
    }

    #[test]
    fn submit_resets_to_the_first_page_and_fetches() {
        let state = PagedState {
            page_num: 3,
            ..PagedState::default()
        };

        ReducerTest::new(PagedReducer::<MockDirectory>::new())
            .with_env(env())
            .given_state(state)
            .when_action(PagedAction::Submit {
                keyword: "alice".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.page_num, 0);
                assert_eq!(state.keyword, "alice");
                assert!(state.is_loading());
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn success_replaces_items_and_trusts_the_server_page_count() {
        ReducerTest::new(PagedReducer::<MockDirectory>::new())
            .with_env(env())
            .given_state(PagedState {
                phase: ListPhase::Loading,
                items: vec![account(1, "old")],
                ..PagedState::default()
            })
            .when_action(PagedAction::SearchSucceeded {
                page: Page {
                    page_data: vec![account(2, "alice"), account(3, "alicia")],
                    page_info: PageInfo {
                        page_num: 0,
                        page_size: 10,
                        total_items: Some(12),
                        total_pages: 2,
                    },
                },
            })
            .then_state(|state| {
                assert_eq!(state.items.len(), 2);
                assert_eq!(state.total_pages, 2);
                assert_eq!(state.total_items, Some(12));
                assert!(state.has_next_page());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn failure_keeps_the_current_page_visible() {
        ReducerTest::new(PagedReducer::<MockDirectory>::new())
            .with_env(env())
            .given_state(PagedState {
                phase: ListPhase::Loading,
                items: vec![account(1, "alice")],
                ..PagedState::default()
            })
            .when_action(PagedAction::SearchFailed {
                message: "Network error. Please check your connection.".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.phase, ListPhase::Failed);
                assert_eq!(state.items.len(), 1);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn page_navigation_is_ignored_while_loading() {
        ReducerTest::new(PagedReducer::<MockDirectory>::new())
            .with_env(env())
            .given_state(PagedState {
                phase: ListPhase::Loading,
                ..PagedState::default()
            })
            .when_action(PagedAction::GoToPage { page_num: 2 })
            .then_state(|state| assert_eq!(state.page_num, 0))
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
