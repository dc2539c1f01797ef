//! Controller flows through a real store: mount, search, mutate,
//! reconcile.

use brewdesk_api::CoffeeItem;
use brewdesk_pages::mocks::{MockCatalog, MockDirectory};
use brewdesk_pages::{
    CoffeeForm, ListAction, ListEnvironment, ListPhase, ListReducer, ListState, PagedAction,
    PagedEnvironment, PagedReducer, PagedState,
};
use brewdesk_api::UserAccount;
use brewdesk_runtime::Store;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

fn coffee(id: i64, name: &str, category_id: i64) -> CoffeeItem {
    CoffeeItem {
        id,
        category_id,
        coffee_name: name.to_string(),
        description: String::new(),
        code: format!("CF{id:03}"),
        image_url: None,
        is_active: true,
    }
}

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

type CatalogStore = Store<
    ListState<CoffeeItem>,
    ListAction<MockCatalog>,
    ListEnvironment<MockCatalog>,
    ListReducer<MockCatalog>,
>;

fn catalog_store(catalog: MockCatalog) -> CatalogStore {
    Store::new(
        ListState::default(),
        ListReducer::new(),
        ListEnvironment::new(catalog),
    )
}

async fn settle() {
    // Let feedback actions finish their own reduce pass.
    tokio::time::sleep(Duration::from_millis(30)).await;
}

#[tokio::test]
async fn mount_loads_the_collection() {
    let catalog = MockCatalog::with_items(vec![coffee(1, "Latte", 2), coffee(2, "Mocha", 3)]);
    let store = catalog_store(catalog);

    let action = store
        .send_and_wait_for(
            ListAction::Load,
            |a| matches!(a, ListAction::LoadSucceeded { .. } | ListAction::LoadFailed { .. }),
            TIMEOUT,
        )
        .await
        .unwrap();
    assert!(matches!(action, ListAction::LoadSucceeded { .. }));
    settle().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.phase, ListPhase::Loaded);
    assert_eq!(state.items.len(), 2);
}

#[tokio::test]
async fn failed_refresh_keeps_the_stale_list_visible() {
    let catalog = MockCatalog::with_items(vec![coffee(1, "Latte", 2)]);
    let store = catalog_store(catalog.clone());

    store
        .send_and_wait_for(
            ListAction::Load,
            |a| matches!(a, ListAction::LoadSucceeded { .. }),
            TIMEOUT,
        )
        .await
        .unwrap();
    settle().await;

    catalog.fail_requests();
    let action = store
        .send_and_wait_for(
            ListAction::Load,
            |a| matches!(a, ListAction::LoadSucceeded { .. } | ListAction::LoadFailed { .. }),
            TIMEOUT,
        )
        .await
        .unwrap();
    assert!(matches!(action, ListAction::LoadFailed { .. }));
    settle().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.phase, ListPhase::Failed);
    // Stale-but-visible: the old items are still there.
    assert_eq!(state.items.len(), 1);
    assert_eq!(
        state.error.as_deref(),
        Some("Server error. Please try again later.")
    );
}

#[tokio::test]
async fn create_through_the_form_refetches_and_shows_the_record() {
    let catalog = MockCatalog::with_items(vec![coffee(1, "Latte", 2)]);
    let store = catalog_store(catalog.clone());

    store
        .send_and_wait_for(
            ListAction::Load,
            |a| matches!(a, ListAction::LoadSucceeded { .. }),
            TIMEOUT,
        )
        .await
        .unwrap();
    settle().await;

    // Typed form state converts to a typed draft; the string category
    // becomes a number before anything is submitted.
    let form = CoffeeForm {
        category_id: "2".to_string(),
        coffee_name: "Flat White".to_string(),
        description: String::new(),
        code: "CF030".to_string(),
        image_url: String::new(),
        is_active: true,
    };
    let draft = form.into_draft().unwrap();

    let action = store
        .send_and_wait_for(
            ListAction::Create { draft },
            |a| matches!(a, ListAction::CreateSucceeded { .. } | ListAction::CreateFailed { .. }),
            TIMEOUT,
        )
        .await
        .unwrap();
    assert!(matches!(action, ListAction::CreateSucceeded { .. }));

    // CreateSucceeded triggers a refetch; wait for it to land.
    tokio::time::sleep(Duration::from_millis(80)).await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.items.len(), 2);
    assert!(state.items.iter().any(|i| i.coffee_name == "Flat White"));
    assert!(!state.mutation.in_flight);
}

#[tokio::test]
async fn confirmed_delete_removes_the_record_failed_delete_keeps_it() {
    let catalog = MockCatalog::with_items(vec![coffee(1, "Latte", 2), coffee(2, "Mocha", 3)]);
    let store = catalog_store(catalog.clone());

    store
        .send_and_wait_for(
            ListAction::Load,
            |a| matches!(a, ListAction::LoadSucceeded { .. }),
            TIMEOUT,
        )
        .await
        .unwrap();
    settle().await;

    // Failed delete: the record stays, the error is mutation-local.
    catalog.fail_requests();
    let action = store
        .send_and_wait_for(
            ListAction::Delete { id: 1 },
            |a| matches!(a, ListAction::DeleteSucceeded { .. } | ListAction::DeleteFailed { .. }),
            TIMEOUT,
        )
        .await
        .unwrap();
    assert!(matches!(action, ListAction::DeleteFailed { .. }));
    settle().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.items.len(), 2);
    assert!(state.mutation.error.is_some());
    assert!(state.error.is_none());

    // Confirmed delete: the record leaves the in-memory collection.
    catalog.recover();
    let action = store
        .send_and_wait_for(
            ListAction::Delete { id: 1 },
            |a| matches!(a, ListAction::DeleteSucceeded { .. } | ListAction::DeleteFailed { .. }),
            TIMEOUT,
        )
        .await
        .unwrap();
    assert!(matches!(action, ListAction::DeleteSucceeded { id: 1 }));
    settle().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 2);

    // And it is gone from a subsequent fetch, not just from memory.
    assert_eq!(catalog.stored().len(), 1);
}

#[tokio::test]
async fn update_patches_the_collection_in_place() {
    let catalog = MockCatalog::with_items(vec![coffee(1, "Latte", 2)]);
    let store = catalog_store(catalog);

    store
        .send_and_wait_for(
            ListAction::Load,
            |a| matches!(a, ListAction::LoadSucceeded { .. }),
            TIMEOUT,
        )
        .await
        .unwrap();
    settle().await;

    let form = CoffeeForm {
        category_id: "2".to_string(),
        coffee_name: "Latte Grande".to_string(),
        description: String::new(),
        code: "CF001".to_string(),
        image_url: String::new(),
        is_active: true,
    };

    let action = store
        .send_and_wait_for(
            ListAction::Update {
                id: 1,
                draft: form.into_draft().unwrap(),
            },
            |a| matches!(a, ListAction::UpdateSucceeded { .. } | ListAction::UpdateFailed { .. }),
            TIMEOUT,
        )
        .await
        .unwrap();
    assert!(matches!(action, ListAction::UpdateSucceeded { .. }));
    settle().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].coffee_name, "Latte Grande");
}

#[tokio::test]
async fn paged_search_submits_keyword_and_pages_through_results() {
    let directory = MockDirectory::with_accounts(vec![
        account(1, "alice"),
        account(2, "alicia"),
        account(3, "bob"),
    ]);
    let store = Store::new(
        PagedState::default(),
        PagedReducer::<MockDirectory>::new(),
        PagedEnvironment::new(directory),
    );

    let action = store
        .send_and_wait_for(
            PagedAction::Submit {
                keyword: "ali".to_string(),
            },
            |a| matches!(a, PagedAction::SearchSucceeded { .. } | PagedAction::SearchFailed { .. }),
            TIMEOUT,
        )
        .await
        .unwrap();
    assert!(matches!(action, PagedAction::SearchSucceeded { .. }));
    tokio::time::sleep(Duration::from_millis(30)).await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.total_items, Some(2));
    assert_eq!(state.page_num, 0);
    assert!(state.items.iter().all(|a| a.user_name.contains("ali")));
}
