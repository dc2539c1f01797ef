//! Scripted service mocks for controller tests.
//!
//! In-memory stand-ins for the coffee catalog and the user directory, with
//! switchable failure modes, so controller flows run with no network.

use crate::controller::ResourceClient;
use crate::paged::SearchClient;
use brewdesk_api::error::Result;
use brewdesk_api::{
    ApiError, CoffeeDraft, CoffeeItem, Page, PageInfo, PageQuery, SearchCondition, UserAccount,
};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory coffee catalog.
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    items: Arc<Mutex<Vec<CoffeeItem>>>,
    next_id: Arc<AtomicI64>,
    fail_requests: Arc<AtomicBool>,
}

impl MockCatalog {
    /// Create a catalog seeded with records.
    #[must_use]
    pub fn with_items(items: Vec<CoffeeItem>) -> Self {
        let max_id = items.iter().map(|i| i.id).max().unwrap_or(0);
        Self {
            items: Arc::new(Mutex::new(items)),
            next_id: Arc::new(AtomicI64::new(max_id + 1)),
            fail_requests: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent request fail as a server error.
    pub fn fail_requests(&self) {
        self.fail_requests.store(true, Ordering::SeqCst);
    }

    /// Let requests succeed again.
    pub fn recover(&self) {
        self.fail_requests.store(false, Ordering::SeqCst);
    }

    /// Snapshot of the stored records.
    #[must_use]
    pub fn stored(&self) -> Vec<CoffeeItem> {
        #[allow(clippy::unwrap_used)] // lock poisoning is unrecoverable
        self.items.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        if self.fail_requests.load(Ordering::SeqCst) {
            return Err(ApiError::Server { status: 500 });
        }
        Ok(())
    }

    fn record_from(id: i64, draft: &CoffeeDraft) -> CoffeeItem {
        CoffeeItem {
            id,
            category_id: draft.category_id,
            coffee_name: draft.coffee_name.clone(),
            description: draft.description.clone(),
            code: draft.code.clone(),
            image_url: draft.image_url.clone(),
            is_active: draft.is_active,
        }
    }
}

impl ResourceClient for MockCatalog {
    type Record = CoffeeItem;
    type Draft = CoffeeDraft;

    async fn list(&self) -> Result<Vec<CoffeeItem>> {
        self.check()?;
        Ok(self.stored())
    }

    async fn create(&self, draft: CoffeeDraft) -> Result<Option<CoffeeItem>> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = Self::record_from(id, &draft);
        #[allow(clippy::unwrap_used)] // lock poisoning is unrecoverable
        self.items.lock().unwrap().push(record.clone());
        Ok(Some(record))
    }

    async fn update(&self, id: i64, draft: CoffeeDraft) -> Result<Option<CoffeeItem>> {
        self.check()?;
        let record = Self::record_from(id, &draft);
        #[allow(clippy::unwrap_used)] // lock poisoning is unrecoverable
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|item| item.id == id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(Some(record))
            },
            None => Err(ApiError::NotFound {
                message: "Coffee item not found".to_string(),
            }),
        }
    }

    async fn remove(&self, id: i64) -> Result<()> {
        self.check()?;
        #[allow(clippy::unwrap_used)] // lock poisoning is unrecoverable
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(ApiError::NotFound {
                message: "Coffee item not found".to_string(),
            });
        }
        Ok(())
    }
}

/// In-memory user directory with server-side keyword search.
#[derive(Debug, Clone, Default)]
pub struct MockDirectory {
    accounts: Arc<Mutex<Vec<UserAccount>>>,
    fail_requests: Arc<AtomicBool>,
}

impl MockDirectory {
    /// Create a directory seeded with accounts.
    #[must_use]
    pub fn with_accounts(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
            fail_requests: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent request fail as a server error.
    pub fn fail_requests(&self) {
        self.fail_requests.store(true, Ordering::SeqCst);
    }
}

impl SearchClient for MockDirectory {
    type Record = UserAccount;

    async fn search(
        &self,
        condition: SearchCondition,
        page: PageQuery,
    ) -> Result<Page<UserAccount>> {
        if self.fail_requests.load(Ordering::SeqCst) {
            return Err(ApiError::Server { status: 500 });
        }

        let keyword = condition.keyword.to_lowercase();
        #[allow(clippy::unwrap_used)] // lock poisoning is unrecoverable
        let matching: Vec<UserAccount> = self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|account| {
                keyword.is_empty()
                    || account.user_name.to_lowercase().contains(&keyword)
                    || account.email.to_lowercase().contains(&keyword)
            })
            .cloned()
            .collect();

        let total_items = matching.len() as u64;
        let page_size = page.page_size.max(1);
        let total_pages = total_items.div_ceil(u64::from(page_size)) as u32;
        let start = (page.page_num * page_size) as usize;
        let page_data: Vec<UserAccount> = matching
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();

        Ok(Page {
            page_data,
            page_info: PageInfo {
                page_num: page.page_num,
                page_size,
                total_items: Some(total_items),
                total_pages,
            },
        })
    }
}
