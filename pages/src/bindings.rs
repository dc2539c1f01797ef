//! Per-resource bindings.
//!
//! Each management page is a [`ListReducer`](crate::ListReducer) (or
//! [`PagedReducer`](crate::PagedReducer)) instantiated with one of these
//! bindings: the record's search fields and dropdown-filter semantics
//! mirror the original pages, and the service impls delegate to the
//! `brewdesk-api` modules.

use crate::controller::{ListRecord, ResourceClient};
use crate::paged::SearchClient;
use brewdesk_api::error::Result;
use brewdesk_api::resources::{
    CoffeeItems, CupTrackings, PlanCoffeeOptions, SubscriptionPlans, TimeWindows,
    UserSubscriptions, Users,
};
use brewdesk_api::{
    CoffeeDraft, CoffeeItem, CupTracking, CupTrackingDraft, Page, PageQuery, PlanCoffeeOption,
    PlanCoffeeOptionDraft, PlanDraft, SearchCondition, SubscriptionDraft, SubscriptionPlan,
    TimeWindow, TimeWindowDraft, UserAccount, UserDraft, UserSubscription,
};

fn contains(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

// ═══════════════════════════════════════════════════════════════════════
// Coffee catalog: search by name/description/code, filter by category
// ═══════════════════════════════════════════════════════════════════════

impl ListRecord for CoffeeItem {
    type Filter = i64;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        contains(&self.coffee_name, term)
            || contains(&self.description, term)
            || contains(&self.code, term)
    }

    fn matches_filter(&self, category_id: &i64) -> bool {
        self.category_id == *category_id
    }
}

impl ResourceClient for CoffeeItems {
    type Record = CoffeeItem;
    type Draft = CoffeeDraft;

    async fn list(&self) -> Result<Vec<CoffeeItem>> {
        CoffeeItems::list(self).await
    }

    async fn create(&self, draft: CoffeeDraft) -> Result<Option<CoffeeItem>> {
        CoffeeItems::create(self, &draft).await
    }

    async fn update(&self, id: i64, draft: CoffeeDraft) -> Result<Option<CoffeeItem>> {
        CoffeeItems::update(self, id, &draft).await
    }

    async fn remove(&self, id: i64) -> Result<()> {
        CoffeeItems::delete(self, id).await
    }
}

impl SearchClient for CoffeeItems {
    type Record = CoffeeItem;

    async fn search(
        &self,
        condition: SearchCondition,
        page: PageQuery,
    ) -> Result<Page<CoffeeItem>> {
        CoffeeItems::search(self, condition, page).await
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Subscription plans: search by name/description, filter by active flag
// ═══════════════════════════════════════════════════════════════════════

impl ListRecord for SubscriptionPlan {
    type Filter = bool;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        contains(&self.plan_name, term) || contains(&self.description, term)
    }

    fn matches_filter(&self, active: &bool) -> bool {
        self.is_active == *active
    }
}

impl ResourceClient for SubscriptionPlans {
    type Record = SubscriptionPlan;
    type Draft = PlanDraft;

    async fn list(&self) -> Result<Vec<SubscriptionPlan>> {
        SubscriptionPlans::list(self).await
    }

    async fn create(&self, draft: PlanDraft) -> Result<Option<SubscriptionPlan>> {
        SubscriptionPlans::create(self, &draft).await
    }

    async fn update(&self, id: i64, draft: PlanDraft) -> Result<Option<SubscriptionPlan>> {
        SubscriptionPlans::update(self, id, &draft).await
    }

    async fn remove(&self, id: i64) -> Result<()> {
        SubscriptionPlans::delete(self, id).await
    }
}

// ═══════════════════════════════════════════════════════════════════════
// User subscriptions: search by status or ids, filter by active flag.
// No create - subscriptions come from the customer-facing checkout.
// ═══════════════════════════════════════════════════════════════════════

impl ListRecord for UserSubscription {
    type Filter = bool;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        contains(&self.status, term)
            || self.user_id.to_string().contains(term)
            || self.plan_id.to_string().contains(term)
    }

    fn matches_filter(&self, active: &bool) -> bool {
        self.is_active == *active
    }
}

impl ResourceClient for UserSubscriptions {
    type Record = UserSubscription;
    type Draft = SubscriptionDraft;

    async fn list(&self) -> Result<Vec<UserSubscription>> {
        UserSubscriptions::list(self).await
    }

    async fn update(&self, id: i64, draft: SubscriptionDraft) -> Result<Option<UserSubscription>> {
        UserSubscriptions::update(self, id, &draft).await
    }

    async fn remove(&self, id: i64) -> Result<()> {
        UserSubscriptions::delete(self, id).await
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Time windows: search by description, filter by owning plan
// ═══════════════════════════════════════════════════════════════════════

impl ListRecord for TimeWindow {
    type Filter = i64;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        contains(&self.description, term)
    }

    fn matches_filter(&self, plan_id: &i64) -> bool {
        self.plan_id == *plan_id
    }
}

impl ResourceClient for TimeWindows {
    type Record = TimeWindow;
    type Draft = TimeWindowDraft;

    async fn list(&self) -> Result<Vec<TimeWindow>> {
        TimeWindows::list(self).await
    }

    async fn create(&self, draft: TimeWindowDraft) -> Result<Option<TimeWindow>> {
        TimeWindows::create(self, &draft).await
    }

    async fn update(&self, id: i64, draft: TimeWindowDraft) -> Result<Option<TimeWindow>> {
        TimeWindows::update(self, id, &draft).await
    }

    async fn remove(&self, id: i64) -> Result<()> {
        TimeWindows::delete(self, id).await
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Daily cup tracking: search by date, filter by owning subscription
// ═══════════════════════════════════════════════════════════════════════

impl ListRecord for CupTracking {
    type Filter = i64;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        self.date.to_string().contains(term) || self.subscription_id.to_string().contains(term)
    }

    fn matches_filter(&self, subscription_id: &i64) -> bool {
        self.subscription_id == *subscription_id
    }
}

impl ResourceClient for CupTrackings {
    type Record = CupTracking;
    type Draft = CupTrackingDraft;

    async fn list(&self) -> Result<Vec<CupTracking>> {
        CupTrackings::list(self).await
    }

    async fn create(&self, draft: CupTrackingDraft) -> Result<Option<CupTracking>> {
        CupTrackings::create(self, &draft).await
    }

    async fn update(&self, id: i64, draft: CupTrackingDraft) -> Result<Option<CupTracking>> {
        CupTrackings::update(self, id, &draft).await
    }

    async fn remove(&self, id: i64) -> Result<()> {
        CupTrackings::delete(self, id).await
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Plan/coffee links: search by either id, filter by owning plan
// ═══════════════════════════════════════════════════════════════════════

impl ListRecord for PlanCoffeeOption {
    type Filter = i64;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        self.plan_id.to_string().contains(term) || self.coffee_id.to_string().contains(term)
    }

    fn matches_filter(&self, plan_id: &i64) -> bool {
        self.plan_id == *plan_id
    }
}

impl ResourceClient for PlanCoffeeOptions {
    type Record = PlanCoffeeOption;
    type Draft = PlanCoffeeOptionDraft;

    async fn list(&self) -> Result<Vec<PlanCoffeeOption>> {
        PlanCoffeeOptions::list(self).await
    }

    async fn create(&self, draft: PlanCoffeeOptionDraft) -> Result<Option<PlanCoffeeOption>> {
        PlanCoffeeOptions::create(self, &draft).await
    }

    async fn update(&self, id: i64, draft: PlanCoffeeOptionDraft) -> Result<Option<PlanCoffeeOption>> {
        PlanCoffeeOptions::update(self, id, &draft).await
    }

    async fn remove(&self, id: i64) -> Result<()> {
        PlanCoffeeOptions::delete(self, id).await
    }
}

// ═══════════════════════════════════════════════════════════════════════
// User accounts: search by name/email, filter by active flag.
// No update or remove through the list controller - accounts are
// deactivated, not deleted, and role changes go through the service's
// dedicated endpoints.
// ═══════════════════════════════════════════════════════════════════════

impl ListRecord for UserAccount {
    type Filter = bool;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &str) -> bool {
        contains(&self.user_name, term)
            || contains(&self.full_name, term)
            || contains(&self.email, term)
    }

    fn matches_filter(&self, active: &bool) -> bool {
        self.is_active == *active
    }
}

impl ResourceClient for Users {
    type Record = UserAccount;
    type Draft = UserDraft;

    async fn list(&self) -> Result<Vec<UserAccount>> {
        Users::list(self).await
    }

    async fn create(&self, draft: UserDraft) -> Result<Option<UserAccount>> {
        Users::create(self, &draft).await.map(|()| None)
    }
}

impl SearchClient for Users {
    type Record = UserAccount;

    async fn search(
        &self,
        condition: SearchCondition,
        page: PageQuery,
    ) -> Result<Page<UserAccount>> {
        Users::search(self, condition, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coffee_search_spans_name_description_and_code() {
        let item = CoffeeItem {
            id: 1,
            category_id: 2,
            coffee_name: "Latte".to_string(),
            description: "Espresso with steamed milk".to_string(),
            code: "CF010".to_string(),
            image_url: None,
            is_active: true,
        };

        assert!(item.matches_search("latte"));
        assert!(item.matches_search("steamed"));
        assert!(item.matches_search("cf010"));
        assert!(!item.matches_search("matcha"));
    }

    #[test]
    fn user_filter_follows_the_active_flag() {
        let user = UserAccount {
            id: 1,
            user_name: "alice".to_string(),
            full_name: "Alice Doe".to_string(),
            email: "alice@example.com".to_string(),
            phone_number: None,
            role_id: 1,
            is_active: false,
        };

        assert!(user.matches_filter(&false));
        assert!(!user.matches_filter(&true));
        assert!(user.matches_search("alice"));
    }
}
