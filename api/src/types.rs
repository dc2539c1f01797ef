//! Typed records and payloads for every backend collection.
//!
//! Records are what the server returns; drafts are what the console
//! submits. The split exists so numeric foreign keys are numbers at the
//! type level - the original console kept form values as strings and
//! coerced at submit time, which is exactly the defect class this layer
//! makes unrepresentable.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// Pagination
// ═══════════════════════════════════════════════════════════════════════

/// Page request parameters for server-paginated endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Zero-based page number.
    pub page_num: u32,
    /// Items per page.
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_num: 0,
            page_size: 10,
        }
    }
}

/// Page metadata returned by search endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Zero-based page number.
    pub page_num: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total matching items, when the server reports it.
    #[serde(default)]
    pub total_items: Option<u64>,
    /// Total page count. The controller trusts this value as-is.
    #[serde(default)]
    pub total_pages: u32,
}

/// One page of records plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The records on this page.
    #[serde(default = "Vec::new")]
    pub page_data: Vec<T>,
    /// Page metadata as reported by the server.
    #[serde(default)]
    pub page_info: PageInfo,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            page_data: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

/// Search condition for keyword search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCondition {
    /// Free-text keyword.
    pub keyword: String,
    /// Include soft-deleted records.
    #[serde(default)]
    pub is_delete: bool,
}

/// Request body for `POST .../search` endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Keyword and flags.
    pub search_condition: SearchCondition,
    /// Requested page.
    pub page_info: PageQuery,
}

// ═══════════════════════════════════════════════════════════════════════
// Coffee catalog
// ═══════════════════════════════════════════════════════════════════════

/// A coffee catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeItem {
    /// Server-assigned identifier.
    pub id: i64,
    /// Category foreign key.
    pub category_id: i64,
    /// Display name.
    pub coffee_name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Short unique code (e.g. `CF010`).
    pub code: String,
    /// Hosted image URL, when an image has been uploaded.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether the entry is visible in the catalog.
    pub is_active: bool,
}

/// Fields submitted when creating or updating a coffee catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeDraft {
    /// Category foreign key.
    pub category_id: i64,
    /// Display name.
    pub coffee_name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Short unique code.
    pub code: String,
    /// Hosted image URL, if one was uploaded beforehand.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether the entry is visible in the catalog.
    pub is_active: bool,
}

/// Response payload of the image upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    /// Hosted URL of the uploaded image.
    pub url: String,
}

// ═══════════════════════════════════════════════════════════════════════
// Subscription plans
// ═══════════════════════════════════════════════════════════════════════

/// A subscription plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name.
    pub plan_name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Price in the smallest currency unit.
    pub price: f64,
    /// Plan length in days.
    pub duration_days: i32,
    /// Total cups included over the plan duration.
    pub total_cups: i32,
    /// Maximum cups per day.
    pub daily_cup_limit: i32,
    /// Whether the plan can be subscribed to.
    pub is_active: bool,
}

/// Fields submitted when creating or updating a subscription plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDraft {
    /// Display name.
    pub plan_name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Price in the smallest currency unit.
    pub price: f64,
    /// Plan length in days.
    pub duration_days: i32,
    /// Total cups included over the plan duration.
    pub total_cups: i32,
    /// Maximum cups per day.
    pub daily_cup_limit: i32,
    /// Whether the plan can be subscribed to.
    pub is_active: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// User subscriptions
// ═══════════════════════════════════════════════════════════════════════

/// One user's subscription to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscription {
    /// Server-assigned identifier.
    pub id: i64,
    /// Subscribing user.
    pub user_id: i64,
    /// Subscribed plan.
    pub plan_id: i64,
    /// Subscription start.
    pub start_date: DateTime<Utc>,
    /// Subscription end.
    pub end_date: DateTime<Utc>,
    /// Server-side status label (e.g. `Active`, `Expired`).
    #[serde(default)]
    pub status: String,
    /// Whether the subscription is active.
    pub is_active: bool,
}

/// Fields submitted when updating a user subscription.
///
/// There is no create endpoint for subscriptions: they are created by the
/// customer-facing checkout, not by this console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDraft {
    /// Subscription start.
    pub start_date: DateTime<Utc>,
    /// Subscription end.
    pub end_date: DateTime<Utc>,
    /// Server-side status label.
    #[serde(default)]
    pub status: String,
    /// Whether the subscription is active.
    pub is_active: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// Time windows
// ═══════════════════════════════════════════════════════════════════════

/// A redemption time window attached to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    /// Server-assigned identifier.
    pub id: i64,
    /// Owning plan.
    pub plan_id: i64,
    /// Window opens.
    pub start_time: NaiveTime,
    /// Window closes.
    pub end_time: NaiveTime,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Whether the window is enforced.
    pub is_active: bool,
}

/// Fields submitted when creating or updating a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindowDraft {
    /// Owning plan.
    pub plan_id: i64,
    /// Window opens.
    pub start_time: NaiveTime,
    /// Window closes.
    pub end_time: NaiveTime,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Whether the window is enforced.
    pub is_active: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// Daily cup tracking
// ═══════════════════════════════════════════════════════════════════════

/// A per-day cup consumption record for one subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CupTracking {
    /// Server-assigned identifier.
    pub id: i64,
    /// Owning subscription.
    pub subscription_id: i64,
    /// The day being tracked.
    pub date: NaiveDate,
    /// Cups redeemed that day.
    pub cups_taken: i32,
}

/// Fields submitted when creating or updating a cup tracking record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CupTrackingDraft {
    /// Owning subscription.
    pub subscription_id: i64,
    /// The day being tracked.
    pub date: NaiveDate,
    /// Cups redeemed that day.
    pub cups_taken: i32,
}

// ═══════════════════════════════════════════════════════════════════════
// Plan / coffee linkage
// ═══════════════════════════════════════════════════════════════════════

/// Marks a coffee item as available under a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCoffeeOption {
    /// Server-assigned identifier.
    pub id: i64,
    /// The plan.
    pub plan_id: i64,
    /// The coffee item.
    pub coffee_id: i64,
}

/// Fields submitted when creating or updating a plan/coffee link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCoffeeOptionDraft {
    /// The plan.
    pub plan_id: i64,
    /// The coffee item.
    pub coffee_id: i64,
}

// ═══════════════════════════════════════════════════════════════════════
// User accounts
// ═══════════════════════════════════════════════════════════════════════

/// A user account as seen by the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Server-assigned identifier.
    pub id: i64,
    /// Login name.
    #[serde(default)]
    pub user_name: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Phone number, when provided.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Role foreign key. Role semantics are server-enforced.
    pub role_id: i64,
    /// Whether the account may sign in.
    pub is_active: bool,
}

/// Fields submitted when creating a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Login name.
    pub user_name: String,
    /// Display name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Phone number, when provided.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Role foreign key, submitted as a number.
    pub role_id: i64,
}
