//! One service module per backend collection.
//!
//! Each module wraps the shared [`ApiClient`](crate::client::ApiClient)
//! with resource-specific paths and normalizes the response envelope and
//! errors, so pages never see raw HTTP. Paths follow the real backend,
//! including its inconsistencies (`SubscriptionPlan/getAll`,
//! `SubscriptionPlan/create` next to plain REST paths elsewhere).

pub mod auth;
pub mod coffee_items;
pub mod cup_tracking;
pub mod plan_options;
pub mod subscription_plans;
pub mod time_windows;
pub mod user_subscriptions;
pub mod users;

pub use auth::{AuthApi, AuthOutcome};
pub use coffee_items::CoffeeItems;
pub use cup_tracking::CupTrackings;
pub use plan_options::PlanCoffeeOptions;
pub use subscription_plans::SubscriptionPlans;
pub use time_windows::TimeWindows;
pub use user_subscriptions::UserSubscriptions;
pub use users::Users;
