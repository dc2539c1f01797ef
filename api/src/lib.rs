//! # Brewdesk API Client
//!
//! Typed Rust client for the coffee-subscription backend API: one
//! configured HTTP client per process, bearer-token injection on every
//! request, a 401 interceptor that tears the stored session down, and one
//! service module per backend collection with envelope and error
//! normalization.
//!
//! ## Example
//!
//! ```no_run
//! use brewdesk_api::{ApiClient, NoToken};
//! use brewdesk_api::resources::CoffeeItems;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from BREWDESK_API_URL environment variable
//!     let client = ApiClient::from_env(Arc::new(NoToken))?;
//!
//!     let catalog = CoffeeItems::new(client);
//!     let items = catalog.list().await?;
//!
//!     println!("{} coffee items", items.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - Live token read on every call (never a stale startup copy)
//! - 401 responses clear the session synchronously and notify subscribers
//! - Transport failures classified apart from server-status errors
//! - Tolerant decoding of the backend's inconsistent response envelopes
//! - No automatic retries, no request de-duplication

pub mod client;
pub mod envelope;
pub mod error;
pub mod resources;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiClient, NoToken, TokenSource};
pub use envelope::Envelope;
pub use error::{ApiError, FieldError, Result};
pub use types::{
    CoffeeDraft, CoffeeItem, CupTracking, CupTrackingDraft, Page, PageInfo, PageQuery,
    PlanCoffeeOption, PlanCoffeeOptionDraft, PlanDraft, SearchCondition, SubscriptionDraft,
    SubscriptionPlan, TimeWindow, TimeWindowDraft, UserAccount, UserDraft, UserSubscription,
};
