//! Subscription plan service.
//!
//! Plan routes are the backend's odd ones out: listing goes through
//! `/getAll` and creation through `/create`, while update and delete use
//! plain REST paths.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::{PlanDraft, SubscriptionPlan};

/// Service over the subscription plan collection.
#[derive(Debug, Clone)]
pub struct SubscriptionPlans {
    client: ApiClient,
}

impl SubscriptionPlans {
    /// Create the service over a shared client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all plans.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn list(&self) -> Result<Vec<SubscriptionPlan>> {
        let envelope: Envelope<Vec<SubscriptionPlan>> =
            self.client.get("/api/SubscriptionPlan/getAll").await?;
        envelope.into_data()
    }

    /// Fetch a single plan.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn get(&self, id: i64) -> Result<SubscriptionPlan> {
        let envelope: Envelope<SubscriptionPlan> = self
            .client
            .get(&format!("/api/SubscriptionPlan/{id}"))
            .await?;
        envelope.into_data()
    }

    /// Create a plan.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn create(&self, draft: &PlanDraft) -> Result<Option<SubscriptionPlan>> {
        let envelope: Envelope<SubscriptionPlan> = self
            .client
            .post("/api/SubscriptionPlan/create", draft)
            .await?;
        envelope.into_optional()
    }

    /// Update a plan.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn update(&self, id: i64, draft: &PlanDraft) -> Result<Option<SubscriptionPlan>> {
        let envelope: Envelope<SubscriptionPlan> = self
            .client
            .put(&format!("/api/SubscriptionPlan/{id}"), draft)
            .await?;
        envelope.into_optional()
    }

    /// Delete a plan.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("/api/SubscriptionPlan/{id}"))
            .await
    }
}
