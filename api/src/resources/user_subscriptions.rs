//! User subscription service.
//!
//! Subscriptions are created by the customer-facing checkout, so this
//! console can list, inspect, update, and cancel them - but never create
//! one.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::{SubscriptionDraft, UserSubscription};

/// Service over the user subscription collection.
#[derive(Debug, Clone)]
pub struct UserSubscriptions {
    client: ApiClient,
}

impl UserSubscriptions {
    /// Create the service over a shared client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn list(&self) -> Result<Vec<UserSubscription>> {
        let envelope: Envelope<Vec<UserSubscription>> =
            self.client.get("/api/UserSubscription").await?;
        envelope.into_data()
    }

    /// Fetch a single subscription.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn get(&self, id: i64) -> Result<UserSubscription> {
        let envelope: Envelope<UserSubscription> = self
            .client
            .get(&format!("/api/UserSubscription/{id}"))
            .await?;
        envelope.into_data()
    }

    /// Update a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn update(
        &self,
        id: i64,
        draft: &SubscriptionDraft,
    ) -> Result<Option<UserSubscription>> {
        let envelope: Envelope<UserSubscription> = self
            .client
            .put(&format!("/api/UserSubscription/{id}"), draft)
            .await?;
        envelope.into_optional()
    }

    /// Delete (cancel) a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("/api/UserSubscription/{id}"))
            .await
    }
}
