//! Subscription time window service.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::{TimeWindow, TimeWindowDraft};

/// Service over the subscription time window collection.
#[derive(Debug, Clone)]
pub struct TimeWindows {
    client: ApiClient,
}

impl TimeWindows {
    /// Create the service over a shared client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all time windows.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn list(&self) -> Result<Vec<TimeWindow>> {
        let envelope: Envelope<Vec<TimeWindow>> =
            self.client.get("/api/SubscriptionTimeWindow").await?;
        envelope.into_data()
    }

    /// Create a time window.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn create(&self, draft: &TimeWindowDraft) -> Result<Option<TimeWindow>> {
        let envelope: Envelope<TimeWindow> = self
            .client
            .post("/api/SubscriptionTimeWindow", draft)
            .await?;
        envelope.into_optional()
    }

    /// Update a time window.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn update(&self, id: i64, draft: &TimeWindowDraft) -> Result<Option<TimeWindow>> {
        let envelope: Envelope<TimeWindow> = self
            .client
            .put(&format!("/api/SubscriptionTimeWindow/{id}"), draft)
            .await?;
        envelope.into_optional()
    }

    /// Delete a time window.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("/api/SubscriptionTimeWindow/{id}"))
            .await
    }
}
