//! Daily cup tracking service.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::{CupTracking, CupTrackingDraft};

/// Service over the daily cup tracking collection.
#[derive(Debug, Clone)]
pub struct CupTrackings {
    client: ApiClient,
}

impl CupTrackings {
    /// Create the service over a shared client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all tracking records.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn list(&self) -> Result<Vec<CupTracking>> {
        let envelope: Envelope<Vec<CupTracking>> =
            self.client.get("/api/DailyCupTracking").await?;
        envelope.into_data()
    }

    /// Create a tracking record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn create(&self, draft: &CupTrackingDraft) -> Result<Option<CupTracking>> {
        let envelope: Envelope<CupTracking> =
            self.client.post("/api/DailyCupTracking", draft).await?;
        envelope.into_optional()
    }

    /// Update a tracking record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn update(&self, id: i64, draft: &CupTrackingDraft) -> Result<Option<CupTracking>> {
        let envelope: Envelope<CupTracking> = self
            .client
            .put(&format!("/api/DailyCupTracking/{id}"), draft)
            .await?;
        envelope.into_optional()
    }

    /// Delete a tracking record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("/api/DailyCupTracking/{id}"))
            .await
    }
}
