//! Plan/coffee linkage service.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::{PlanCoffeeOption, PlanCoffeeOptionDraft};

/// Service over the plan/coffee option collection.
#[derive(Debug, Clone)]
pub struct PlanCoffeeOptions {
    client: ApiClient,
}

impl PlanCoffeeOptions {
    /// Create the service over a shared client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all plan/coffee links.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn list(&self) -> Result<Vec<PlanCoffeeOption>> {
        let envelope: Envelope<Vec<PlanCoffeeOption>> =
            self.client.get("/api/PlanCoffeeOption").await?;
        envelope.into_data()
    }

    /// Fetch a single link.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn get(&self, id: i64) -> Result<PlanCoffeeOption> {
        let envelope: Envelope<PlanCoffeeOption> = self
            .client
            .get(&format!("/api/PlanCoffeeOption/{id}"))
            .await?;
        envelope.into_data()
    }

    /// Create a link.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn create(&self, draft: &PlanCoffeeOptionDraft) -> Result<Option<PlanCoffeeOption>> {
        let envelope: Envelope<PlanCoffeeOption> =
            self.client.post("/api/PlanCoffeeOption", draft).await?;
        envelope.into_optional()
    }

    /// Update a link.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn update(
        &self,
        id: i64,
        draft: &PlanCoffeeOptionDraft,
    ) -> Result<Option<PlanCoffeeOption>> {
        let envelope: Envelope<PlanCoffeeOption> = self
            .client
            .put(&format!("/api/PlanCoffeeOption/{id}"), draft)
            .await?;
        envelope.into_optional()
    }

    /// Delete a link.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("/api/PlanCoffeeOption/{id}"))
            .await
    }
}
