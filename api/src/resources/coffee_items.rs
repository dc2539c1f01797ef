//! Coffee catalog service.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::{CoffeeDraft, CoffeeItem, ImageUpload, Page, PageQuery, SearchCondition, SearchRequest};

/// Service over the coffee catalog collection.
#[derive(Debug, Clone)]
pub struct CoffeeItems {
    client: ApiClient,
}

impl CoffeeItems {
    /// Create the service over a shared client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn list(&self) -> Result<Vec<CoffeeItem>> {
        let envelope: Envelope<Vec<CoffeeItem>> = self.client.get("/api/CoffeeItem").await?;
        envelope.into_data()
    }

    /// Server-side keyword search with pagination.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn search(
        &self,
        condition: SearchCondition,
        page: PageQuery,
    ) -> Result<Page<CoffeeItem>> {
        let envelope: Envelope<Page<CoffeeItem>> = self
            .client
            .post(
                "/api/CoffeeItem/search",
                &SearchRequest {
                    search_condition: condition,
                    page_info: page,
                },
            )
            .await?;
        envelope.into_data()
    }

    /// Fetch a single catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn get(&self, id: i64) -> Result<CoffeeItem> {
        let envelope: Envelope<CoffeeItem> =
            self.client.get(&format!("/api/CoffeeItem/{id}")).await?;
        envelope.into_data()
    }

    /// Create a catalog entry. Returns the created record when the backend
    /// includes it in the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure,
    /// including field-level validation errors on bad input.
    pub async fn create(&self, draft: &CoffeeDraft) -> Result<Option<CoffeeItem>> {
        let envelope: Envelope<CoffeeItem> = self.client.post("/api/CoffeeItem", draft).await?;
        envelope.into_optional()
    }

    /// Update a catalog entry. Returns the updated record when the backend
    /// includes it in the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn update(&self, id: i64, draft: &CoffeeDraft) -> Result<Option<CoffeeItem>> {
        let envelope: Envelope<CoffeeItem> = self
            .client
            .put(&format!("/api/CoffeeItem/{id}"), draft)
            .await?;
        envelope.into_optional()
    }

    /// Delete a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/api/CoffeeItem/{id}")).await
    }

    /// Upload an image for a catalog entry; returns the hosted URL.
    ///
    /// This is the only multipart endpoint in the backend; the entry
    /// itself is always submitted as JSON with the returned URL.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("File", part);

        let envelope: Envelope<ImageUpload> = self
            .client
            .post_multipart("/api/CoffeeItem/image", form)
            .await?;
        Ok(envelope.into_data()?.url)
    }
}
