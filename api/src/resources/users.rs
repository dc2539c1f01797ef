//! User administration service.
//!
//! Accounts are never deleted through this console; deactivation is the
//! supported off-boarding path, via the query-parameter toggle endpoint.

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::types::{Page, PageQuery, SearchCondition, SearchRequest, UserAccount, UserDraft};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoleChange {
    role_id: i64,
}

/// Service over the user account collection.
#[derive(Debug, Clone)]
pub struct Users {
    client: ApiClient,
}

impl Users {
    /// Create the service over a shared client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all user accounts.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn list(&self) -> Result<Vec<UserAccount>> {
        let envelope: Envelope<Vec<UserAccount>> = self.client.get("/api/User").await?;
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
    ) -> Result<Page<UserAccount>> {
        let envelope: Envelope<Page<UserAccount>> = self
            .client
            .post(
                "/api/User/search",
                &SearchRequest {
                    search_condition: condition,
                    page_info: page,
                },
            )
            .await?;
        envelope.into_data()
    }

    /// Fetch a single account.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn get(&self, id: i64) -> Result<UserAccount> {
        let envelope: Envelope<UserAccount> = self.client.get(&format!("/api/User/{id}")).await?;
        envelope.into_data()
    }

    /// Create an account. The backend acknowledges without returning the
    /// entity; callers refetch the listing afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure,
    /// including field-level validation errors on bad input.
    pub async fn create(&self, draft: &UserDraft) -> Result<()> {
        self.client.post_no_content("/api/User", draft).await
    }

    /// Toggle whether an account may sign in.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn set_active(&self, id: i64, active: bool) -> Result<()> {
        self.client
            .put_empty(&format!("/api/User/is-active/{id}?active={active}"))
            .await
    }

    /// Change an account's role.
    ///
    /// Role semantics are entirely server-enforced; this console only
    /// submits the numeric role id and surfaces a 403 when the caller's
    /// own role does not permit the change.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError`] on transport or server failure.
    pub async fn set_role(&self, id: i64, role_id: i64) -> Result<()> {
        self.client
            .put_no_content(&format!("/api/User/{id}/role"), &RoleChange { role_id })
            .await
    }
}
