//! Account operations.

use serde::Deserialize;
use uuid::Uuid;

use hobbysync_core::remote::RegisterRequest;
use hobbysync_core::session::Account;

use super::HobbySyncClient;
use crate::error::Result;

/// Response body of the login endpoint.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub id: Uuid,
}

impl HobbySyncClient {
    /// List all registered accounts.
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        let response = self.client.get(self.url("/users/")).send().await?;
        self.handle_response(response).await
    }

    /// Fetch a single account by ID.
    pub async fn get_account(&self, id: Uuid) -> Result<Account> {
        let response = self
            .client
            .get(self.url(&format!("/users/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Authenticate and return the account identifier.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .client
            .post(self.url("/login/"))
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Register a new account. The created profile body is not needed.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let response = self
            .client
            .post(self.url("/register/"))
            .json(request)
            .send()
            .await?;
        self.handle_status_response(response).await
    }
}
