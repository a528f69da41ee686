//! Hobby catalog operations.

use hobbysync_core::catalog::Hobby;
use hobbysync_core::remote::CreateHobbyRequest;

use super::HobbySyncClient;
use crate::error::Result;

impl HobbySyncClient {
    /// List the shared hobby catalog.
    pub async fn list_hobbies(&self) -> Result<Vec<Hobby>> {
        let response = self.client.get(self.url("/hobbies/")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new hobby catalog entry.
    pub async fn create_hobby(&self, request: &CreateHobbyRequest) -> Result<Hobby> {
        let response = self
            .client
            .post(self.url("/hobbies/"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
