//! Scheduled event operations.

use uuid::Uuid;

use hobbysync_core::remote::CreateEventRequest;
use hobbysync_core::schedule::ScheduledEvent;

use super::HobbySyncClient;
use crate::error::Result;

impl HobbySyncClient {
    /// List an account's scheduled events.
    pub async fn list_scheduled_events(&self, account_id: Uuid) -> Result<Vec<ScheduledEvent>> {
        let response = self
            .client
            .get(self.url(&format!("/users/{}/events/", account_id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a new scheduled event.
    pub async fn create_scheduled_event(
        &self,
        request: &CreateEventRequest,
    ) -> Result<ScheduledEvent> {
        let response = self
            .client
            .post(self.url("/events/"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
