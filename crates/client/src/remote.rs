//! `RemoteApi` implementation over the HTTP client.
//!
//! Transport and server failures collapse to the core's two-variant
//! `RemoteError`: a 4xx with a message surfaces verbatim for display,
//! everything else becomes the generic server error.

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use hobbysync_core::catalog::Hobby;
use hobbysync_core::remote::{
    CreateEventRequest, CreateHobbyRequest, RegisterRequest, RemoteApi, RemoteError,
};
use hobbysync_core::schedule::ScheduledEvent;
use hobbysync_core::session::Account;

use crate::client::HobbySyncClient;
use crate::error::ClientError;

fn to_remote(error: ClientError) -> RemoteError {
    match error {
        ClientError::ServerError { status, message } if (400..500).contains(&status) => {
            RemoteError::Rejected(message)
        }
        other => {
            warn!(error = %other, "remote request failed");
            RemoteError::ServerError
        }
    }
}

#[async_trait]
impl RemoteApi for HobbySyncClient {
    async fn list_accounts(&self) -> Result<Vec<Account>, RemoteError> {
        HobbySyncClient::list_accounts(self).await.map_err(to_remote)
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<Uuid, RemoteError> {
        HobbySyncClient::authenticate(self, username, password)
            .await
            .map(|response| response.id)
            .map_err(to_remote)
    }

    async fn get_account(&self, id: Uuid) -> Result<Account, RemoteError> {
        HobbySyncClient::get_account(self, id).await.map_err(to_remote)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), RemoteError> {
        HobbySyncClient::register(self, request)
            .await
            .map_err(to_remote)
    }

    async fn list_hobbies(&self) -> Result<Vec<Hobby>, RemoteError> {
        HobbySyncClient::list_hobbies(self).await.map_err(to_remote)
    }

    async fn create_hobby(&self, request: &CreateHobbyRequest) -> Result<Hobby, RemoteError> {
        HobbySyncClient::create_hobby(self, request)
            .await
            .map_err(to_remote)
    }

    async fn list_scheduled_events(
        &self,
        account_id: Uuid,
    ) -> Result<Vec<ScheduledEvent>, RemoteError> {
        HobbySyncClient::list_scheduled_events(self, account_id)
            .await
            .map_err(to_remote)
    }

    async fn create_scheduled_event(
        &self,
        request: &CreateEventRequest,
    ) -> Result<ScheduledEvent, RemoteError> {
        HobbySyncClient::create_scheduled_event(self, request)
            .await
            .map_err(to_remote)
    }
}
