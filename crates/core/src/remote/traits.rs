use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::Hobby;
use crate::schedule::ScheduledEvent;
use crate::session::Account;

use super::requests::{CreateEventRequest, CreateHobbyRequest, RegisterRequest};
use super::Result;

/// Abstraction over the remote hobby-tracking service.
///
/// The core depends on these logical operations only; the HTTP shape lives
/// in the client crate. Implementations map transport failures to
/// `RemoteError`.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Lists all registered accounts.
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Authenticates and returns the account identifier.
    async fn authenticate(&self, username: &str, password: &str) -> Result<Uuid>;

    /// Fetches the full account profile by identifier.
    async fn get_account(&self, id: Uuid) -> Result<Account>;

    /// Registers a new account. Does not authenticate.
    async fn register(&self, request: &RegisterRequest) -> Result<()>;

    /// Lists the shared hobby catalog.
    async fn list_hobbies(&self) -> Result<Vec<Hobby>>;

    /// Creates a new hobby catalog entry.
    async fn create_hobby(&self, request: &CreateHobbyRequest) -> Result<Hobby>;

    /// Lists an account's scheduled events.
    async fn list_scheduled_events(&self, account_id: Uuid) -> Result<Vec<ScheduledEvent>>;

    /// Creates a new scheduled event.
    async fn create_scheduled_event(&self, request: &CreateEventRequest) -> Result<ScheduledEvent>;
}
