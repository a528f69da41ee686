//! Programmable in-memory service double for tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, LocalResult, TimeZone, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::Hobby;
use crate::schedule::ScheduledEvent;
use crate::session::Account;

use super::requests::{CreateEventRequest, CreateHobbyRequest, RegisterRequest};
use super::traits::RemoteApi;
use super::{RemoteError, Result};

#[derive(Debug, Default)]
struct MockState {
    accounts: Vec<Account>,
    passwords: HashMap<String, String>,
    hobbies: Vec<Hobby>,
    events: HashMap<Uuid, Vec<ScheduledEvent>>,
    failure: Option<RemoteError>,
    calls: Vec<String>,
}

/// In-memory `RemoteApi` implementation for tests.
///
/// State is programmable up front and shared across clones; every trait
/// call is recorded by operation name so tests can assert on network
/// traffic. A failure injected with `fail_with` is returned by all
/// subsequent calls until cleared.
#[derive(Debug, Clone, Default)]
pub struct MockRemote {
    state: Arc<RwLock<MockState>>,
}

impl MockRemote {
    /// Creates an empty mock service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account with its login password.
    pub async fn add_account(&self, account: Account, password: &str) {
        let mut state = self.state.write().await;
        state
            .passwords
            .insert(account.username.clone(), password.to_string());
        state.accounts.push(account);
    }

    /// Adds a hobby to the catalog.
    pub async fn add_hobby(&self, hobby: Hobby) {
        let mut state = self.state.write().await;
        state.hobbies.push(hobby);
    }

    /// Adds a scheduled event for its owning account.
    pub async fn add_event(&self, event: ScheduledEvent) {
        let mut state = self.state.write().await;
        state.events.entry(event.account_id).or_default().push(event);
    }

    /// Makes every subsequent call fail with `error`.
    pub async fn fail_with(&self, error: RemoteError) {
        let mut state = self.state.write().await;
        state.failure = Some(error);
    }

    /// Clears an injected failure.
    pub async fn clear_failure(&self) {
        let mut state = self.state.write().await;
        state.failure = None;
    }

    /// Returns the recorded operation names, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.state.read().await.calls.clone()
    }

    /// Returns the events stored for an account.
    pub async fn events_for(&self, account_id: Uuid) -> Vec<ScheduledEvent> {
        self.state
            .read()
            .await
            .events
            .get(&account_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn record(&self, operation: &str) -> Result<()> {
        let mut state = self.state.write().await;
        state.calls.push(operation.to_string());
        match &state.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RemoteApi for MockRemote {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.record("list_accounts").await?;
        Ok(self.state.read().await.accounts.clone())
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<Uuid> {
        self.record("authenticate").await?;
        let state = self.state.read().await;
        let account = state
            .accounts
            .iter()
            .find(|account| account.username == username);
        match account {
            Some(account) if state.passwords.get(username).map(String::as_str) == Some(password) => {
                Ok(account.id)
            }
            _ => Err(RemoteError::Rejected(
                "Invalid username or password".to_string(),
            )),
        }
    }

    async fn get_account(&self, id: Uuid) -> Result<Account> {
        self.record("get_account").await?;
        self.state
            .read()
            .await
            .accounts
            .iter()
            .find(|account| account.id == id)
            .cloned()
            .ok_or_else(|| RemoteError::Rejected("Account not found".to_string()))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.record("register").await?;
        let mut state = self.state.write().await;
        let duplicate = state
            .accounts
            .iter()
            .any(|account| account.username == request.username || account.email == request.email);
        if duplicate {
            return Err(RemoteError::Rejected(
                "Username or email already registered".to_string(),
            ));
        }
        state
            .passwords
            .insert(request.username.clone(), request.password.clone());
        state
            .accounts
            .push(Account::new(&request.username, &request.email));
        Ok(())
    }

    async fn list_hobbies(&self) -> Result<Vec<Hobby>> {
        self.record("list_hobbies").await?;
        Ok(self.state.read().await.hobbies.clone())
    }

    async fn create_hobby(&self, request: &CreateHobbyRequest) -> Result<Hobby> {
        self.record("create_hobby").await?;
        let mut hobby = Hobby::new(&request.name, &request.description);
        hobby.category = request.category.clone();
        hobby.difficulty = request.difficulty;
        let mut state = self.state.write().await;
        state.hobbies.push(hobby.clone());
        Ok(hobby)
    }

    async fn list_scheduled_events(&self, account_id: Uuid) -> Result<Vec<ScheduledEvent>> {
        self.record("list_scheduled_events").await?;
        Ok(self.events_for(account_id).await)
    }

    async fn create_scheduled_event(&self, request: &CreateEventRequest) -> Result<ScheduledEvent> {
        self.record("create_scheduled_event").await?;
        let mut state = self.state.write().await;

        let hobby_name = state
            .hobbies
            .iter()
            .find(|hobby| hobby.id == request.hobby_id)
            .map(|hobby| hobby.name.clone())
            .ok_or_else(|| RemoteError::Rejected("Unknown hobby".to_string()))?;

        let starts_at = match Local.from_local_datetime(&request.starts_at) {
            LocalResult::Single(local) => local.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
            LocalResult::None => {
                return Err(RemoteError::Rejected("Invalid start time".to_string()))
            }
        };

        let event =
            ScheduledEvent::new(request.account_id, request.hobby_id, hobby_name, starts_at);
        state
            .events
            .entry(request.account_id)
            .or_default()
            .push(event.clone());
        Ok(event)
    }
}
