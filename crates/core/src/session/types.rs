use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account on the service.
///
/// Immutable once created; only the current session holds a live copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account with the given username and email.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }

    /// Sets a specific ID for this account (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets a specific creation timestamp (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// The authentication state of the running client.
///
/// Exactly one session exists per running client. It starts anonymous at
/// cold start (or is restored from the persisted cache) and moves between
/// the two states through `SessionLifecycle` transitions only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Account),
}

impl Session {
    /// Returns the authenticated account, if any.
    pub fn account(&self) -> Option<&Account> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(account) => Some(account),
        }
    }

    /// Returns the authenticated account's identifier, if any.
    pub fn account_id(&self) -> Option<Uuid> {
        self.account().map(|account| account.id)
    }

    /// Returns true if an account is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}
