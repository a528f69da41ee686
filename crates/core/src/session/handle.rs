//! Shared read view of the running client's session.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::types::{Account, Session};

/// Handle to the one session of the running client.
///
/// Components that need the current account read it through a clone of this
/// handle; mutation stays with `SessionLifecycle`. Asynchronous refresh
/// tasks call `is_current` before touching a collection, so work whose
/// account context has been superseded is discarded instead of published.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Session>>,
}

impl SessionHandle {
    /// Creates a handle holding an anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current session state.
    pub async fn session(&self) -> Session {
        self.inner.read().await.clone()
    }

    /// Returns the authenticated account, if any.
    pub async fn account(&self) -> Option<Account> {
        self.inner.read().await.account().cloned()
    }

    /// Returns true if `account_id` is still the authenticated account.
    pub async fn is_current(&self, account_id: Uuid) -> bool {
        self.inner.read().await.account_id() == Some(account_id)
    }

    /// Replaces the session state, returning the previous value.
    ///
    /// Only `SessionLifecycle` transitions mutate the session.
    pub(crate) async fn replace(&self, session: Session) -> Session {
        let mut guard = self.inner.write().await;
        std::mem::replace(&mut *guard, session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn account() -> Account {
        Account::new("edik", "edik@example.com")
            .with_id(Uuid::from_u128(1))
            .with_created_at(chrono::Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn test_new_handle_is_anonymous() {
        let handle = SessionHandle::new();

        assert_eq!(handle.session().await, Session::Anonymous);
        assert_eq!(handle.account().await, None);
        assert!(!handle.is_current(Uuid::from_u128(1)).await);
    }

    #[tokio::test]
    async fn test_replace_returns_previous_state() {
        let handle = SessionHandle::new();

        let previous = handle.replace(Session::Authenticated(account())).await;
        assert_eq!(previous, Session::Anonymous);

        let previous = handle.replace(Session::Anonymous).await;
        assert_eq!(previous, Session::Authenticated(account()));
    }

    #[tokio::test]
    async fn test_is_current_tracks_the_authenticated_account() {
        let handle = SessionHandle::new();
        handle.replace(Session::Authenticated(account())).await;

        assert!(handle.is_current(Uuid::from_u128(1)).await);
        assert!(!handle.is_current(Uuid::from_u128(2)).await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let handle = SessionHandle::new();
        let clone = handle.clone();

        handle.replace(Session::Authenticated(account())).await;

        assert!(clone.is_current(Uuid::from_u128(1)).await);
    }
}
