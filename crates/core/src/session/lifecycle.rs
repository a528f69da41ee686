//! Session state machine and the refreshes it drives.
//!
//! Every transition into `Authenticated` initiates a refresh of the
//! account-dependent collections; the transition back to `Anonymous`
//! invalidates them. Refreshes are initiated with the transition but
//! complete asynchronously and never block it.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cache::{
    accounts_key, catalog_key, scheduled_events_key, session_account_key, CacheAsideStore,
    KeyValueCache, LoadOutcome,
};
use crate::catalog::Hobby;
use crate::remote::{RegisterRequest, RemoteApi, RemoteError};
use crate::schedule::ScheduledEvent;

use super::error::{Result, SessionError};
use super::handle::SessionHandle;
use super::types::{Account, Session};
use super::validation;

/// The synchronized collections the session gates.
///
/// Each store owns its collection's projection and persisted snapshot;
/// nothing else mutates them.
#[derive(Clone)]
pub struct Collections {
    pub accounts: Arc<CacheAsideStore<Account>>,
    pub catalog: Arc<CacheAsideStore<Hobby>>,
    pub events: Arc<CacheAsideStore<ScheduledEvent>>,
}

impl Collections {
    /// Creates the three collection stores over one persisted cache.
    ///
    /// The stores share the cache but use disjoint key namespaces.
    pub fn new(cache: Arc<dyn KeyValueCache>) -> Self {
        Self {
            accounts: Arc::new(CacheAsideStore::new(cache.clone())),
            catalog: Arc::new(CacheAsideStore::new(cache.clone())),
            events: Arc::new(CacheAsideStore::new(cache)),
        }
    }
}

/// Tracks the authenticated identity and drives dependent-collection
/// refresh and invalidation.
#[derive(Clone)]
pub struct SessionLifecycle {
    cache: Arc<dyn KeyValueCache>,
    remote: Arc<dyn RemoteApi>,
    collections: Collections,
    session: SessionHandle,
}

impl SessionLifecycle {
    pub fn new(
        cache: Arc<dyn KeyValueCache>,
        remote: Arc<dyn RemoteApi>,
        collections: Collections,
    ) -> Self {
        Self {
            cache,
            remote,
            collections,
            session: SessionHandle::new(),
        }
    }

    /// Returns a shared read handle to the session, for components that
    /// must check the account context of asynchronous work.
    pub fn handle(&self) -> SessionHandle {
        self.session.clone()
    }

    /// Returns the current session state.
    pub async fn session(&self) -> Session {
        self.session.session().await
    }

    /// Returns the currently authenticated account, if any.
    pub async fn current_account(&self) -> Option<Account> {
        self.session.account().await
    }

    /// Restores a persisted session at cold start.
    ///
    /// The only transition not caused by explicit user action. Returns the
    /// restored account if a persisted record was found and parsed.
    pub async fn restore(&self) -> Option<Account> {
        let bytes = match self.cache.get(&session_account_key()).await {
            Ok(bytes) => bytes?,
            Err(e) => {
                warn!(error = %e, "failed to read persisted session record");
                return None;
            }
        };

        let account: Account = match serde_json::from_slice(&bytes) {
            Ok(account) => account,
            Err(e) => {
                warn!(error = %e, "ignoring unparseable session record");
                return None;
            }
        };

        self.session
            .replace(Session::Authenticated(account.clone()))
            .await;
        info!(account_id = %account.id, "session restored");
        self.spawn_dependent_refresh(account.id);

        Some(account)
    }

    /// Logs in with the given credentials.
    ///
    /// Validation failures are resolved locally without a network call.
    /// Remote failures surface verbatim and leave the state unchanged.
    pub async fn login(&self, username: &str, password: &str) -> Result<Account> {
        validation::validate_credentials(username, password)?;

        let account_id = self.remote.authenticate(username, password).await?;
        let account = self.remote.get_account(account_id).await?;

        self.persist_account(&account).await;
        self.session
            .replace(Session::Authenticated(account.clone()))
            .await;
        info!(account_id = %account.id, "logged in");
        self.spawn_dependent_refresh(account.id);

        Ok(account)
    }

    /// Logs out, clearing the persisted record and invalidating every
    /// account-scoped collection.
    pub async fn logout(&self) {
        let previous = self.session.replace(Session::Anonymous).await;

        if let Err(e) = self.cache.remove(&session_account_key()).await {
            warn!(error = %e, "failed to clear persisted session record");
        }

        if let Some(account) = previous.account() {
            let key = scheduled_events_key(account.id);
            if let Err(e) = self.collections.events.invalidate(&key).await {
                warn!(error = %e, "failed to invalidate scheduled events");
            }
            info!(account_id = %account.id, "logged out");
        }
    }

    /// Registers a new account.
    ///
    /// Does not authenticate; the account only becomes available for a
    /// subsequent login. On success the account listing is refreshed.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<()> {
        validation::validate_registration(username, email, password)?;

        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.remote.register(&request).await?;
        info!(username, "account registered");
        self.spawn_accounts_refresh();

        Ok(())
    }

    /// Refreshes the account listing. Not gated on authentication.
    pub async fn refresh_accounts(&self) -> std::result::Result<LoadOutcome, RemoteError> {
        let remote = self.remote.clone();
        self.collections
            .accounts
            .load(&accounts_key(), move || async move {
                remote.list_accounts().await
            })
            .await
    }

    /// Refreshes the hobby catalog. Requires an authenticated session.
    pub async fn refresh_catalog(&self) -> Result<LoadOutcome> {
        self.require_account().await?;
        let remote = self.remote.clone();
        let outcome = self
            .collections
            .catalog
            .load(&catalog_key(), move || async move {
                remote.list_hobbies().await
            })
            .await?;
        Ok(outcome)
    }

    /// Refreshes the current account's scheduled events. Requires an
    /// authenticated session.
    pub async fn refresh_events(&self) -> Result<LoadOutcome> {
        let account = self.require_account().await?;
        let remote = self.remote.clone();
        let outcome = self
            .collections
            .events
            .load(&scheduled_events_key(account.id), move || async move {
                remote.list_scheduled_events(account.id).await
            })
            .await?;
        Ok(outcome)
    }

    async fn require_account(&self) -> Result<Account> {
        self.current_account()
            .await
            .ok_or(SessionError::NotAuthenticated)
    }

    /// Persists the current-account record; storage failures degrade to a
    /// warning so they never fail the transition itself.
    async fn persist_account(&self, account: &Account) {
        let bytes = match serde_json::to_vec(account) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "failed to serialize session record");
                return;
            }
        };
        if let Err(e) = self.cache.set(&session_account_key(), &bytes).await {
            warn!(error = %e, "failed to persist session record");
        }
    }

    /// Initiates catalog and scheduled-events refresh without blocking the
    /// transition that triggered it.
    fn spawn_dependent_refresh(&self, account_id: Uuid) {
        let lifecycle = self.clone();
        tokio::spawn(async move {
            lifecycle.refresh_dependents(account_id).await;
        });
    }

    /// Refreshes the account-dependent collections, skipping the work
    /// entirely if `account_id` is no longer the authenticated account by
    /// the time this runs. A mid-flight logout is caught by the store's own
    /// invalidation guard.
    async fn refresh_dependents(&self, account_id: Uuid) {
        if !self.session.is_current(account_id).await {
            debug!(%account_id, "skipping refresh for a superseded account");
            return;
        }
        if let Err(e) = self.refresh_catalog().await {
            warn!(error = %e, "catalog refresh failed");
        }
        if let Err(e) = self.refresh_events().await {
            warn!(error = %e, "scheduled events refresh failed");
        }
    }

    /// Initiates an account-listing refresh without blocking.
    fn spawn_accounts_refresh(&self) {
        let lifecycle = self.clone();
        tokio::spawn(async move {
            if let Err(e) = lifecycle.refresh_accounts().await {
                warn!(error = %e, "account listing refresh failed");
            }
        });
    }
}
