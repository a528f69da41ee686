use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::warn;

use crate::remote::RemoteError;

use super::traits::KeyValueCache;

/// What a `load` call did with the remote result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The remote result differed from the snapshot and was published and
    /// written back.
    Refreshed,
    /// The remote result matched the snapshot byte for byte; nothing was
    /// published or written.
    Unchanged,
    /// The store was invalidated while the fetch was in flight; the stale
    /// result was discarded.
    Discarded,
}

/// Stale-while-revalidate view over one named collection.
///
/// `load` seeds the in-memory projection from the persisted snapshot, then
/// reconciles with the remote source, publishing and writing back only when
/// the serialized result actually changed. Readers always observe either the
/// cache-seeded value or the refreshed value, never a mix.
pub struct CacheAsideStore<T> {
    cache: Arc<dyn KeyValueCache>,
    projection: RwLock<Arc<Vec<T>>>,
    epoch: AtomicU64,
}

impl<T> CacheAsideStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Creates an empty store over the given persisted cache.
    pub fn new(cache: Arc<dyn KeyValueCache>) -> Self {
        Self {
            cache,
            projection: RwLock::new(Arc::new(Vec::new())),
            epoch: AtomicU64::new(0),
        }
    }

    /// Returns the current projection.
    ///
    /// The returned vector is the value published by the most recent seed,
    /// refresh, or invalidation; the swap is atomic from the reader's point
    /// of view.
    pub async fn current(&self) -> Arc<Vec<T>> {
        self.projection.read().await.clone()
    }

    /// Loads the collection: seed from the persisted snapshot under `key`,
    /// then fetch fresh data and reconcile.
    ///
    /// Cache-layer failures degrade (logged, treated as a missing snapshot
    /// or a skipped write-back) and never mask the remote result. A remote
    /// failure leaves the previously published value authoritative.
    pub async fn load<F, Fut>(&self, key: &str, fetch: F) -> Result<LoadOutcome, RemoteError>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<Vec<T>, RemoteError>> + Send,
    {
        let epoch = self.epoch.load(Ordering::SeqCst);

        let snapshot = match self.cache.get(key).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(key, error = %e, "cache read failed, treating snapshot as absent");
                None
            }
        };

        if let Some(bytes) = &snapshot {
            match serde_json::from_slice::<Vec<T>>(bytes) {
                Ok(items) => {
                    self.publish(epoch, items).await;
                }
                Err(e) => {
                    warn!(key, error = %e, "ignoring unparseable cache snapshot");
                }
            }
        }

        let fresh = fetch().await?;

        let fresh_bytes = match serde_json::to_vec(&fresh) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(key, error = %e, "failed to serialize remote result; skipping write-back");
                None
            }
        };

        if let (Some(snapshot), Some(fresh_bytes)) = (&snapshot, &fresh_bytes) {
            if snapshot == fresh_bytes {
                return Ok(LoadOutcome::Unchanged);
            }
        }

        if !self.publish(epoch, fresh).await {
            return Ok(LoadOutcome::Discarded);
        }

        if let Some(bytes) = fresh_bytes {
            if let Err(e) = self.cache.set(key, &bytes).await {
                warn!(key, error = %e, "failed to persist refreshed snapshot");
            }
        }

        Ok(LoadOutcome::Refreshed)
    }

    /// Removes the persisted snapshot under `key` and clears the projection.
    ///
    /// Any in-flight `load` observes the epoch bump and discards its result
    /// instead of publishing stale data.
    pub async fn invalidate(&self, key: &str) -> super::Result<()> {
        {
            let mut projection = self.projection.write().await;
            self.epoch.fetch_add(1, Ordering::SeqCst);
            *projection = Arc::new(Vec::new());
        }
        self.cache.remove(key).await
    }

    /// Publishes `items` unless the store was invalidated since `epoch` was
    /// captured. The epoch is re-checked under the write lock so an
    /// invalidation cannot interleave with the swap.
    async fn publish(&self, epoch: u64, items: Vec<T>) -> bool {
        let mut projection = self.projection.write().await;
        if self.epoch.load(Ordering::SeqCst) != epoch {
            return false;
        }
        *projection = Arc::new(items);
        true
    }
}
