use async_trait::async_trait;

use super::Result;

/// Trait for keyed blob storage that persists across process restarts.
///
/// Writes are atomic per key; there are no partial-write semantics.
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Removes a value from the cache by key.
    async fn remove(&self, key: &str) -> Result<()>;
}
