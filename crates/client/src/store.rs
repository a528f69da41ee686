//! File-backed key-value cache.
//!
//! Persists all entries in a single JSON file so snapshots and the session
//! record survive across CLI invocations. Every write saves the whole map;
//! the entry values are the JSON snapshot text the core produces.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use hobbysync_core::cache::{CacheError, KeyValueCache, Result};

/// Key-value cache persisted in one JSON file.
#[derive(Debug)]
pub struct JsonFileCache {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileCache {
    /// Opens the cache at `path`, loading any existing entries.
    ///
    /// A missing or unreadable file degrades to an empty cache; the file is
    /// created on the first write.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring corrupt cache file");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read cache file");
                HashMap::new()
            }
        };
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// The file backing this cache.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn save(&self, entries: &HashMap<String, String>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| CacheError::OperationFailed(e.to_string()))?;
            }
        }
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| CacheError::OperationFailed(e.to_string()))
    }
}

#[async_trait]
impl KeyValueCache for JsonFileCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).map(|value| value.as_bytes().to_vec()))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let value = String::from_utf8(value.to_vec())
            .map_err(|e| CacheError::Serialization(e.to_string()))?;
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        self.save(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(&entries).await
    }
}
