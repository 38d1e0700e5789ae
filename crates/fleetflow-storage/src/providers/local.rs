//! Local filesystem key-value provider.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use fleetflow_core::error::{AppError, ErrorKind};
use fleetflow_core::result::AppResult;
use fleetflow_core::traits::KeyValueStore;

/// Local filesystem key-value store.
///
/// Each key is stored as a UTF-8 file named after the key under the root
/// directory. Keys are restricted to simple names (no path separators) so
/// a key can never escape the root.
#[derive(Debug, Clone)]
pub struct LocalKeyValueStore {
    /// Root directory for all stored values.
    root: PathBuf,
}

impl LocalKeyValueStore {
    /// Create a new local store rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a key to its backing file path.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(AppError::storage(format!("Invalid storage key: '{key}'")));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl KeyValueStore for LocalKeyValueStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.resolve(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read key '{key}'"),
                e,
            )),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        fs::write(&path, value).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write key '{key}'"),
                e,
            )
        })?;
        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to remove key '{key}'"),
                e,
            )),
        }
    }
}
