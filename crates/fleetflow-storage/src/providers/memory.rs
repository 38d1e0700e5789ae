//! In-memory key-value provider.

use async_trait::async_trait;
use dashmap::DashMap;

use fleetflow_core::result::AppResult;
use fleetflow_core::traits::KeyValueStore;

/// In-memory key-value store.
///
/// Values do not survive a process restart; this provider backs tests and
/// storage-less runs where persistence is unavailable.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    /// Key → value.
    values: DashMap<String, String>,
}

impl MemoryKeyValueStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("FF_USERS").await.unwrap(), None);
        store.set("FF_USERS", "[]").await.unwrap();
        assert_eq!(store.get("FF_USERS").await.unwrap().as_deref(), Some("[]"));
        store.remove("FF_USERS").await.unwrap();
        assert_eq!(store.get("FF_USERS").await.unwrap(), None);
    }
}
