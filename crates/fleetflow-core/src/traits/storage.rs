//! Key-value storage trait for pluggable persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for string key-value storage backends.
///
/// FleetFlow persists exactly two values: the serialized account roster
/// and the remembered login identity. The [`KeyValueStore`] trait is
/// defined here in `fleetflow-core` and implemented in `fleetflow-storage`.
///
/// Persistence is best-effort throughout: callers log and recover from
/// storage errors rather than surfacing them to the user.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "memory").
    fn provider_type(&self) -> &str;

    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    async fn remove(&self, key: &str) -> AppResult<()>;
}
