//! Persisted key-value storage configuration.

use serde::{Deserialize, Serialize};

/// Key-value storage configuration.
///
/// The two keys are the well-known storage slots the dashboard persists:
/// the serialized account roster and the single remembered identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for the local key-value provider.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Storage key holding the serialized account roster.
    #[serde(default = "default_users_key")]
    pub users_key: String,
    /// Storage key holding the remembered login identity.
    #[serde(default = "default_remember_key")]
    pub remember_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            users_key: default_users_key(),
            remember_key: default_remember_key(),
        }
    }
}

fn default_data_dir() -> String {
    "data/fleetflow".to_string()
}

fn default_users_key() -> String {
    "FF_USERS".to_string()
}

fn default_remember_key() -> String {
    "FF_REMEMBER".to_string()
}
