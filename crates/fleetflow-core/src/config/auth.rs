//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and registration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum password length for new registrations.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Minimum display name length for new registrations.
    #[serde(default = "default_display_name_min")]
    pub display_name_min_length: usize,
    /// Artificial login pacing delay in milliseconds.
    ///
    /// Purely for UX pacing; not a real I/O boundary. The delay always
    /// runs to completion (no cancellation).
    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,
    /// Artificial registration pacing delay in milliseconds.
    #[serde(default = "default_register_delay")]
    pub register_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min(),
            display_name_min_length: default_display_name_min(),
            login_delay_ms: default_login_delay(),
            register_delay_ms: default_register_delay(),
        }
    }
}

fn default_password_min() -> usize {
    8
}

fn default_display_name_min() -> usize {
    2
}

fn default_login_delay() -> u64 {
    1200
}

fn default_register_delay() -> u64 {
    1500
}
