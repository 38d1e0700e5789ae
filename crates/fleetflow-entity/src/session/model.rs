//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::Account;

/// The authenticated identity for the running client instance.
///
/// At most one session is active at a time (single-user client). Sessions
/// are created on login, registration, quick login, or auto-login, and
/// destroyed on logout. Destroying a session never touches the remembered
/// identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The signed-in account.
    pub account: Account,
    /// Whether this session was established from a remembered identity,
    /// or asked to be remembered at login.
    pub remembered: bool,
    /// When the session was established.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Establish a new session for the given account.
    pub fn establish(account: Account, remembered: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            account,
            remembered,
            created_at: Utc::now(),
        }
    }
}
