//! Account entity model.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// A registered account in the FleetFlow demo roster.
///
/// The serde field names match the persisted roster records, so a roster
/// written by an earlier run (or by the original dashboard) deserializes
/// unchanged.
///
/// Passwords are stored and compared in plaintext. That is the documented
/// contract of this demo system, not an oversight; the comparison itself
/// is isolated behind a single function so a hashing scheme could replace
/// it without touching callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Login name. Unique for seeded accounts; self-registered accounts
    /// derive it from the email local part without a uniqueness check
    /// (a documented relaxed invariant).
    pub username: String,
    /// Email address. Unique across the roster at all times.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Human-readable display name.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Dashboard role.
    pub role: Role,
}

impl Account {
    /// First word of the display name, used in greeting messages.
    pub fn first_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.display_name)
    }
}

/// Data required to register a new account.
///
/// The username is not supplied: the store derives it deterministically
/// from the email local part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Display name.
    pub display_name: String,
    /// Email address; must not already be registered.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Chosen role.
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_record_field_names() {
        let account = Account {
            username: "admin".into(),
            email: "manager@fleetflow.io".into(),
            password: "Fleet@2024".into(),
            display_name: "Alex Manager".into(),
            role: Role::Manager,
        };
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["name"], "Alex Manager");
        assert_eq!(json["role"], "manager");
        assert!(json.get("display_name").is_none());
    }

    #[test]
    fn test_first_name() {
        let account = Account {
            username: "dispatch".into(),
            email: "dispatcher@fleetflow.io".into(),
            password: "Fleet@2024".into(),
            display_name: "Dana Dispatch".into(),
            role: Role::Dispatcher,
        };
        assert_eq!(account.first_name(), "Dana");
    }
}
