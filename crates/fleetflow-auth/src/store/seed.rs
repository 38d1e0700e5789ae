//! Built-in demo accounts.

use fleetflow_entity::user::{Account, Role};

/// The three built-in demo accounts, one per role, in quick-login order.
///
/// The roster starts from these on every launch; a persisted roster, when
/// present and well-formed, replaces them wholesale (it always contains
/// them again, since registration persists the full roster).
pub fn seed_roster() -> Vec<Account> {
    vec![
        Account {
            username: "admin".to_string(),
            email: "manager@fleetflow.io".to_string(),
            password: "Fleet@2024".to_string(),
            display_name: "Alex Manager".to_string(),
            role: Role::Manager,
        },
        Account {
            username: "dispatch".to_string(),
            email: "dispatcher@fleetflow.io".to_string(),
            password: "Fleet@2024".to_string(),
            display_name: "Dana Dispatch".to_string(),
            role: Role::Dispatcher,
        },
        Account {
            username: "safety".to_string(),
            email: "safety@fleetflow.io".to_string(),
            password: "Fleet@2024".to_string(),
            display_name: "Sam Safety".to_string(),
            role: Role::Safety,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_account_per_role() {
        let roster = seed_roster();
        assert_eq!(roster.len(), 3);
        for role in Role::ALL {
            assert_eq!(roster.iter().filter(|a| a.role == role).count(), 1);
        }
    }

    #[test]
    fn test_unique_identifiers() {
        let roster = seed_roster();
        for (i, a) in roster.iter().enumerate() {
            for b in &roster[i + 1..] {
                assert_ne!(a.username, b.username);
                assert_ne!(a.email, b.email);
            }
        }
    }
}
