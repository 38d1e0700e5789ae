//! Password policy enforcement for new passwords.

use fleetflow_core::config::auth::AuthConfig;
use fleetflow_core::error::AppError;

/// Validates new passwords against the configured policy.
///
/// The only blocking rule is the length floor; composition feeds the
/// informational strength meter instead.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a new policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password, reporting the `password` field on failure.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation_field(
                "password",
                format!("Password must be at least {} characters", self.min_length),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_floor() {
        let policy = PasswordPolicy::new(&AuthConfig::default());
        assert!(policy.validate("Fleet@2024").is_ok());
        let err = policy.validate("Fleet@1").unwrap_err();
        assert_eq!(err.field(), Some("password"));
    }
}
