//! Registration form validation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fleetflow_core::config::auth::AuthConfig;
use fleetflow_core::error::AppError;
use fleetflow_entity::user::{NewAccount, Role};

use crate::password::PasswordPolicy;
use crate::store::UserStore;

/// A registration form submission, as the presentation layer collects it.
///
/// The role arrives as a string because it comes from a form control; it
/// is parsed into the closed enum during validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Display name.
    pub display_name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
    /// Chosen role name.
    pub role: String,
}

/// Every field-level problem found in a registration request.
///
/// Checks run independently so a single submission reports all failing
/// fields at once, matching the per-field form validators.
#[derive(Debug, Error)]
#[error("Registration validation failed: {}", self.fields().join(", "))]
pub struct RegistrationIssues(Vec<AppError>);

impl RegistrationIssues {
    /// The individual field errors.
    pub fn issues(&self) -> &[AppError] {
        &self.0
    }

    /// Names of the failing fields, in form order.
    pub fn fields(&self) -> Vec<String> {
        self.0
            .iter()
            .filter_map(|e| e.field().map(str::to_string))
            .collect()
    }
}

impl From<RegistrationIssues> for AppError {
    fn from(mut issues: RegistrationIssues) -> Self {
        // A single issue keeps its own kind (DuplicateEmail in particular);
        // multiple issues aggregate under Validation, carrying every
        // failing field name.
        if issues.0.len() == 1 {
            return issues.0.remove(0);
        }
        let mut err = AppError::validation(issues.to_string());
        err.fields = issues.fields();
        err
    }
}

/// Validate a registration request against the configured rules.
///
/// All checks must independently pass: display-name length, email shape
/// and uniqueness, password length floor, confirmation match, and a role
/// from the closed enum. On success the request is lowered into the
/// [`NewAccount`] the store accepts.
pub fn validate_registration(
    request: &RegistrationRequest,
    users: &UserStore,
    config: &AuthConfig,
) -> Result<NewAccount, RegistrationIssues> {
    let mut issues = Vec::new();

    let display_name = request.display_name.trim();
    if display_name.chars().count() < config.display_name_min_length {
        issues.push(AppError::validation_field(
            "display_name",
            format!(
                "Name must be at least {} characters",
                config.display_name_min_length
            ),
        ));
    }

    let email = request.email.trim();
    if !is_email_shaped(email) {
        issues.push(AppError::validation_field(
            "email",
            "Enter a valid email address",
        ));
    } else if users.email_registered(email) {
        issues.push(AppError::duplicate_email("This email is already registered").with_field("email"));
    }

    if let Err(e) = PasswordPolicy::new(config).validate(&request.password) {
        issues.push(e);
    }

    if request.confirm_password.is_empty() || request.confirm_password != request.password {
        issues.push(AppError::validation_field(
            "confirm_password",
            "Passwords do not match",
        ));
    }

    let role = if request.role.trim().is_empty() {
        issues.push(AppError::validation_field("role", "Select a role"));
        None
    } else {
        match Role::from_str(request.role.trim()) {
            Ok(role) => Some(role),
            Err(_) => {
                issues.push(AppError::validation_field(
                    "role",
                    format!("Unknown role: '{}'", request.role.trim()),
                ));
                None
            }
        }
    };

    if !issues.is_empty() {
        return Err(RegistrationIssues(issues));
    }

    Ok(NewAccount {
        display_name: display_name.to_string(),
        email: email.to_string(),
        password: request.password.clone(),
        role: role.expect("role parse failure recorded as an issue"),
    })
}

/// Whether the string is email-shaped: a non-empty local part, a single
/// `@`, no whitespace, and a domain with an interior dot.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let bytes = domain.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && i + 1 < bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetflow_core::config::storage::StorageConfig;
    use fleetflow_core::error::ErrorKind;
    use fleetflow_storage::MemoryKeyValueStore;
    use std::sync::Arc;

    fn users() -> UserStore {
        UserStore::new(
            Arc::new(MemoryKeyValueStore::new()),
            &StorageConfig::default(),
        )
    }

    fn valid_request() -> RegistrationRequest {
        RegistrationRequest {
            display_name: "Riley Ops".to_string(),
            email: "riley@depot.example".to_string(),
            password: "Depot#2024".to_string(),
            confirm_password: "Depot#2024".to_string(),
            role: "dispatcher".to_string(),
        }
    }

    #[test]
    fn test_valid_request_lowers_to_new_account() {
        let account =
            validate_registration(&valid_request(), &users(), &AuthConfig::default()).unwrap();
        assert_eq!(account.role, Role::Dispatcher);
        assert_eq!(account.email, "riley@depot.example");
    }

    #[test]
    fn test_all_failing_fields_reported() {
        let request = RegistrationRequest {
            display_name: "R".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            confirm_password: "different".to_string(),
            role: "".to_string(),
        };
        let issues =
            validate_registration(&request, &users(), &AuthConfig::default()).unwrap_err();
        assert_eq!(
            issues.fields(),
            vec!["display_name", "email", "password", "confirm_password", "role"]
        );
    }

    #[test]
    fn test_duplicate_email_keeps_its_kind() {
        let mut request = valid_request();
        request.email = "dispatcher@fleetflow.io".to_string();
        let issues =
            validate_registration(&request, &users(), &AuthConfig::default()).unwrap_err();
        let err = AppError::from(issues);
        assert_eq!(err.kind, ErrorKind::DuplicateEmail);
        assert_eq!(err.field(), Some("email"));
    }

    #[test]
    fn test_aggregated_error_carries_every_failing_field() {
        let request = RegistrationRequest {
            display_name: "R".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            confirm_password: "different".to_string(),
            role: "".to_string(),
        };
        let issues =
            validate_registration(&request, &users(), &AuthConfig::default()).unwrap_err();
        let err = AppError::from(issues);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(
            err.fields,
            vec!["display_name", "email", "password", "confirm_password", "role"]
        );
    }

    #[test]
    fn test_empty_confirmation_fails_even_when_equal() {
        let mut request = valid_request();
        request.password = "".to_string();
        request.confirm_password = "".to_string();
        let issues =
            validate_registration(&request, &users(), &AuthConfig::default()).unwrap_err();
        assert!(issues.fields().contains(&"confirm_password".to_string()));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_email_shaped("a@b.co"));
        assert!(is_email_shaped("first.last@fleet.example.io"));
        assert!(!is_email_shaped("a@b"));
        assert!(!is_email_shaped("@b.co"));
        assert!(!is_email_shaped("a@b.co "));
        assert!(!is_email_shaped("a b@c.io"));
        assert!(!is_email_shaped("a@b@c.io"));
        assert!(!is_email_shaped("a@.co"));
        assert!(!is_email_shaped("a@bco."));
    }
}
