//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the dashboard RBAC system.
///
/// The enum is closed: Manager is the superuser with access to the full
/// module catalog, Dispatcher and Safety see strictly smaller subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fleet manager; full access to every module.
    Manager,
    /// Dispatcher; operations-facing modules only.
    Dispatcher,
    /// Safety officer; driver and compliance modules only.
    Safety,
}

impl Role {
    /// All roles, in seed roster order.
    pub const ALL: [Role; 3] = [Role::Manager, Role::Dispatcher, Role::Safety];

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Dispatcher => "dispatcher",
            Self::Safety => "safety",
        }
    }

    /// Return the human-readable role label shown in the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Dispatcher => "Dispatcher",
            Self::Safety => "Safety Officer",
        }
    }

    /// Check if this role is the superuser.
    pub fn is_manager(&self) -> bool {
        matches!(self, Self::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = fleetflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manager" => Ok(Self::Manager),
            "dispatcher" => Ok(Self::Dispatcher),
            "safety" => Ok(Self::Safety),
            _ => Err(fleetflow_core::AppError::unknown_role(format!(
                "Invalid role: '{s}'. Expected one of: manager, dispatcher, safety"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetflow_core::error::ErrorKind;

    #[test]
    fn test_from_str() {
        assert_eq!("manager".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!("SAFETY".parse::<Role>().unwrap(), Role::Safety);
        let err = "superadmin".parse::<Role>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownRole);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Role::Safety.label(), "Safety Officer");
        assert_eq!(Role::Dispatcher.to_string(), "dispatcher");
    }
}
