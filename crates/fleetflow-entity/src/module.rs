//! Dashboard module catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named dashboard section gated by role.
///
/// The catalog is closed; adding a module means adding a variant here and
/// extending every role's access config, which the compiler enforces
/// through the exhaustive matches in the access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    /// Fleet overview dashboard.
    Overview,
    /// Vehicle table.
    Vehicles,
    /// Driver table.
    Drivers,
    /// Route planning.
    Routes,
    /// Live dispatch board.
    Dispatch,
    /// Maintenance logs.
    Maintenance,
    /// Compliance dashboard.
    Compliance,
    /// Analytics reports.
    Reports,
    /// System settings.
    Settings,
    /// User management.
    Users,
}

impl Module {
    /// The full module catalog, in sidebar order.
    pub const CATALOG: [Module; 10] = [
        Module::Overview,
        Module::Vehicles,
        Module::Drivers,
        Module::Routes,
        Module::Dispatch,
        Module::Maintenance,
        Module::Compliance,
        Module::Reports,
        Module::Settings,
        Module::Users,
    ];

    /// Return the module id as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Vehicles => "vehicles",
            Self::Drivers => "drivers",
            Self::Routes => "routes",
            Self::Dispatch => "dispatch",
            Self::Maintenance => "maintenance",
            Self::Compliance => "compliance",
            Self::Reports => "reports",
            Self::Settings => "settings",
            Self::Users => "users",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Module {
    type Err = fleetflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CATALOG
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                fleetflow_core::AppError::not_found(format!("Unknown dashboard module: '{s}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_round_trip() {
        for module in Module::CATALOG {
            assert_eq!(module.as_str().parse::<Module>().unwrap(), module);
        }
        assert!("billing".parse::<Module>().is_err());
    }
}
