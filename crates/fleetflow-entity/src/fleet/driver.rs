//! Driver entity model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability status of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    /// Off a trip and bookable.
    Available,
    /// Locked to an active trip.
    OnTrip,
}

impl DriverStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::OnTrip => "on_trip",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A driver on the fleet roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Registry identifier.
    pub id: u32,
    /// Full display name.
    pub full_name: String,
    /// Current availability.
    pub status: DriverStatus,
    /// Lifetime count of delivered trips.
    pub total_trips: u32,
}
