//! Maintenance service log entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workshop status of a service log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// Logged, work not started.
    New,
    /// Work under way.
    InProgress,
    /// Work finished.
    Completed,
}

impl ServiceStatus {
    /// The status label shown in the service table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A maintenance or service record for a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLog {
    /// Log number, assigned from a monotonically increasing counter.
    pub id: u32,
    /// Name of the serviced vehicle.
    pub vehicle: String,
    /// The issue or service performed.
    pub issue: String,
    /// Service date.
    pub date: NaiveDate,
    /// Cost, if known.
    pub cost: Option<u32>,
    /// Workshop status.
    pub status: ServiceStatus,
}

/// Input for logging a new service record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewServiceLog {
    /// Name of the serviced vehicle. Required.
    pub vehicle: String,
    /// The issue or service performed. Required.
    pub issue: String,
    /// Service date. Required.
    pub date: Option<NaiveDate>,
    /// Cost, if known.
    pub cost: Option<u32>,
    /// Workshop status.
    pub status: ServiceStatus,
}
