//! Trip entity model and lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a trip.
///
/// The forward lifecycle is
/// `Scheduled → Dispatched → InTransit → Delivered`; `Cancelled` and
/// `Delayed` sit outside it. A trip in any of the first three states is
/// "active" and holds its vehicle and driver locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    /// Created, not yet dispatched.
    Scheduled,
    /// Handed to the driver.
    Dispatched,
    /// On the road.
    InTransit,
    /// Arrived and signed off. Terminal.
    Delivered,
    /// Called off before delivery. Terminal.
    Cancelled,
    /// Flagged as running late.
    Delayed,
}

impl TripStatus {
    /// The forward lifecycle, in order.
    pub const LIFECYCLE: [TripStatus; 4] = [
        TripStatus::Scheduled,
        TripStatus::Dispatched,
        TripStatus::InTransit,
        TripStatus::Delivered,
    ];

    /// The next lifecycle state, or `None` when this state has no forward
    /// edge (terminal states and `Delayed`).
    pub fn next(&self) -> Option<TripStatus> {
        let idx = Self::LIFECYCLE.iter().position(|s| s == self)?;
        Self::LIFECYCLE.get(idx + 1).copied()
    }

    /// Whether a trip in this state holds its vehicle and driver locked.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Scheduled | Self::Dispatched | Self::InTransit)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Dispatched => "dispatched",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Delayed => "delayed",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dispatch priority of a trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripPriority {
    /// Regular delivery window.
    #[default]
    Normal,
    /// Expedited.
    High,
    /// Drop everything.
    Urgent,
}

impl TripPriority {
    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for TripPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cargo trip between two cities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Human-readable trip code (`TRP-001`, ...), unique per board.
    pub code: String,
    /// The booked vehicle.
    pub vehicle_id: u32,
    /// The booked driver.
    pub driver_id: u32,
    /// Origin city.
    pub origin_city: String,
    /// Destination city.
    pub destination_city: String,
    /// Route distance in kilometers.
    pub distance_km: f64,
    /// Cargo weight in kilograms.
    pub cargo_weight_kg: f64,
    /// Cargo description, if given.
    pub cargo_type: Option<String>,
    /// Free-text handling instructions.
    pub special_instructions: Option<String>,
    /// Lifecycle state.
    pub status: TripStatus,
    /// Dispatch priority.
    pub priority: TripPriority,
    /// When the trip is scheduled to depart.
    pub scheduled_at: DateTime<Utc>,
    /// When the trip entered `Dispatched`.
    pub dispatched_at: Option<DateTime<Utc>>,
    /// When the trip entered `InTransit`.
    pub arrived_at: Option<DateTime<Utc>>,
    /// When the trip entered `Delivered`.
    pub delivered_at: Option<DateTime<Utc>>,
    /// Estimated fuel volume for the route, in litres.
    pub fuel_litres: f64,
    /// Estimated fuel cost for the route.
    pub estimated_fuel_cost: f64,
    /// When the trip was created.
    pub created_at: DateTime<Utc>,
}
