//! Vehicle entity model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational status of a vehicle.
///
/// `OnTrip` is set when a trip is created against the vehicle and cleared
/// when the trip is delivered or cancelled. A vehicle in `Maintenance`
/// cannot be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// Idle and bookable.
    Available,
    /// Locked to an active trip.
    OnTrip,
    /// In the workshop; not bookable.
    Maintenance,
}

impl VehicleStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::OnTrip => "on_trip",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fleet vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Registry identifier.
    pub id: u32,
    /// License plate.
    pub plate: String,
    /// Make and model.
    pub model: String,
    /// Body type shown in the fleet table (Truck, Van, ...).
    pub vehicle_type: String,
    /// Maximum cargo weight in kilograms.
    pub capacity_kg: f64,
    /// Odometer reading in kilometers.
    pub odometer_km: u64,
    /// Current operational status.
    pub status: VehicleStatus,
}

/// Input for adding a vehicle to the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVehicle {
    /// License plate. Required.
    pub plate: String,
    /// Make and model. Required.
    pub model: String,
    /// Body type. Required.
    pub vehicle_type: String,
    /// Maximum cargo weight in kilograms.
    pub capacity_kg: f64,
    /// Odometer reading in kilometers.
    pub odometer_km: u64,
}
