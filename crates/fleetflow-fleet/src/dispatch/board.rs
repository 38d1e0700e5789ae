//! The trip dispatch board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use fleetflow_core::config::fleet::FleetConfig;
use fleetflow_core::error::AppError;
use fleetflow_core::result::AppResult;
use fleetflow_entity::fleet::{
    DriverStatus, Trip, TripPriority, TripStatus, VehicleStatus,
};

use crate::dispatch::fuel::FuelEstimator;
use crate::registry::FleetRegistry;

/// A trip booking request from the dispatch form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// The vehicle to book.
    pub vehicle_id: u32,
    /// The driver to book.
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
    /// Dispatch priority.
    pub priority: TripPriority,
    /// Scheduled departure. Must be in the future at booking time.
    pub scheduled_at: DateTime<Utc>,
}

/// Optional filters for listing trips.
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    /// Keep only trips in this lifecycle state.
    pub status: Option<TripStatus>,
    /// Keep only trips at this priority.
    pub priority: Option<TripPriority>,
    /// Case-insensitive substring over trip code, origin, and destination.
    pub search: Option<String>,
}

/// Owns every trip and enforces the booking invariants.
///
/// A vehicle or driver is held by at most one active trip
/// (`Scheduled`/`Dispatched`/`InTransit`) at a time: booking locks both
/// resources in the registry, and delivery or cancellation frees them.
/// Trips are never deleted, so cancelled and delivered trips stay on the
/// board for the history view.
#[derive(Debug)]
pub struct TripBoard {
    trips: Vec<Trip>,
    estimator: FuelEstimator,
}

impl TripBoard {
    /// Create an empty board costing trips with the given configuration.
    pub fn new(config: &FleetConfig) -> Self {
        Self {
            trips: Vec::new(),
            estimator: FuelEstimator::new(config),
        }
    }

    /// All trips, newest first.
    pub fn trips(&self) -> Vec<&Trip> {
        self.trips.iter().rev().collect()
    }

    /// Look up a trip by code.
    pub fn trip(&self, code: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.code == code)
    }

    /// Trips matching the filter, newest first.
    pub fn filter(&self, filter: &TripFilter) -> Vec<&Trip> {
        let query = filter.search.as_deref().map(str::to_lowercase);
        self.trips
            .iter()
            .rev()
            .filter(|t| filter.status.is_none_or(|s| t.status == s))
            .filter(|t| filter.priority.is_none_or(|p| t.priority == p))
            .filter(|t| {
                query.as_deref().is_none_or(|q| {
                    t.code.to_lowercase().contains(q)
                        || t.origin_city.to_lowercase().contains(q)
                        || t.destination_city.to_lowercase().contains(q)
                })
            })
            .collect()
    }

    /// Book a trip.
    ///
    /// Validates the vehicle (exists, available, capacity fits the cargo),
    /// the driver (exists, available), that neither is already held by an
    /// active trip, that origin and destination differ, and that the
    /// scheduled departure is in the future. On success the trip enters
    /// `Scheduled`, the fuel estimate is attached, and both resources are
    /// locked `OnTrip`.
    pub fn create(&mut self, fleet: &mut FleetRegistry, request: TripRequest) -> AppResult<Trip> {
        let vehicle = fleet
            .vehicle(request.vehicle_id)
            .ok_or_else(|| {
                AppError::not_found(format!("Vehicle not found: {}", request.vehicle_id))
            })?
            .clone();

        if vehicle.status != VehicleStatus::Available {
            return Err(AppError::conflict(format!(
                "Vehicle {} is not available (status: {})",
                vehicle.plate, vehicle.status
            )));
        }

        if request.cargo_weight_kg > vehicle.capacity_kg {
            return Err(AppError::conflict(format!(
                "Vehicle capacity exceeded: cargo {:.0} kg > capacity {:.0} kg",
                request.cargo_weight_kg, vehicle.capacity_kg
            )));
        }

        let driver = fleet
            .driver(request.driver_id)
            .ok_or_else(|| AppError::not_found(format!("Driver not found: {}", request.driver_id)))?
            .clone();

        if driver.status != DriverStatus::Available {
            return Err(AppError::conflict(format!(
                "Driver {} is not available (status: {})",
                driver.full_name, driver.status
            )));
        }

        // Double-booking guard behind the status checks: a stale Available
        // status must not allow a second active trip for the same resource.
        if self.holds_active_trip(|t| t.driver_id == driver.id) {
            return Err(AppError::conflict(format!(
                "Driver {} is already assigned to an active trip",
                driver.full_name
            )));
        }
        if self.holds_active_trip(|t| t.vehicle_id == vehicle.id) {
            return Err(AppError::conflict(format!(
                "Vehicle {} is already assigned to an active trip",
                vehicle.plate
            )));
        }

        if request
            .origin_city
            .trim()
            .eq_ignore_ascii_case(request.destination_city.trim())
        {
            return Err(AppError::validation(
                "Origin and destination cities must be different",
            ));
        }

        if request.scheduled_at <= Utc::now() {
            return Err(AppError::validation("Scheduled date must be in the future"));
        }

        let estimate = self
            .estimator
            .estimate(request.distance_km, request.cargo_weight_kg);

        let trip = Trip {
            code: format!("TRP-{:03}", self.trips.len() + 1),
            vehicle_id: vehicle.id,
            driver_id: driver.id,
            origin_city: request.origin_city.trim().to_string(),
            destination_city: request.destination_city.trim().to_string(),
            distance_km: request.distance_km,
            cargo_weight_kg: request.cargo_weight_kg,
            cargo_type: request.cargo_type,
            special_instructions: request.special_instructions,
            status: TripStatus::Scheduled,
            priority: request.priority,
            scheduled_at: request.scheduled_at,
            dispatched_at: None,
            arrived_at: None,
            delivered_at: None,
            fuel_litres: estimate.litres,
            estimated_fuel_cost: estimate.cost,
            created_at: Utc::now(),
        };

        fleet.set_vehicle_status(vehicle.id, VehicleStatus::OnTrip);
        fleet.set_driver_status(driver.id, DriverStatus::OnTrip);

        info!(
            code = %trip.code,
            origin = %trip.origin_city,
            destination = %trip.destination_city,
            "Trip created"
        );
        self.trips.push(trip.clone());
        Ok(trip)
    }

    /// Advance a trip one step along the lifecycle, stamping the state's
    /// timestamp. Delivery frees the vehicle and driver and credits the
    /// driver's trip count.
    pub fn advance(&mut self, fleet: &mut FleetRegistry, code: &str) -> AppResult<Trip> {
        let trip = self
            .trips
            .iter_mut()
            .find(|t| t.code == code)
            .ok_or_else(|| AppError::not_found(format!("Trip not found: {code}")))?;

        let next = trip.status.next().ok_or_else(|| {
            AppError::conflict(format!("Trip is already in final state: {}", trip.status))
        })?;

        let now = Utc::now();
        trip.status = next;
        match next {
            TripStatus::Dispatched => trip.dispatched_at = Some(now),
            TripStatus::InTransit => trip.arrived_at = Some(now),
            TripStatus::Delivered => trip.delivered_at = Some(now),
            _ => {}
        }

        let trip = trip.clone();
        if next == TripStatus::Delivered {
            fleet.set_vehicle_status(trip.vehicle_id, VehicleStatus::Available);
            fleet.set_driver_status(trip.driver_id, DriverStatus::Available);
            fleet.record_delivered_trip(trip.driver_id);
        }

        info!(code = %trip.code, status = %trip.status, "Trip status advanced");
        Ok(trip)
    }

    /// Cancel a trip before delivery, freeing its vehicle and driver.
    /// A delivered or already-cancelled trip cannot be cancelled.
    pub fn cancel(&mut self, fleet: &mut FleetRegistry, code: &str) -> AppResult<Trip> {
        let trip = self
            .trips
            .iter_mut()
            .find(|t| t.code == code)
            .ok_or_else(|| AppError::not_found(format!("Trip not found: {code}")))?;

        if !trip.status.is_active() {
            return Err(AppError::conflict(format!(
                "Trip {} cannot be cancelled in state {}",
                trip.code, trip.status
            )));
        }

        trip.status = TripStatus::Cancelled;
        let trip = trip.clone();
        fleet.set_vehicle_status(trip.vehicle_id, VehicleStatus::Available);
        fleet.set_driver_status(trip.driver_id, DriverStatus::Available);

        info!(code = %trip.code, "Trip cancelled");
        Ok(trip)
    }

    fn holds_active_trip(&self, matches: impl Fn(&&Trip) -> bool) -> bool {
        self.trips.iter().filter(matches).any(|t| t.status.is_active())
    }
}
