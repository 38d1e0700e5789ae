//! The vehicle and driver registry.

use serde::{Deserialize, Serialize};
use tracing::info;

use fleetflow_core::error::AppError;
use fleetflow_core::result::AppResult;
use fleetflow_entity::fleet::{
    Driver, DriverStatus, NewVehicle, Vehicle, VehicleStatus,
};

/// Per-status vehicle counts for the fleet overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStats {
    /// All vehicles.
    pub total: usize,
    /// Idle and bookable.
    pub available: usize,
    /// Locked to an active trip.
    pub on_trip: usize,
    /// In the workshop.
    pub maintenance: usize,
}

/// Owns the fleet's vehicles and drivers.
///
/// Vehicle and driver status transitions go through this registry so the
/// dispatch board can lock and free resources without reaching into the
/// entities directly. Stats are derived from the live lists, never kept as
/// separate counters that could drift.
#[derive(Debug)]
pub struct FleetRegistry {
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,
    next_vehicle_id: u32,
}

impl FleetRegistry {
    /// Create a registry with the demo seed fleet.
    pub fn seeded() -> Self {
        let vehicles = seed_vehicles();
        let drivers = seed_drivers();
        let next_vehicle_id = vehicles.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        Self {
            vehicles,
            drivers,
            next_vehicle_id,
        }
    }

    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            vehicles: Vec::new(),
            drivers: Vec::new(),
            next_vehicle_id: 1,
        }
    }

    /// All vehicles, in registry order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// All drivers, in registry order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Look up a vehicle by id.
    pub fn vehicle(&self, id: u32) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Look up a driver by id.
    pub fn driver(&self, id: u32) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    /// Vehicles currently bookable.
    pub fn available_vehicles(&self) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Available)
            .collect()
    }

    /// Drivers currently bookable.
    pub fn available_drivers(&self) -> Vec<&Driver> {
        self.drivers
            .iter()
            .filter(|d| d.status == DriverStatus::Available)
            .collect()
    }

    /// Add a vehicle to the registry.
    ///
    /// Plate, model, and type are required; a single validation error
    /// reports every missing field. New vehicles start `Available`.
    pub fn add_vehicle(&mut self, candidate: NewVehicle) -> AppResult<Vehicle> {
        let mut missing = Vec::new();
        if candidate.plate.trim().is_empty() {
            missing.push("plate");
        }
        if candidate.model.trim().is_empty() {
            missing.push("model");
        }
        if candidate.vehicle_type.trim().is_empty() {
            missing.push("vehicle_type");
        }
        if !missing.is_empty() {
            let mut err = AppError::validation(format!(
                "Required vehicle fields missing: {}",
                missing.join(", ")
            ));
            err.fields = missing.into_iter().map(str::to_string).collect();
            return Err(err);
        }

        let vehicle = Vehicle {
            id: self.next_vehicle_id,
            plate: candidate.plate.trim().to_string(),
            model: candidate.model.trim().to_string(),
            vehicle_type: candidate.vehicle_type.trim().to_string(),
            capacity_kg: candidate.capacity_kg,
            odometer_km: candidate.odometer_km,
            status: VehicleStatus::Available,
        };
        self.next_vehicle_id += 1;

        info!(id = vehicle.id, plate = %vehicle.plate, "Vehicle added to fleet");
        self.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    /// Remove a vehicle from the registry.
    ///
    /// Refuses to remove a vehicle locked to an active trip.
    pub fn remove_vehicle(&mut self, id: u32) -> AppResult<Vehicle> {
        let idx = self
            .vehicles
            .iter()
            .position(|v| v.id == id)
            .ok_or_else(|| AppError::not_found(format!("Vehicle not found: {id}")))?;

        if self.vehicles[idx].status == VehicleStatus::OnTrip {
            return Err(AppError::conflict(format!(
                "Vehicle {} is on an active trip and cannot be removed",
                self.vehicles[idx].plate
            )));
        }

        let vehicle = self.vehicles.remove(idx);
        info!(id = vehicle.id, plate = %vehicle.plate, "Vehicle removed from fleet");
        Ok(vehicle)
    }

    /// Per-status vehicle counts.
    pub fn vehicle_stats(&self) -> VehicleStats {
        let count =
            |status| self.vehicles.iter().filter(|v| v.status == status).count();
        VehicleStats {
            total: self.vehicles.len(),
            available: count(VehicleStatus::Available),
            on_trip: count(VehicleStatus::OnTrip),
            maintenance: count(VehicleStatus::Maintenance),
        }
    }

    /// Case-insensitive substring search over plate, model, and type.
    pub fn search_vehicles(&self, query: &str) -> Vec<&Vehicle> {
        let query = query.to_lowercase();
        self.vehicles
            .iter()
            .filter(|v| {
                v.plate.to_lowercase().contains(&query)
                    || v.model.to_lowercase().contains(&query)
                    || v.vehicle_type.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub(crate) fn set_vehicle_status(&mut self, id: u32, status: VehicleStatus) {
        if let Some(vehicle) = self.vehicles.iter_mut().find(|v| v.id == id) {
            vehicle.status = status;
        }
    }

    pub(crate) fn set_driver_status(&mut self, id: u32, status: DriverStatus) {
        if let Some(driver) = self.drivers.iter_mut().find(|d| d.id == id) {
            driver.status = status;
        }
    }

    pub(crate) fn record_delivered_trip(&mut self, driver_id: u32) {
        if let Some(driver) = self.drivers.iter_mut().find(|d| d.id == driver_id) {
            driver.total_trips += 1;
        }
    }
}

fn seed_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: 1,
            plate: "MH-12-AB-1234".to_string(),
            model: "Tata Prima 2830.K".to_string(),
            vehicle_type: "Truck".to_string(),
            capacity_kg: 9000.0,
            odometer_km: 84_230,
            status: VehicleStatus::Available,
        },
        Vehicle {
            id: 2,
            plate: "MH-14-CD-5678".to_string(),
            model: "Ashok Leyland Ecomet".to_string(),
            vehicle_type: "Truck".to_string(),
            capacity_kg: 7500.0,
            odometer_km: 61_200,
            status: VehicleStatus::Available,
        },
        Vehicle {
            id: 3,
            plate: "MH-01-EF-9012".to_string(),
            model: "Mahindra Supro".to_string(),
            vehicle_type: "Van".to_string(),
            capacity_kg: 1200.0,
            odometer_km: 23_500,
            status: VehicleStatus::Available,
        },
        Vehicle {
            id: 4,
            plate: "MH-04-GH-3456".to_string(),
            model: "Eicher Pro 2049".to_string(),
            vehicle_type: "Truck".to_string(),
            capacity_kg: 5000.0,
            odometer_km: 47_800,
            status: VehicleStatus::Maintenance,
        },
    ]
}

fn seed_drivers() -> Vec<Driver> {
    vec![
        Driver {
            id: 1,
            full_name: "Ravi Kumar".to_string(),
            status: DriverStatus::Available,
            total_trips: 42,
        },
        Driver {
            id: 2,
            full_name: "Sunil Pawar".to_string(),
            status: DriverStatus::Available,
            total_trips: 27,
        },
        Driver {
            id: 3,
            full_name: "Meena Joshi".to_string(),
            status: DriverStatus::Available,
            total_trips: 12,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetflow_core::error::ErrorKind;

    fn new_vehicle() -> NewVehicle {
        NewVehicle {
            plate: "MH-31-XY-7890".to_string(),
            model: "Tata Ace Gold".to_string(),
            vehicle_type: "Mini Truck".to_string(),
            capacity_kg: 750.0,
            odometer_km: 0,
        }
    }

    #[test]
    fn test_empty_registry_numbers_from_one() {
        let mut registry = FleetRegistry::empty();
        assert_eq!(registry.vehicle_stats().total, 0);
        assert_eq!(registry.add_vehicle(new_vehicle()).unwrap().id, 1);
    }

    #[test]
    fn test_seed_fleet_counts() {
        let registry = FleetRegistry::seeded();
        let stats = registry.vehicle_stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.available, 3);
        assert_eq!(stats.maintenance, 1);
        assert_eq!(registry.drivers().len(), 3);
    }

    #[test]
    fn test_add_vehicle_assigns_next_id_and_updates_stats() {
        let mut registry = FleetRegistry::seeded();
        let id = registry.add_vehicle(new_vehicle()).unwrap().id;
        assert_eq!(id, 5);
        assert_eq!(registry.vehicle_stats().total, 5);
        assert_eq!(registry.vehicle(id).unwrap().status, VehicleStatus::Available);
    }

    #[test]
    fn test_add_vehicle_reports_every_missing_field() {
        let mut registry = FleetRegistry::seeded();
        let candidate = NewVehicle {
            plate: "".to_string(),
            model: "  ".to_string(),
            vehicle_type: "Truck".to_string(),
            capacity_kg: 0.0,
            odometer_km: 0,
        };
        let err = registry.add_vehicle(candidate).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.fields, vec!["plate", "model"]);
        assert_eq!(registry.vehicle_stats().total, 4);
    }

    #[test]
    fn test_remove_vehicle_updates_stats() {
        let mut registry = FleetRegistry::seeded();
        let removed = registry.remove_vehicle(4).unwrap();
        assert_eq!(removed.status, VehicleStatus::Maintenance);
        let stats = registry.vehicle_stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.maintenance, 0);
    }

    #[test]
    fn test_remove_unknown_vehicle() {
        let mut registry = FleetRegistry::seeded();
        let err = registry.remove_vehicle(99).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_search_matches_plate_model_and_type() {
        let registry = FleetRegistry::seeded();
        assert_eq!(registry.search_vehicles("mh-12").len(), 1);
        assert_eq!(registry.search_vehicles("supro").len(), 1);
        assert_eq!(registry.search_vehicles("truck").len(), 3);
        assert!(registry.search_vehicles("trailer").is_empty());
    }

    #[test]
    fn test_available_lists_exclude_locked_resources() {
        let mut registry = FleetRegistry::seeded();
        registry.set_vehicle_status(1, VehicleStatus::OnTrip);
        registry.set_driver_status(1, DriverStatus::OnTrip);
        assert_eq!(registry.available_vehicles().len(), 2);
        assert_eq!(registry.available_drivers().len(), 2);
    }
}
