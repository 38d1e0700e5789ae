//! End-to-end fleet operations: booking, lifecycle, and the registries
//! the dashboard modules read their cards from.

use chrono::{Duration, Utc};

use fleetflow_core::config::fleet::FleetConfig;
use fleetflow_entity::fleet::{
    DriverStatus, NewServiceLog, NewVehicle, ServiceStatus, TripPriority, TripStatus,
    VehicleStatus,
};
use fleetflow_fleet::{FleetRegistry, ServiceLogBook, TripBoard, TripFilter, TripRequest};

fn booking(vehicle_id: u32, driver_id: u32) -> TripRequest {
    TripRequest {
        vehicle_id,
        driver_id,
        origin_city: "Pune".to_string(),
        destination_city: "Nashik".to_string(),
        distance_km: 210.0,
        cargo_weight_kg: 3000.0,
        cargo_type: Some("FMCG".to_string()),
        special_instructions: None,
        priority: TripPriority::High,
        scheduled_at: Utc::now() + Duration::hours(2),
    }
}

#[test]
fn trip_lifecycle_updates_fleet_state_end_to_end() {
    let mut fleet = FleetRegistry::seeded();
    let mut board = TripBoard::new(&FleetConfig::default());

    let trip = board.create(&mut fleet, booking(1, 1)).unwrap();
    assert_eq!(trip.status, TripStatus::Scheduled);
    assert_eq!(fleet.vehicle_stats().on_trip, 1);
    assert_eq!(fleet.available_drivers().len(), 2);

    // While the pair is locked, the rest of the fleet is still bookable.
    board.create(&mut fleet, booking(2, 2)).unwrap();
    assert_eq!(fleet.vehicle_stats().on_trip, 2);

    for _ in 0..3 {
        board.advance(&mut fleet, &trip.code).unwrap();
    }
    assert_eq!(board.trip(&trip.code).unwrap().status, TripStatus::Delivered);
    assert_eq!(fleet.vehicle(1).unwrap().status, VehicleStatus::Available);
    assert_eq!(fleet.driver(1).unwrap().status, DriverStatus::Available);
    assert_eq!(fleet.driver(1).unwrap().total_trips, 43);

    let active = board.filter(&TripFilter {
        status: Some(TripStatus::Scheduled),
        ..TripFilter::default()
    });
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].code, "TRP-002");
}

#[test]
fn new_vehicle_is_bookable_and_serviceable() {
    let mut fleet = FleetRegistry::seeded();
    let mut board = TripBoard::new(&FleetConfig::default());
    let mut logbook = ServiceLogBook::seeded();

    let vehicle = fleet
        .add_vehicle(NewVehicle {
            plate: "MH-31-XY-7890".to_string(),
            model: "Tata Ace Gold".to_string(),
            vehicle_type: "Mini Truck".to_string(),
            capacity_kg: 750.0,
            odometer_km: 120,
        })
        .unwrap();

    let trip = board.create(&mut fleet, {
        let mut req = booking(vehicle.id, 3);
        req.cargo_weight_kg = 500.0;
        req
    });
    assert!(trip.is_ok());

    let log = logbook
        .add(NewServiceLog {
            vehicle: vehicle.model.clone(),
            issue: "First service".to_string(),
            date: Some(Utc::now().date_naive()),
            cost: Some(1_800),
            status: ServiceStatus::New,
        })
        .unwrap();
    assert_eq!(log.id, 325);
    assert_eq!(logbook.stats().new, 3);
    assert_eq!(logbook.search("ace gold").len(), 1);
}
