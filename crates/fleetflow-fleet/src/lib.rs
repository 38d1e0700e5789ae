//! # fleetflow-fleet
//!
//! The fleet operations core: the vehicle and driver registry, the trip
//! dispatch board with its booking invariants and lifecycle, and the
//! maintenance service log book.

pub mod dispatch;
pub mod maintenance;
pub mod registry;

pub use dispatch::board::{TripBoard, TripFilter, TripRequest};
pub use dispatch::fuel::{FuelEstimate, FuelEstimator};
pub use maintenance::{ServiceLogBook, ServiceStats};
pub use registry::{FleetRegistry, VehicleStats};
