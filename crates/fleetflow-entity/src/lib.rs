//! # fleetflow-entity
//!
//! Domain entity models for FleetFlow. Every struct in this crate
//! represents a roster record or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod fleet;
pub mod module;
pub mod session;
pub mod user;

pub use fleet::{
    Driver, DriverStatus, NewServiceLog, NewVehicle, ServiceLog, ServiceStatus, Trip, TripPriority,
    TripStatus, Vehicle, VehicleStatus,
};
pub use module::Module;
pub use session::Session;
pub use user::{Account, NewAccount, Role};
