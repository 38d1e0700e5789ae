//! Fleet domain entities: vehicles, drivers, trips, and service logs.

pub mod driver;
pub mod service_log;
pub mod trip;
pub mod vehicle;

pub use driver::{Driver, DriverStatus};
pub use service_log::{NewServiceLog, ServiceLog, ServiceStatus};
pub use trip::{Trip, TripPriority, TripStatus};
pub use vehicle::{NewVehicle, Vehicle, VehicleStatus};
