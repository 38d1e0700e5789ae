//! Fuel volume and cost estimation for a trip.

use fleetflow_core::config::fleet::FleetConfig;

/// The estimated fuel volume and cost for one trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelEstimate {
    /// Fuel volume in litres, rounded to 2 decimal places.
    pub litres: f64,
    /// Fuel cost, rounded to 2 decimal places.
    pub cost: f64,
}

/// Estimates fuel for a route from distance and cargo weight.
///
/// Consumption scales linearly with cargo: every 10 tonnes of cargo
/// doubles the baseline burn. The numbers are planning figures for the
/// dispatch form, not an engine model.
#[derive(Debug, Clone, Copy)]
pub struct FuelEstimator {
    price_per_litre: f64,
    base_km_per_litre: f64,
}

impl FuelEstimator {
    /// Create an estimator from the fleet configuration.
    pub fn new(config: &FleetConfig) -> Self {
        Self {
            price_per_litre: config.fuel_price_per_litre,
            base_km_per_litre: config.base_km_per_litre,
        }
    }

    /// Estimate fuel for a route.
    pub fn estimate(&self, distance_km: f64, cargo_weight_kg: f64) -> FuelEstimate {
        let load_factor = 1.0 + cargo_weight_kg / 10_000.0;
        let litres = round2(distance_km / self.base_km_per_litre * load_factor);
        let cost = round2(litres * self.price_per_litre);
        FuelEstimate { litres, cost }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
