//! Fleet operations configuration.

use serde::{Deserialize, Serialize};

/// Trip costing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Fuel price per litre used for trip cost estimates.
    #[serde(default = "default_fuel_price")]
    pub fuel_price_per_litre: f64,
    /// Baseline unloaded mileage in kilometers per litre.
    #[serde(default = "default_base_km_per_litre")]
    pub base_km_per_litre: f64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            fuel_price_per_litre: default_fuel_price(),
            base_km_per_litre: default_base_km_per_litre(),
        }
    }
}

fn default_fuel_price() -> f64 {
    95.0
}

fn default_base_km_per_litre() -> f64 {
    3.0
}
