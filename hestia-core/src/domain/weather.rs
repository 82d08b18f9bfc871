//! Weather domain types

use serde::{Deserialize, Serialize};

/// Current outdoor conditions as reported by the weather proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Human-readable location name the reading applies to
    pub location: String,
}
