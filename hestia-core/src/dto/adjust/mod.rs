//! Adjustment DTOs for the thermostat API

use serde::{Deserialize, Serialize};

use crate::domain::adjustment::TimeOfDay;

/// Request to compute an adjusted thermostat setting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustTemperatureRequest {
    pub room_temp: f64,
    pub outdoor_temp: f64,
    pub preferred_temp: f64,
    pub time_of_day: TimeOfDay,
    #[serde(with = "crate::dto::yes_no")]
    pub occupancy: bool,
}

/// Response from the adjustment endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustTemperatureResponse {
    pub adjusted_temp: f64,
    pub change: f64,
    pub ai_suggestion: String,
    pub energy_efficiency: i32,
    pub current_temp: f64,
    pub preferred_temp: f64,
}
