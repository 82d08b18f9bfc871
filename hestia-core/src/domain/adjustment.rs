//! Thermostat adjustment domain types

use serde::{Deserialize, Serialize};

/// Time-of-day category supplied by the user and echoed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Night,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Night => "Night",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "night" => Ok(TimeOfDay::Night),
            other => Err(format!(
                "unknown time of day '{}' (expected Morning, Afternoon or Night)",
                other
            )),
        }
    }
}

/// One stored thermostat adjustment
///
/// Structure shared between the server (persists) and the CLI (renders the
/// history table and computes insights). Serialized verbatim as a history
/// entry on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentRecord {
    pub id: i64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub room_temp: f64,
    pub outdoor_temp: f64,
    pub preferred_temp: f64,
    pub adjusted_temp: f64,
    pub time_of_day: TimeOfDay,
    #[serde(with = "crate::dto::yes_no")]
    pub occupancy: bool,
    pub energy_efficiency: i32,
    pub suggestion: Option<String>,
}

/// Result of running the adjustment engine against one reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adjustment {
    pub adjusted_temp: f64,
    pub change: f64,
    pub energy_efficiency: i32,
    pub suggestion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_parses_case_insensitively() {
        assert_eq!("morning".parse::<TimeOfDay>(), Ok(TimeOfDay::Morning));
        assert_eq!("Afternoon".parse::<TimeOfDay>(), Ok(TimeOfDay::Afternoon));
        assert_eq!("NIGHT".parse::<TimeOfDay>(), Ok(TimeOfDay::Night));
    }

    #[test]
    fn test_time_of_day_rejects_unknown_values() {
        assert!("Evening".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_time_of_day_serializes_as_capitalized_word() {
        let json = serde_json::to_string(&TimeOfDay::Afternoon).unwrap();
        assert_eq!(json, "\"Afternoon\"");
    }
}
