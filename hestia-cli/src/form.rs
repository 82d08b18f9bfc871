//! Input form validation
//!
//! The simulate command accepts its temperature fields as raw strings and
//! checks presence and numeric parseability before anything is sent to the
//! service.

use hestia_core::domain::adjustment::TimeOfDay;
use hestia_core::dto::adjust::AdjustTemperatureRequest;

/// Raw form fields for a simulation
#[derive(Debug, Clone, Default)]
pub struct ReadingForm {
    pub room_temp: Option<String>,
    pub outdoor_temp: Option<String>,
    pub preferred_temp: Option<String>,
    pub time_of_day: String,
    pub occupancy: String,
}

/// A validated reading ready to submit
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub room_temp: f64,
    pub outdoor_temp: f64,
    pub preferred_temp: f64,
    pub time_of_day: TimeOfDay,
    pub occupancy: bool,
}

impl ReadingForm {
    /// Validate the form fields into a submittable reading
    pub fn validate(&self) -> Result<Reading, String> {
        let raw_fields = [&self.room_temp, &self.outdoor_temp, &self.preferred_temp];
        if raw_fields
            .iter()
            .any(|field| field.as_deref().is_none_or(|v| v.trim().is_empty()))
        {
            return Err("Please fill in all temperature fields".to_string());
        }

        let (Some(room_temp), Some(outdoor_temp), Some(preferred_temp)) = (
            parse_temperature(&self.room_temp),
            parse_temperature(&self.outdoor_temp),
            parse_temperature(&self.preferred_temp),
        ) else {
            return Err("Temperature values must be numbers".to_string());
        };

        let time_of_day = self.time_of_day.parse::<TimeOfDay>()?;

        let occupancy = match self.occupancy.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => true,
            "no" | "n" => false,
            other => return Err(format!("occupancy must be yes or no, got '{}'", other)),
        };

        Ok(Reading {
            room_temp,
            outdoor_temp,
            preferred_temp,
            time_of_day,
            occupancy,
        })
    }
}

/// Parse a temperature field, rejecting non-finite values like "NaN"
fn parse_temperature(field: &Option<String>) -> Option<f64> {
    field
        .as_deref()?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

impl From<Reading> for AdjustTemperatureRequest {
    fn from(reading: Reading) -> Self {
        AdjustTemperatureRequest {
            room_temp: reading.room_temp,
            outdoor_temp: reading.outdoor_temp,
            preferred_temp: reading.preferred_temp,
            time_of_day: reading.time_of_day,
            occupancy: reading.occupancy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(room: Option<&str>, outdoor: Option<&str>, preferred: Option<&str>) -> ReadingForm {
        ReadingForm {
            room_temp: room.map(str::to_string),
            outdoor_temp: outdoor.map(str::to_string),
            preferred_temp: preferred.map(str::to_string),
            time_of_day: "Morning".to_string(),
            occupancy: "yes".to_string(),
        }
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let result = form(Some("22"), None, Some("23")).validate();
        assert_eq!(result, Err("Please fill in all temperature fields".to_string()));

        let result = form(Some("22"), Some("   "), Some("23")).validate();
        assert_eq!(result, Err("Please fill in all temperature fields".to_string()));
    }

    #[test]
    fn test_non_numeric_fields_are_rejected() {
        let result = form(Some("22"), Some("warm"), Some("23")).validate();
        assert_eq!(result, Err("Temperature values must be numbers".to_string()));

        let result = form(Some("NaN"), Some("20"), Some("23")).validate();
        assert_eq!(result, Err("Temperature values must be numbers".to_string()));
    }

    #[test]
    fn test_valid_form_parses() {
        let reading = form(Some("22"), Some("20.5"), Some(" 23 ")).validate().unwrap();
        assert_eq!(reading.room_temp, 22.0);
        assert_eq!(reading.outdoor_temp, 20.5);
        assert_eq!(reading.preferred_temp, 23.0);
        assert_eq!(reading.time_of_day, TimeOfDay::Morning);
        assert!(reading.occupancy);
    }

    #[test]
    fn test_occupancy_accepts_yes_no_variants() {
        let mut f = form(Some("22"), Some("20"), Some("23"));
        f.occupancy = "No".to_string();
        assert!(!f.validate().unwrap().occupancy);

        f.occupancy = "sometimes".to_string();
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_unknown_time_of_day_is_rejected() {
        let mut f = form(Some("22"), Some("20"), Some("23"));
        f.time_of_day = "Evening".to_string();
        assert!(f.validate().is_err());
    }
}
