//! Adjustment Service
//!
//! The adjustment engine: computes an adjusted thermostat setting for a
//! reading, scores its energy efficiency, generates a suggestion, and
//! records the adjustment in the history.

use hestia_core::domain::adjustment::{Adjustment, TimeOfDay};
use hestia_core::dto::adjust::{AdjustTemperatureRequest, AdjustTemperatureResponse};
use rand::seq::SliceRandom;
use sqlx::PgPool;

use crate::repository::adjustment_repository;

/// Service error type
#[derive(Debug)]
pub enum AdjustError {
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for AdjustError {
    fn from(err: sqlx::Error) -> Self {
        AdjustError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, AdjustError>;

/// Compute an adjustment for the reading and record it in the history
pub async fn simulate(
    pool: &PgPool,
    req: AdjustTemperatureRequest,
) -> Result<AdjustTemperatureResponse> {
    validate_reading(&req)?;

    let adjustment = evaluate(&req);

    let record = adjustment_repository::insert(pool, &req, &adjustment).await?;

    tracing::info!(
        "Adjustment {} recorded: {}°C -> {}°C (efficiency {})",
        record.id,
        req.room_temp,
        adjustment.adjusted_temp,
        adjustment.energy_efficiency
    );

    Ok(AdjustTemperatureResponse {
        adjusted_temp: adjustment.adjusted_temp,
        change: adjustment.change,
        ai_suggestion: adjustment.suggestion,
        energy_efficiency: adjustment.energy_efficiency,
        current_temp: req.room_temp,
        preferred_temp: req.preferred_temp,
    })
}

/// Run the adjustment rules against one reading
pub fn evaluate(req: &AdjustTemperatureRequest) -> Adjustment {
    let adjusted_temp = round1(target_temperature(req));
    let change = round1(adjusted_temp - req.room_temp);

    let energy_efficiency = energy_efficiency(
        req.room_temp,
        adjusted_temp,
        req.outdoor_temp,
        req.occupancy,
    );

    let suggestion = generate_suggestion(
        adjusted_temp,
        req.room_temp,
        req.outdoor_temp,
        req.occupancy,
        req.time_of_day,
    );

    Adjustment {
        adjusted_temp,
        change,
        energy_efficiency,
        suggestion,
    }
}

/// The setting the thermostat should move to
fn target_temperature(req: &AdjustTemperatureRequest) -> f64 {
    // Unoccupied rooms get an energy-saving setback
    if !req.occupancy {
        return if req.outdoor_temp > 25.0 { 28.0 } else { 18.0 };
    }

    match req.time_of_day {
        // Sleep comfort: run slightly cooler at night
        TimeOfDay::Night => req.preferred_temp - 1.0,
        // Warm up a bit on cold mornings
        TimeOfDay::Morning if req.outdoor_temp < 15.0 => req.preferred_temp + 0.5,
        // Back off slightly on hot afternoons
        TimeOfDay::Afternoon if req.outdoor_temp > 30.0 => req.preferred_temp - 0.5,
        _ => req.preferred_temp,
    }
}

/// Score the efficiency of the adjusted setting, 0-100
fn energy_efficiency(current: f64, adjusted: f64, outdoor: f64, occupancy: bool) -> i32 {
    let mut efficiency = 80.0;

    // Efficiency drops as the indoor/outdoor spread grows
    efficiency -= ((adjusted - outdoor).abs() * 1.5).min(30.0);

    // Unoccupied eco settings score higher
    if !occupancy {
        efficiency += 15.0;
    }

    // Large swings cost energy
    if (adjusted - current).abs() > 2.0 {
        efficiency -= 10.0;
    }

    (efficiency.round() as i32).clamp(0, 100)
}

/// Generate a suggestion for the adjusted setting
fn generate_suggestion(
    adjusted: f64,
    current: f64,
    outdoor: f64,
    occupancy: bool,
    time_of_day: TimeOfDay,
) -> String {
    if !occupancy {
        return "Room is unoccupied. Activating eco mode to save energy.".to_string();
    }

    let candidates = suggestion_candidates(adjusted, current, outdoor, time_of_day);

    // One suggestion at a time to avoid overwhelming the user
    candidates
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_else(|| {
            "Current setting is optimal for comfort and energy efficiency.".to_string()
        })
}

/// All suggestions applicable to the adjusted setting
fn suggestion_candidates(
    adjusted: f64,
    current: f64,
    outdoor: f64,
    time_of_day: TimeOfDay,
) -> Vec<String> {
    let change = adjusted - current;
    let mut suggestions = Vec::new();

    if change.abs() > 3.0 {
        suggestions.push(format!(
            "Large temperature change of {:.1}°C may use significant energy. Consider a gradual change.",
            change.abs()
        ));
    }

    match time_of_day {
        TimeOfDay::Night => suggestions.push(
            "Lower temperature at night can improve sleep quality and save energy.".to_string(),
        ),
        TimeOfDay::Morning if outdoor < 10.0 => {
            suggestions.push("It's cold outside. Pre-heating the room is recommended.".to_string())
        }
        TimeOfDay::Afternoon if outdoor > 30.0 => suggestions
            .push("It's hot outside. Consider using fans to supplement cooling.".to_string()),
        _ => {}
    }

    if outdoor > adjusted + 5.0 {
        suggestions
            .push("Keep blinds/curtains closed to prevent heat gain from sunlight.".to_string());
    } else if outdoor < adjusted - 5.0 {
        suggestions
            .push("Ensure windows and doors are sealed to prevent heat loss.".to_string());
    }

    if adjusted > 25.0 {
        suggestions.push("Setting above 25°C will optimize energy savings.".to_string());
    } else if adjusted < 19.0 {
        suggestions.push("Setting below 19°C will increase energy consumption.".to_string());
    }

    suggestions
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// =============================================================================
// Validation
// =============================================================================

fn validate_reading(req: &AdjustTemperatureRequest) -> Result<()> {
    let fields = [
        ("roomTemp", req.room_temp),
        ("outdoorTemp", req.outdoor_temp),
        ("preferredTemp", req.preferred_temp),
    ];

    for (name, value) in fields {
        if !value.is_finite() {
            return Err(AdjustError::ValidationError(format!(
                "{} must be a finite number",
                name
            )));
        }
        if !(-60.0..=60.0).contains(&value) {
            return Err(AdjustError::ValidationError(format!(
                "{} must be between -60 and 60°C",
                name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        room_temp: f64,
        outdoor_temp: f64,
        preferred_temp: f64,
        time_of_day: TimeOfDay,
        occupancy: bool,
    ) -> AdjustTemperatureRequest {
        AdjustTemperatureRequest {
            room_temp,
            outdoor_temp,
            preferred_temp,
            time_of_day,
            occupancy,
        }
    }

    #[test]
    fn test_unoccupied_room_uses_eco_setback() {
        let hot = evaluate(&request(22.0, 30.0, 23.0, TimeOfDay::Afternoon, false));
        assert_eq!(hot.adjusted_temp, 28.0);

        let cold = evaluate(&request(22.0, 10.0, 23.0, TimeOfDay::Morning, false));
        assert_eq!(cold.adjusted_temp, 18.0);
    }

    #[test]
    fn test_night_runs_one_degree_cooler() {
        let result = evaluate(&request(22.0, 18.0, 23.0, TimeOfDay::Night, true));
        assert_eq!(result.adjusted_temp, 22.0);
        assert_eq!(result.change, 0.0);
    }

    #[test]
    fn test_cold_morning_warms_up_half_a_degree() {
        let result = evaluate(&request(21.0, 10.0, 23.0, TimeOfDay::Morning, true));
        assert_eq!(result.adjusted_temp, 23.5);
        assert_eq!(result.change, 2.5);
    }

    #[test]
    fn test_mild_morning_keeps_preferred_setting() {
        let result = evaluate(&request(21.0, 18.0, 23.0, TimeOfDay::Morning, true));
        assert_eq!(result.adjusted_temp, 23.0);
    }

    #[test]
    fn test_hot_afternoon_backs_off_half_a_degree() {
        let result = evaluate(&request(26.0, 32.0, 24.0, TimeOfDay::Afternoon, true));
        assert_eq!(result.adjusted_temp, 23.5);
        assert_eq!(result.change, -2.5);
    }

    #[test]
    fn test_efficiency_matches_hand_computed_score() {
        // adjusted 23, outdoor 20: 80 - 4.5, occupied, change within 2
        let score = energy_efficiency(22.0, 23.0, 20.0, true);
        assert_eq!(score, 76);

        // spread capped at 30: 80 - 30 - 10 for the large swing
        let score = energy_efficiency(15.0, 23.0, 45.0, true);
        assert_eq!(score, 40);

        // unoccupied bonus
        let score = energy_efficiency(22.0, 23.0, 20.0, false);
        assert_eq!(score, 91);
    }

    #[test]
    fn test_efficiency_stays_within_bounds() {
        for current in [-40.0, 0.0, 22.0, 55.0] {
            for adjusted in [-40.0, 18.0, 28.0, 55.0] {
                for outdoor in [-40.0, 0.0, 25.0, 55.0] {
                    for occupancy in [true, false] {
                        let score = energy_efficiency(current, adjusted, outdoor, occupancy);
                        assert!((0..=100).contains(&score));
                    }
                }
            }
        }
    }

    #[test]
    fn test_unoccupied_suggestion_is_eco_message() {
        let suggestion = generate_suggestion(18.0, 22.0, 10.0, false, TimeOfDay::Morning);
        assert_eq!(
            suggestion,
            "Room is unoccupied. Activating eco mode to save energy."
        );
    }

    #[test]
    fn test_suggestion_candidates_for_cold_morning() {
        let candidates = suggestion_candidates(23.5, 21.0, 5.0, TimeOfDay::Morning);
        assert!(
            candidates
                .iter()
                .any(|s| s.contains("Pre-heating the room"))
        );
        // outdoor is more than 5 below the setting
        assert!(candidates.iter().any(|s| s.contains("sealed")));
    }

    #[test]
    fn test_large_change_suggestion_reports_magnitude() {
        let candidates = suggestion_candidates(26.5, 22.0, 26.0, TimeOfDay::Afternoon);
        assert!(
            candidates
                .iter()
                .any(|s| s.contains("Large temperature change of 4.5°C"))
        );
    }

    #[test]
    fn test_no_candidates_falls_back_to_optimal_message() {
        // change 0, mild afternoon, small spread, setting within 19-25
        let suggestion = generate_suggestion(22.0, 22.0, 20.0, true, TimeOfDay::Afternoon);
        assert_eq!(
            suggestion,
            "Current setting is optimal for comfort and energy efficiency."
        );
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        let req = request(f64::NAN, 20.0, 23.0, TimeOfDay::Morning, true);
        assert!(matches!(
            validate_reading(&req),
            Err(AdjustError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let req = request(22.0, 100.0, 23.0, TimeOfDay::Morning, true);
        assert!(matches!(
            validate_reading(&req),
            Err(AdjustError::ValidationError(_))
        ));
    }

    #[test]
    fn test_round1_rounds_to_one_decimal() {
        assert_eq!(round1(22.449), 22.4);
        assert_eq!(round1(22.46), 22.5);
        assert_eq!(round1(-0.25), -0.3);
    }
}
