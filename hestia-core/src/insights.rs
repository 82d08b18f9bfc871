//! Aggregate insights over the adjustment history
//!
//! Single-pass statistics behind the usage-pattern cards: average energy
//! efficiency, average gap between the preferred and AI-adjusted settings,
//! and the most frequent time-of-day. Insights are only reported once two
//! or more records exist.

use crate::domain::adjustment::{AdjustmentRecord, TimeOfDay};

/// Minimum history length before insights are reported
const MIN_RECORDS: usize = 2;

/// Aggregate statistics over a history slice
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryInsights {
    /// Mean energy-efficiency score, 0-100
    pub average_efficiency: f64,
    /// Mean absolute difference between preferred and adjusted setting, in degrees C
    pub average_adjustment_gap: f64,
    /// Most frequent time-of-day across the history
    pub most_common_time_of_day: TimeOfDay,
}

/// Compute insights over the history, or `None` with fewer than two records.
pub fn compute(history: &[AdjustmentRecord]) -> Option<HistoryInsights> {
    if history.len() < MIN_RECORDS {
        return None;
    }

    let count = history.len() as f64;

    let average_efficiency = history
        .iter()
        .map(|entry| entry.energy_efficiency as f64)
        .sum::<f64>()
        / count;

    let average_adjustment_gap = history
        .iter()
        .map(|entry| (entry.preferred_temp - entry.adjusted_temp).abs())
        .sum::<f64>()
        / count;

    Some(HistoryInsights {
        average_efficiency,
        average_adjustment_gap,
        most_common_time_of_day: most_common_time_of_day(history)?,
    })
}

/// Mode of the time-of-day field.
///
/// Counts are compared in first-occurrence order; on a tie the later
/// category wins, i.e. a candidate only loses to a strictly greater count.
fn most_common_time_of_day(history: &[AdjustmentRecord]) -> Option<TimeOfDay> {
    let mut counts: Vec<(TimeOfDay, usize)> = Vec::new();
    for entry in history {
        match counts.iter_mut().find(|(t, _)| *t == entry.time_of_day) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.time_of_day, 1)),
        }
    }

    let mut best: Option<(TimeOfDay, usize)> = None;
    for (candidate, count) in counts {
        best = match best {
            Some((current, current_count)) if current_count > count => {
                Some((current, current_count))
            }
            _ => Some((candidate, count)),
        };
    }

    best.map(|(t, _)| t)
}

/// Canned message for an average efficiency score
pub fn efficiency_message(efficiency: f64) -> &'static str {
    if efficiency >= 80.0 {
        "Excellent! Your settings are very energy efficient."
    } else if efficiency >= 60.0 {
        "Good efficiency. Minor improvements could save more energy."
    } else if efficiency >= 40.0 {
        "Average efficiency. Consider adjusting your preferences to save energy."
    } else {
        "Low efficiency. Significant energy savings possible by accepting AI recommendations."
    }
}

/// Canned message for the average preferred-vs-adjusted gap
pub fn adjustment_gap_message(gap: f64) -> &'static str {
    if gap < 1.0 {
        "Your preferences closely match energy-efficient settings."
    } else if gap < 2.0 {
        "The AI makes minor adjustments to your preferences for better efficiency."
    } else {
        "Consider adjusting your temperature preferences to improve energy efficiency."
    }
}

/// Canned usage-pattern message for the dominant time-of-day
pub fn time_of_day_message(time_of_day: TimeOfDay) -> &'static str {
    match time_of_day {
        TimeOfDay::Morning => {
            "Morning adjustments often focus on warming the space as people start their day."
        }
        TimeOfDay::Afternoon => {
            "Afternoon adjustments typically respond to peak outdoor temperatures."
        }
        TimeOfDay::Night => {
            "Night adjustments usually optimize for comfort during sleep hours."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(
        id: i64,
        preferred_temp: f64,
        adjusted_temp: f64,
        time_of_day: TimeOfDay,
        energy_efficiency: i32,
    ) -> AdjustmentRecord {
        AdjustmentRecord {
            id,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            room_temp: 22.0,
            outdoor_temp: 15.0,
            preferred_temp,
            adjusted_temp,
            time_of_day,
            occupancy: true,
            energy_efficiency,
            suggestion: None,
        }
    }

    #[test]
    fn test_too_few_records_yields_no_insights() {
        assert_eq!(compute(&[]), None);
        assert_eq!(
            compute(&[record(1, 23.0, 23.0, TimeOfDay::Morning, 80)]),
            None
        );
    }

    #[test]
    fn test_averages_match_hand_computed_values() {
        let history = vec![
            record(3, 23.0, 22.0, TimeOfDay::Night, 90),
            record(2, 21.0, 21.5, TimeOfDay::Morning, 70),
            record(1, 24.0, 24.0, TimeOfDay::Morning, 50),
        ];

        let insights = compute(&history).unwrap();
        assert_eq!(insights.average_efficiency, 70.0);
        // (1.0 + 0.5 + 0.0) / 3
        assert!((insights.average_adjustment_gap - 0.5).abs() < 1e-9);
        assert_eq!(insights.most_common_time_of_day, TimeOfDay::Morning);
    }

    #[test]
    fn test_mode_tie_resolves_to_later_category() {
        let history = vec![
            record(4, 23.0, 23.0, TimeOfDay::Morning, 80),
            record(3, 23.0, 23.0, TimeOfDay::Night, 80),
            record(2, 23.0, 23.0, TimeOfDay::Morning, 80),
            record(1, 23.0, 23.0, TimeOfDay::Night, 80),
        ];

        let insights = compute(&history).unwrap();
        assert_eq!(insights.most_common_time_of_day, TimeOfDay::Night);
    }

    #[test]
    fn test_efficiency_message_bands() {
        assert!(efficiency_message(92.0).starts_with("Excellent"));
        assert!(efficiency_message(80.0).starts_with("Excellent"));
        assert!(efficiency_message(65.0).starts_with("Good"));
        assert!(efficiency_message(45.0).starts_with("Average"));
        assert!(efficiency_message(10.0).starts_with("Low"));
    }

    #[test]
    fn test_adjustment_gap_message_bands() {
        assert!(adjustment_gap_message(0.4).contains("closely match"));
        assert!(adjustment_gap_message(1.5).contains("minor adjustments"));
        assert!(adjustment_gap_message(2.5).contains("Consider adjusting"));
    }
}
