//! Terminal rendering helpers
//!
//! Text renderings of the page widgets: the energy-efficiency meter, the
//! temperature comparison chart, trend sparklines and the history table.

use colored::*;
use hestia_core::domain::adjustment::AdjustmentRecord;

/// Width of rendered meters and chart bars, in characters
const BAR_WIDTH: usize = 40;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a 0-100 efficiency score as a colored meter line
pub fn efficiency_bar(efficiency: i32) -> String {
    let filled = scaled_fill(efficiency.clamp(0, 100) as f64, 0.0, 100.0);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

    format!("{} {}%", colorize_efficiency(&bar, efficiency), efficiency)
}

/// Color band for an efficiency score
fn colorize_efficiency(text: &str, efficiency: i32) -> ColoredString {
    if efficiency >= 80 {
        text.green()
    } else if efficiency >= 60 {
        text.cyan()
    } else if efficiency >= 40 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Render the Current / Preferred / AI Adjusted comparison chart
///
/// The axis is padded two degrees beyond the extremes, so near-identical
/// settings still render visibly different bars.
pub fn temperature_chart(current: f64, preferred: f64, adjusted: f64) -> String {
    let series = [
        ("Current", current, Color::Cyan),
        ("Preferred", preferred, Color::Magenta),
        ("AI Adjusted", adjusted, Color::Yellow),
    ];

    let low = current.min(preferred).min(adjusted) - 2.0;
    let high = current.max(preferred).max(adjusted) + 2.0;

    let mut out = String::new();
    for (label, value, color) in series {
        let filled = scaled_fill(value, low, high);
        let bar = "█".repeat(filled);
        out.push_str(&format!(
            "  {:<12} {} {:.1}°C\n",
            label,
            bar.color(color),
            value
        ));
    }

    out
}

/// Render a numeric series as a block sparkline against a shared scale
pub fn sparkline(values: &[f64], low: f64, high: f64) -> String {
    let span = high - low;

    values
        .iter()
        .map(|value| {
            let ratio = if span == 0.0 {
                0.5
            } else {
                ((value - low) / span).clamp(0.0, 1.0)
            };
            SPARK_LEVELS[(ratio * 7.0).round() as usize]
        })
        .collect()
}

/// Print the history table in the order the entries were received
pub fn print_history_table(records: &[AdjustmentRecord]) {
    println!(
        "{}",
        format!(
            "{:<17} {:>6} {:>8} {:>10} {:>9}  {:<10} {:<9} {}",
            "Timestamp",
            "Room",
            "Outdoor",
            "Preferred",
            "Adjusted",
            "Time",
            "Occupied",
            "Efficiency"
        )
        .bold()
    );
    println!("{}", "─".repeat(100).dimmed());

    for entry in records {
        println!(
            "{:<17} {:>6} {:>8} {:>10} {:>9}  {:<10} {:<9} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            format!("{:.1}", entry.room_temp),
            format!("{:.1}", entry.outdoor_temp),
            format!("{:.1}", entry.preferred_temp),
            format!("{:.1}", entry.adjusted_temp),
            entry.time_of_day,
            if entry.occupancy { "Yes" } else { "No" },
            row_efficiency(entry.energy_efficiency)
        );

        if let Some(suggestion) = &entry.suggestion {
            println!("{}", format!("    ↳ {}", suggestion).dimmed());
        }
    }

    println!("{}", "─".repeat(100).dimmed());
}

/// Compact per-row efficiency meter
fn row_efficiency(efficiency: i32) -> String {
    let filled = (efficiency.clamp(0, 100) as usize) / 10;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));

    format!("{} {}%", colorize_efficiency(&bar, efficiency), efficiency)
}

/// Bar cells for a value on a low..high axis
fn scaled_fill(value: f64, low: f64, high: f64) -> usize {
    let span = high - low;
    if span <= 0.0 {
        return 0;
    }

    let ratio = ((value - low) / span).clamp(0.0, 1.0);
    (ratio * BAR_WIDTH as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_fill_spans_the_axis() {
        assert_eq!(scaled_fill(0.0, 0.0, 100.0), 0);
        assert_eq!(scaled_fill(50.0, 0.0, 100.0), BAR_WIDTH / 2);
        assert_eq!(scaled_fill(100.0, 0.0, 100.0), BAR_WIDTH);
        // Out-of-range values clamp instead of overflowing the bar
        assert_eq!(scaled_fill(140.0, 0.0, 100.0), BAR_WIDTH);
    }

    #[test]
    fn test_sparkline_maps_extremes_to_first_and_last_levels() {
        let line = sparkline(&[10.0, 15.0, 20.0], 10.0, 20.0);
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars.len(), 3);
        assert_eq!(chars[0], '▁');
        assert_eq!(chars[2], '█');
    }

    #[test]
    fn test_sparkline_with_flat_series() {
        let line = sparkline(&[21.0, 21.0], 21.0, 21.0);
        assert_eq!(line.chars().count(), 2);
        // All cells render at the same mid level
        assert_eq!(line.chars().collect::<std::collections::HashSet<_>>().len(), 1);
    }
}
