//! History command handler
//!
//! Renders the stored adjustment history as a table, an optional trend
//! chart, and the AI insight cards.

use anyhow::Result;
use clap::Args;
use colored::*;
use hestia_client::ThermostatClient;
use hestia_core::domain::adjustment::AdjustmentRecord;
use hestia_core::insights;

use crate::config::Config;
use crate::render;

/// Arguments for the history command
#[derive(Args)]
pub struct HistoryArgs {
    /// Maximum number of entries to fetch
    #[arg(long)]
    limit: Option<u32>,
}

/// Handle the history command
pub async fn handle_history_command(args: HistoryArgs, config: &Config) -> Result<()> {
    let client = ThermostatClient::new(&config.server_url);

    let history = client.history(args.limit).await?;

    if history.is_empty() {
        println!("{}", "No adjustments recorded yet.".yellow());
        println!(
            "{}",
            "Make some temperature adjustments to see AI insights about your usage patterns."
                .dimmed()
        );
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} adjustment(s):", history.len()).bold()
    );
    println!();
    render::print_history_table(&history);

    println!();
    print_trend_chart(&history);

    println!();
    print_insights(&history);

    Ok(())
}

/// Trend chart over the history, oldest first
fn print_trend_chart(history: &[AdjustmentRecord]) {
    let mut ordered: Vec<&AdjustmentRecord> = history.iter().collect();
    ordered.reverse();

    let room: Vec<f64> = ordered.iter().map(|e| e.room_temp).collect();
    let outdoor: Vec<f64> = ordered.iter().map(|e| e.outdoor_temp).collect();
    let adjusted: Vec<f64> = ordered.iter().map(|e| e.adjusted_temp).collect();

    let low = room
        .iter()
        .chain(&outdoor)
        .chain(&adjusted)
        .cloned()
        .fold(f64::INFINITY, f64::min);
    let high = room
        .iter()
        .chain(&outdoor)
        .chain(&adjusted)
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);

    println!("{}", "Temperature History Over Time".bold());
    println!("  {:<9} {}", "Room", render::sparkline(&room, low, high).cyan());
    println!(
        "  {:<9} {}",
        "Outdoor",
        render::sparkline(&outdoor, low, high).magenta()
    );
    println!(
        "  {:<9} {}",
        "Adjusted",
        render::sparkline(&adjusted, low, high).yellow()
    );
    println!(
        "  {}",
        format!("scale {:.1}°C to {:.1}°C, oldest to newest", low, high).dimmed()
    );
}

/// AI insight cards computed from the history
fn print_insights(history: &[AdjustmentRecord]) {
    let Some(insights) = insights::compute(history) else {
        println!(
            "{}",
            "Make more temperature adjustments to get AI insights about your usage patterns."
                .yellow()
        );
        return;
    };

    println!("{}", "AI Insights".bold());

    println!();
    println!("  {}", "Energy Efficiency".bold());
    println!(
        "  Your average energy efficiency rating is {}.",
        format!("{:.1}%", insights.average_efficiency).bold()
    );
    println!(
        "  {}",
        render::efficiency_bar(insights.average_efficiency.round() as i32)
    );
    println!(
        "  {}",
        insights::efficiency_message(insights.average_efficiency).dimmed()
    );

    println!();
    println!("  {}", "Temperature Preferences".bold());
    println!(
        "  On average, the AI adjusts your preferred temperature by {}.",
        format!("{:.1}°C", insights.average_adjustment_gap).bold()
    );
    println!(
        "  {}",
        insights::adjustment_gap_message(insights.average_adjustment_gap).dimmed()
    );

    println!();
    println!("  {}", "Usage Patterns".bold());
    println!(
        "  You most frequently adjust the thermostat during the {}.",
        insights.most_common_time_of_day.to_string().bold()
    );
    println!(
        "  {}",
        insights::time_of_day_message(insights.most_common_time_of_day).dimmed()
    );
}
