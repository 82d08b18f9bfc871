//! Simulate command handler
//!
//! Submits a reading to the service and renders the adjustment result:
//! the adjusted setting, the AI suggestion, the efficiency meter and the
//! temperature comparison chart.

use anyhow::Result;
use clap::Args;
use colored::*;
use hestia_client::ThermostatClient;
use hestia_core::dto::adjust::{AdjustTemperatureRequest, AdjustTemperatureResponse};

use crate::config::Config;
use crate::form::ReadingForm;
use crate::render;

/// Arguments for the simulate command
#[derive(Args)]
pub struct SimulateArgs {
    /// Room temperature in °C
    #[arg(long)]
    room_temp: Option<String>,

    /// Outdoor temperature in °C (omit with --outdoor-from-weather)
    #[arg(long)]
    outdoor_temp: Option<String>,

    /// Preferred temperature in °C
    #[arg(long)]
    preferred_temp: Option<String>,

    /// Time of day: Morning, Afternoon or Night
    #[arg(long, default_value = "Morning")]
    time_of_day: String,

    /// Whether the room is occupied: yes or no
    #[arg(long, default_value = "yes")]
    occupancy: String,

    /// Fill the outdoor temperature from the weather service first
    #[arg(long)]
    outdoor_from_weather: bool,

    /// Latitude for the weather lookup
    #[arg(long, requires = "lon")]
    lat: Option<f64>,

    /// Longitude for the weather lookup
    #[arg(long, requires = "lat")]
    lon: Option<f64>,

    /// Use the sample-data weather source instead of coordinates
    #[arg(long)]
    fallback: bool,
}

/// Handle the simulate command
pub async fn handle_simulate_command(args: SimulateArgs, config: &Config) -> Result<()> {
    let client = ThermostatClient::new(&config.server_url);

    let mut form = ReadingForm {
        room_temp: args.room_temp,
        outdoor_temp: args.outdoor_temp,
        preferred_temp: args.preferred_temp,
        time_of_day: args.time_of_day,
        occupancy: args.occupancy,
    };

    if args.outdoor_from_weather {
        let reading =
            super::weather::fetch_reading(&client, args.lat, args.lon, args.fallback).await?;
        println!(
            "{}",
            format!(
                "Using outdoor temperature {:.1}°C from {}",
                reading.temperature, reading.location
            )
            .dimmed()
        );
        form.outdoor_temp = Some(reading.temperature.to_string());
    }

    let reading = form.validate().map_err(|message| anyhow::anyhow!(message))?;

    let response = client
        .adjust(AdjustTemperatureRequest::from(reading))
        .await?;

    print_adjustment(&response);

    Ok(())
}

/// Print the adjustment result card
fn print_adjustment(response: &AdjustTemperatureResponse) {
    println!("{}", "AI Thermostat Adjustment".bold());
    println!(
        "  Adjusted setting:    {}",
        format!("{:.1}°C", response.adjusted_temp).bold()
    );
    println!(
        "  Change from current: {}°C",
        signed_change(response.change)
    );
    println!("  Action:              {}", action_word(response.change));

    println!();
    println!("{} {}", "AI Suggestion:".bold(), response.ai_suggestion);

    println!();
    println!("{}", "Energy Efficiency".bold());
    println!("  {}", render::efficiency_bar(response.energy_efficiency));

    println!();
    println!("{}", "Temperature Comparison".bold());
    print!(
        "{}",
        render::temperature_chart(
            response.current_temp,
            response.preferred_temp,
            response.adjusted_temp
        )
    );
}

/// Signed change string: positive changes carry an explicit plus
fn signed_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{:.1}", change)
    } else {
        format!("{:.1}", change)
    }
}

/// What the thermostat will do to reach the adjusted setting
fn action_word(change: f64) -> ColoredString {
    if change > 0.0 {
        "Heating".red()
    } else if change < 0.0 {
        "Cooling".cyan()
    } else {
        "Maintaining".green()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_change_formats_both_directions() {
        assert_eq!(signed_change(1.5), "+1.5");
        assert_eq!(signed_change(0.0), "+0.0");
        assert_eq!(signed_change(-0.5), "-0.5");
    }

    #[test]
    fn test_action_word_tracks_change_sign() {
        assert_eq!(action_word(2.0).to_string(), "Heating".red().to_string());
        assert_eq!(action_word(-2.0).to_string(), "Cooling".cyan().to_string());
        assert_eq!(action_word(0.0).to_string(), "Maintaining".green().to_string());
    }
}
