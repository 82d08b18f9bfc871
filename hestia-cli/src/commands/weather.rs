//! Weather command handler
//!
//! Looks up the current outdoor temperature through the service's weather
//! proxy, either for real coordinates or from the sample-data fallback.

use anyhow::Result;
use clap::Args;
use colored::*;
use hestia_client::{ClientError, ThermostatClient};
use hestia_core::domain::weather::WeatherReading;

use crate::config::Config;

/// Arguments for the weather command
#[derive(Args)]
pub struct WeatherArgs {
    /// Latitude in decimal degrees
    #[arg(long, requires = "lon")]
    lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, requires = "lat")]
    lon: Option<f64>,

    /// Use the sample-data source instead of coordinates
    #[arg(long)]
    fallback: bool,
}

/// Handle the weather command
pub async fn handle_weather_command(args: WeatherArgs, config: &Config) -> Result<()> {
    let client = ThermostatClient::new(&config.server_url);

    let reading = fetch_reading(&client, args.lat, args.lon, args.fallback).await?;

    println!(
        "{}",
        format!("✓ Current temperature in {}", reading.location)
            .green()
            .bold()
    );
    println!("  {}", format!("{:.1}°C", reading.temperature).bold());

    Ok(())
}

/// Fetch a weather reading, shared by the weather and simulate commands
pub async fn fetch_reading(
    client: &ThermostatClient,
    lat: Option<f64>,
    lon: Option<f64>,
    fallback: bool,
) -> Result<WeatherReading> {
    if fallback {
        return Ok(client.weather_fallback().await?);
    }

    let (lat, lon) = match (lat, lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => anyhow::bail!("provide --lat and --lon, or --fallback for sample data"),
    };

    match client.weather_at(lat, lon).await {
        Ok(reading) => Ok(reading),
        Err(err) => {
            if err.is_client_error() {
                println!(
                    "{}",
                    "Tip: pass --fallback to use sample data instead".dimmed()
                );
            }
            Err(anyhow::anyhow!(friendly_weather_error(&err)))
        }
    }
}

/// Map provider failures to actionable messages
fn friendly_weather_error(err: &ClientError) -> String {
    match err {
        ClientError::ApiError { status: 401, .. } => {
            "Weather API key invalid. New API keys may take a few hours to activate.".to_string()
        }
        ClientError::ApiError { status: 429, .. } => {
            "Weather service limit reached. Please try again later.".to_string()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_weather_error_maps_auth_and_rate_limits() {
        let err = ClientError::api_error(401, "Weather service error (401)");
        assert!(friendly_weather_error(&err).contains("API key invalid"));

        let err = ClientError::api_error(429, "Weather service error (429)");
        assert!(friendly_weather_error(&err).contains("limit reached"));
    }

    #[test]
    fn test_friendly_weather_error_passes_other_errors_through() {
        let err = ClientError::api_error(503, "Weather API key is not configured on the server");
        assert_eq!(
            friendly_weather_error(&err),
            "API error (status 503): Weather API key is not configured on the server"
        );
    }
}
