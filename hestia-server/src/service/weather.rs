//! Weather Service
//!
//! Fetches current conditions from the upstream weather provider and
//! generates sample readings for fallback mode.

use hestia_core::domain::weather::WeatherReading;
use rand::Rng;
use serde::Deserialize;

use crate::service::adjust::round1;

/// Upstream provider configuration
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl WeatherConfig {
    /// Read provider settings from the environment
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("WEATHER_API_KEY").ok(),
            base_url: std::env::var("WEATHER_API_URL").unwrap_or_else(|_| {
                "https://api.openweathermap.org/data/2.5/weather".to_string()
            }),
        }
    }
}

/// Service error type
#[derive(Debug)]
pub enum WeatherError {
    MissingApiKey,
    RequestFailed(reqwest::Error),
    Upstream { status: u16, message: String },
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::RequestFailed(err)
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;

/// Response shape of the upstream current-weather endpoint
#[derive(Debug, Deserialize)]
struct UpstreamWeather {
    main: UpstreamMain,
    name: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamMain {
    temp: f64,
}

/// Fetch the current conditions for the given coordinates
pub async fn fetch(
    http: &reqwest::Client,
    config: &WeatherConfig,
    lat: f64,
    lon: f64,
) -> Result<WeatherReading> {
    let api_key = config.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

    let response = http
        .get(&config.base_url)
        .query(&[
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("units", "metric".to_string()),
            ("appid", api_key.to_string()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(WeatherError::Upstream {
            status: status.as_u16(),
            message: upstream_error_message(status.as_u16(), &body),
        });
    }

    let upstream: UpstreamWeather = response.json().await?;

    Ok(WeatherReading {
        temperature: round1(upstream.main.temp),
        location: upstream.name,
    })
}

/// Generate a plausible sample reading without contacting the provider
pub fn sample_reading() -> WeatherReading {
    let temperature = rand::thread_rng().gen_range(80..=280) as f64 / 10.0;

    WeatherReading {
        temperature,
        location: "Simulated Weather Station".to_string(),
    }
}

/// Build the error message for a failed upstream call
///
/// The provider reports failures as `{"cod": ..., "message": "..."}`; the
/// message is folded into ours when present.
fn upstream_error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct UpstreamError {
        message: String,
    }

    match serde_json::from_str::<UpstreamError>(body) {
        Ok(err) => format!("Weather service error ({}): {}", status, err.message),
        Err(_) => format!("Weather service error ({})", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_reading_stays_in_plausible_range() {
        for _ in 0..100 {
            let reading = sample_reading();
            assert!((8.0..=28.0).contains(&reading.temperature));
            assert_eq!(reading.location, "Simulated Weather Station");
        }
    }

    #[test]
    fn test_upstream_error_message_includes_provider_detail() {
        let message = upstream_error_message(401, r#"{"cod": 401, "message": "Invalid API key"}"#);
        assert_eq!(message, "Weather service error (401): Invalid API key");
    }

    #[test]
    fn test_upstream_error_message_without_parseable_body() {
        let message = upstream_error_message(500, "<html>oops</html>");
        assert_eq!(message, "Weather service error (500)");
    }
}
