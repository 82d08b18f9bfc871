//! Hestia HTTP Client
//!
//! A simple, type-safe HTTP client for the Hestia thermostat API.
//!
//! This crate provides a unified interface for clients of the thermostat
//! service: computing adjustments, reading the adjustment history and
//! querying the weather proxy.
//!
//! # Example
//!
//! ```no_run
//! use hestia_client::ThermostatClient;
//! use hestia_core::domain::adjustment::TimeOfDay;
//! use hestia_core::dto::adjust::AdjustTemperatureRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ThermostatClient::new("http://localhost:8080");
//!
//!     let result = client.adjust(AdjustTemperatureRequest {
//!         room_temp: 22.0,
//!         outdoor_temp: 20.0,
//!         preferred_temp: 23.0,
//!         time_of_day: TimeOfDay::Morning,
//!         occupancy: true,
//!     }).await?;
//!
//!     println!("Adjusted setting: {}", result.adjusted_temp);
//!     Ok(())
//! }
//! ```

pub mod error;

mod adjust;
mod history;
mod weather;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Hestia thermostat API
///
/// This client provides methods for all thermostat API endpoints, organized
/// into logical groups:
/// - Temperature adjustment
/// - Adjustment history
/// - Weather lookups (by coordinates or the sample-data fallback)
#[derive(Debug, Clone)]
pub struct ThermostatClient {
    /// Base URL of the thermostat service (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl ThermostatClient {
    /// Create a new thermostat client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the thermostat API (e.g., "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new thermostat client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use hestia_client::ThermostatClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ThermostatClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the thermostat service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handling
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    /// Error responses carry a `{"error": "..."}` body; the message is
    /// extracted from it when present.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(
                status.as_u16(),
                extract_error_message(&error_text),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

/// Pull the message out of an `{"error": "..."}` body, falling back to the
/// raw body text for anything else.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ThermostatClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ThermostatClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = ThermostatClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_extract_error_message_from_json_body() {
        let message = extract_error_message(r#"{"error":"Weather service error (401)"}"#);
        assert_eq!(message, "Weather service error (401)");
    }

    #[test]
    fn test_extract_error_message_falls_back_to_raw_body() {
        let message = extract_error_message("upstream exploded");
        assert_eq!(message, "upstream exploded");
    }
}
