//! Weather API endpoints

use crate::ThermostatClient;
use crate::error::Result;
use hestia_core::domain::weather::WeatherReading;

impl ThermostatClient {
    /// Fetch the current outdoor temperature for the given coordinates
    ///
    /// # Arguments
    /// * `lat` - Latitude in decimal degrees
    /// * `lon` - Longitude in decimal degrees
    ///
    /// # Returns
    /// The current temperature and a display name for the location.
    pub async fn weather_at(&self, lat: f64, lon: f64) -> Result<WeatherReading> {
        let url = format!("{}/api/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("lat", lat), ("lon", lon)])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fetch a sample weather reading without contacting the upstream provider
    ///
    /// Used when no coordinates are available or the provider is unreachable.
    pub async fn weather_fallback(&self) -> Result<WeatherReading> {
        let url = format!("{}/api/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("fallback", "true")])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
