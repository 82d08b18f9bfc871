//! Temperature-adjustment API endpoint

use crate::ThermostatClient;
use crate::error::Result;
use hestia_core::dto::adjust::{AdjustTemperatureRequest, AdjustTemperatureResponse};

impl ThermostatClient {
    /// Compute an adjusted thermostat setting for the given reading
    ///
    /// # Arguments
    /// * `req` - The adjustment request (temperatures, time of day, occupancy)
    ///
    /// # Returns
    /// The adjusted setting, the change relative to the room temperature,
    /// the energy-efficiency score and the AI suggestion.
    pub async fn adjust(&self, req: AdjustTemperatureRequest) -> Result<AdjustTemperatureResponse> {
        let url = format!("{}/api/adjust-temperature", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }
}
