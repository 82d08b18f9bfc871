//! Adjustment-history API endpoint

use crate::ThermostatClient;
use crate::error::Result;
use hestia_core::domain::adjustment::AdjustmentRecord;
use hestia_core::dto::history::HistoryResponse;

impl ThermostatClient {
    /// Fetch the adjustment history, newest first
    ///
    /// # Arguments
    /// * `limit` - Optional cap on the number of entries returned
    ///
    /// # Returns
    /// The stored adjustment records in the order the server returned them.
    pub async fn history(&self, limit: Option<u32>) -> Result<Vec<AdjustmentRecord>> {
        let url = format!("{}/api/history", self.base_url);
        let mut request = self.client.get(&url);

        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let response = request.send().await?;
        let envelope: HistoryResponse = self.handle_response(response).await?;

        Ok(envelope.history)
    }
}
