//! History DTOs for the thermostat API

use serde::{Deserialize, Serialize};

use crate::domain::adjustment::AdjustmentRecord;

/// Envelope returned by the history endpoint
///
/// Entries are ordered newest first; consumers display them in the order
/// received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<AdjustmentRecord>,
}
