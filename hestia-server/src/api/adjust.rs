//! Adjustment API Handlers
//!
//! HTTP endpoint for computing and recording thermostat adjustments.

use axum::{Json, extract::State};
use hestia_core::dto::adjust::{AdjustTemperatureRequest, AdjustTemperatureResponse};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::adjust_service;

/// POST /api/adjust-temperature
/// Compute an adjusted setting for the submitted reading and record it
pub async fn adjust_temperature(
    State(state): State<AppState>,
    Json(req): Json<AdjustTemperatureRequest>,
) -> ApiResult<Json<AdjustTemperatureResponse>> {
    tracing::info!(
        "Computing adjustment: room {}°C, preferred {}°C, {}",
        req.room_temp,
        req.preferred_temp,
        req.time_of_day
    );

    let response = adjust_service::simulate(&state.pool, req)
        .await
        .map_err(|e| match e {
            adjust_service::AdjustError::ValidationError(msg) => ApiError::BadRequest(msg),
            adjust_service::AdjustError::DatabaseError(err) => ApiError::DatabaseError(err),
        })?;

    Ok(Json(response))
}
