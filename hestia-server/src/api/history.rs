//! History API Handlers
//!
//! HTTP endpoint for the stored adjustment history.

use axum::{
    Json,
    extract::{Query, State},
};
use hestia_core::dto::history::HistoryResponse;
use serde::Deserialize;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::history_service;

/// Query parameters for history listings
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
}

/// GET /api/history
/// List stored adjustments, newest first
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<HistoryResponse>> {
    tracing::debug!("Listing adjustment history");

    let history = history_service::list(&state.pool, query.limit)
        .await
        .map_err(|e| match e {
            history_service::HistoryError::DatabaseError(err) => ApiError::DatabaseError(err),
        })?;

    Ok(Json(HistoryResponse { history }))
}
