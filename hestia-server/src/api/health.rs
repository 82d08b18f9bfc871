//! Health Check API Handler
//!
//! Liveness endpoint reporting database connectivity.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::api::AppState;

/// GET /health
/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let database_connected = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();

    let status = if database_connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": if database_connected { "ok" } else { "degraded" },
        "database": { "connected": database_connected },
    });

    (status, Json(body))
}
