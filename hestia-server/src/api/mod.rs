//! API Module
//!
//! HTTP API layer for the thermostat service.
//! Each submodule handles endpoints for a specific domain.

pub mod adjust;
pub mod error;
pub mod health;
pub mod history;
pub mod weather;

use axum::{
    Router,
    routing::{get, post},
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::service::weather::WeatherConfig;

/// Shared state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub weather: WeatherConfig,
    pub http: reqwest::Client,
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Thermostat endpoints
        .route("/api/adjust-temperature", post(adjust::adjust_temperature))
        .route("/api/history", get(history::get_history))
        .route("/api/weather", get(weather::get_weather))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
