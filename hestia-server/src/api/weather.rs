//! Weather API Handlers
//!
//! HTTP endpoint proxying the upstream weather provider.

use axum::{
    Json,
    extract::{Query, State},
};
use hestia_core::domain::weather::WeatherReading;
use serde::Deserialize;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::weather_service;

/// Query parameters for weather lookups
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default)]
    pub fallback: bool,
}

/// GET /api/weather
/// Current conditions for the given coordinates, or a sample reading with
/// fallback=true
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> ApiResult<Json<WeatherReading>> {
    if query.fallback {
        tracing::debug!("Serving sample weather reading");
        return Ok(Json(weather_service::sample_reading()));
    }

    let (lat, lon) = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return Err(ApiError::BadRequest(
                "lat and lon query parameters are required unless fallback=true".to_string(),
            ));
        }
    };

    let reading = weather_service::fetch(&state.http, &state.weather, lat, lon)
        .await
        .map_err(|e| match e {
            weather_service::WeatherError::MissingApiKey => ApiError::ServiceUnavailable(
                "Weather API key is not configured on the server".to_string(),
            ),
            weather_service::WeatherError::RequestFailed(err) => {
                tracing::error!("Weather provider unreachable: {}", err);
                ApiError::Upstream {
                    status: 502,
                    message: "Weather service unreachable".to_string(),
                }
            }
            weather_service::WeatherError::Upstream { status, message } => {
                ApiError::Upstream { status, message }
            }
        })?;

    Ok(Json(reading))
}
