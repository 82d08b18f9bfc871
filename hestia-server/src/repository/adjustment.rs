//! Adjustment Repository
//!
//! Handles all database operations for the adjustment history.

use hestia_core::domain::adjustment::{Adjustment, AdjustmentRecord, TimeOfDay};
use hestia_core::dto::adjust::AdjustTemperatureRequest;
use sqlx::PgPool;

/// Insert one adjustment into the history
pub async fn insert(
    pool: &PgPool,
    req: &AdjustTemperatureRequest,
    adjustment: &Adjustment,
) -> Result<AdjustmentRecord, sqlx::Error> {
    let now = chrono::Utc::now();

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO adjustments (
            timestamp, room_temp, outdoor_temp, preferred_temp, adjusted_temp,
            time_of_day, occupancy, energy_efficiency, suggestion
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(now)
    .bind(req.room_temp)
    .bind(req.outdoor_temp)
    .bind(req.preferred_temp)
    .bind(adjustment.adjusted_temp)
    .bind(req.time_of_day.as_str())
    .bind(req.occupancy)
    .bind(adjustment.energy_efficiency)
    .bind(&adjustment.suggestion)
    .fetch_one(pool)
    .await?;

    Ok(AdjustmentRecord {
        id,
        timestamp: now,
        room_temp: req.room_temp,
        outdoor_temp: req.outdoor_temp,
        preferred_temp: req.preferred_temp,
        adjusted_temp: adjustment.adjusted_temp,
        time_of_day: req.time_of_day,
        occupancy: req.occupancy,
        energy_efficiency: adjustment.energy_efficiency,
        suggestion: Some(adjustment.suggestion.clone()),
    })
}

/// List stored adjustments, newest first
pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<AdjustmentRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, AdjustmentRow>(
        r#"
        SELECT id, timestamp, room_temp, outdoor_temp, preferred_temp, adjusted_temp,
               time_of_day, occupancy, energy_efficiency, suggestion
        FROM adjustments
        ORDER BY timestamp DESC, id DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct AdjustmentRow {
    id: i64,
    timestamp: chrono::DateTime<chrono::Utc>,
    room_temp: f64,
    outdoor_temp: f64,
    preferred_temp: f64,
    adjusted_temp: f64,
    time_of_day: String,
    occupancy: bool,
    energy_efficiency: i32,
    suggestion: Option<String>,
}

impl From<AdjustmentRow> for AdjustmentRecord {
    fn from(row: AdjustmentRow) -> Self {
        // Unknown categories default to Morning
        let time_of_day = row.time_of_day.parse().unwrap_or(TimeOfDay::Morning);

        AdjustmentRecord {
            id: row.id,
            timestamp: row.timestamp,
            room_temp: row.room_temp,
            outdoor_temp: row.outdoor_temp,
            preferred_temp: row.preferred_temp,
            adjusted_temp: row.adjusted_temp,
            time_of_day,
            occupancy: row.occupancy,
            energy_efficiency: row.energy_efficiency,
            suggestion: row.suggestion,
        }
    }
}
