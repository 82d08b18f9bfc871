use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Create adjustments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS adjustments (
            id BIGSERIAL PRIMARY KEY,
            timestamp TIMESTAMPTZ NOT NULL,
            room_temp DOUBLE PRECISION NOT NULL,
            outdoor_temp DOUBLE PRECISION NOT NULL,
            preferred_temp DOUBLE PRECISION NOT NULL,
            adjusted_temp DOUBLE PRECISION NOT NULL,
            time_of_day VARCHAR(20) NOT NULL,
            occupancy BOOLEAN NOT NULL DEFAULT TRUE,
            energy_efficiency INTEGER NOT NULL,
            suggestion TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index for newest-first history listings
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_adjustments_timestamp ON adjustments(timestamp DESC)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}
