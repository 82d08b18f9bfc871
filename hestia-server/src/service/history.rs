//! History Service
//!
//! Business logic for the adjustment history.

use hestia_core::domain::adjustment::AdjustmentRecord;
use sqlx::PgPool;

use crate::repository::adjustment_repository;

/// Service error type
#[derive(Debug)]
pub enum HistoryError {
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for HistoryError {
    fn from(err: sqlx::Error) -> Self {
        HistoryError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 500;

/// List stored adjustments, newest first
pub async fn list(pool: &PgPool, limit: Option<u32>) -> Result<Vec<AdjustmentRecord>> {
    let records = adjustment_repository::list_recent(pool, effective_limit(limit)).await?;
    Ok(records)
}

fn effective_limit(limit: Option<u32>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as i64
}
