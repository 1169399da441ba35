use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `health_records` table: a single entry's metrics.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub weight: f64,
    pub steps: i32,
    pub sleep: f64,
    pub calories: i32,
    pub water: f64,
}

/// Client-submitted record body for create and update. The id is assigned
/// by the database and never accepted from the client. Every field is
/// required; a missing or mistyped field fails the decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecordPayload {
    pub date: DateTime<Utc>,
    pub weight: f64,
    pub steps: i32,
    pub sleep: f64,
    pub calories: i32,
    pub water: f64,
}
