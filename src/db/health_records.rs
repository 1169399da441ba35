use sqlx::{FromRow, PgPool};

use crate::errors::StorageError;
use crate::models::health_record::{HealthRecord, HealthRecordPayload};

/// Fetch every record. A row that fails to decode is logged and skipped
/// rather than failing the whole listing.
pub async fn list_records(pool: &PgPool) -> Result<Vec<HealthRecord>, StorageError> {
    let rows = sqlx::query(
        r#"
        SELECT id, date, weight, steps, sleep, calories, water
        FROM health_records
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        match HealthRecord::from_row(row) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Skipping health record row that failed to decode: {}", e);
            }
        }
    }

    Ok(records)
}

pub async fn get_record(pool: &PgPool, id: i64) -> Result<HealthRecord, StorageError> {
    let record = sqlx::query_as::<_, HealthRecord>(
        r#"
        SELECT id, date, weight, steps, sleep, calories, water
        FROM health_records
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    record.ok_or(StorageError::NotFound)
}

/// Insert a new record and return it with the database-assigned id.
pub async fn insert_record(
    pool: &PgPool,
    payload: &HealthRecordPayload,
) -> Result<HealthRecord, StorageError> {
    let record = sqlx::query_as::<_, HealthRecord>(
        r#"
        INSERT INTO health_records (date, weight, steps, sleep, calories, water)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, date, weight, steps, sleep, calories, water
        "#,
    )
    .bind(payload.date)
    .bind(payload.weight)
    .bind(payload.steps)
    .bind(payload.sleep)
    .bind(payload.calories)
    .bind(payload.water)
    .fetch_one(pool)
    .await?;

    Ok(record)
}

/// Replace all fields of the record matching `id`. Returns the number of
/// rows affected so callers can distinguish a missing record.
pub async fn update_record(
    pool: &PgPool,
    id: i64,
    payload: &HealthRecordPayload,
) -> Result<u64, StorageError> {
    let result = sqlx::query(
        r#"
        UPDATE health_records
        SET date = $1, weight = $2, steps = $3, sleep = $4, calories = $5, water = $6
        WHERE id = $7
        "#,
    )
    .bind(payload.date)
    .bind(payload.weight)
    .bind(payload.steps)
    .bind(payload.sleep)
    .bind(payload.calories)
    .bind(payload.water)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete the record matching `id`. Returns the number of rows affected.
pub async fn delete_record(pool: &PgPool, id: i64) -> Result<u64, StorageError> {
    let result = sqlx::query(
        r#"
        DELETE FROM health_records
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
