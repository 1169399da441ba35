use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::health_records::get_record;
use crate::errors::StorageError;

#[tracing::instrument(name = "Get health record", skip(pool), fields(record_id = %id))]
pub async fn get_health_record(pool: web::Data<PgPool>, id: i64) -> HttpResponse {
    match get_record(pool.get_ref(), id).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(StorageError::NotFound) => {
            tracing::info!("No health record with id {}", id);
            HttpResponse::NotFound().finish()
        }
        Err(e) => {
            tracing::error!("Failed to fetch health record {}: {}", id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
