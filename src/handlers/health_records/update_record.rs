use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::health_records::update_record;
use crate::models::health_record::HealthRecordPayload;

#[tracing::instrument(name = "Update health record", skip(pool, payload), fields(record_id = %id))]
pub async fn update_health_record(
    pool: web::Data<PgPool>,
    id: i64,
    payload: web::Json<HealthRecordPayload>,
) -> HttpResponse {
    match update_record(pool.get_ref(), id, &payload).await {
        Ok(0) => {
            tracing::info!("No health record with id {} to update", id);
            HttpResponse::NotFound().finish()
        }
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) => {
            tracing::error!("Failed to update health record {}: {}", id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
