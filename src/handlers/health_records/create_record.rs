use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::health_records::insert_record;
use crate::models::health_record::HealthRecordPayload;

#[tracing::instrument(name = "Create health record", skip(pool, payload), fields(date = %payload.date))]
pub async fn create_health_record(
    pool: web::Data<PgPool>,
    payload: web::Json<HealthRecordPayload>,
) -> HttpResponse {
    match insert_record(pool.get_ref(), &payload).await {
        Ok(record) => {
            tracing::info!("Created health record {}", record.id);
            HttpResponse::Created().json(record)
        }
        Err(e) => {
            tracing::error!("Failed to insert health record: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
