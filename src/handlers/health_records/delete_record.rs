use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::health_records::delete_record;

#[tracing::instrument(name = "Delete health record", skip(pool), fields(record_id = %id))]
pub async fn delete_health_record(pool: web::Data<PgPool>, id: i64) -> HttpResponse {
    match delete_record(pool.get_ref(), id).await {
        Ok(0) => {
            tracing::info!("No health record with id {} to delete", id);
            HttpResponse::NotFound().finish()
        }
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) => {
            tracing::error!("Failed to delete health record {}: {}", id, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
