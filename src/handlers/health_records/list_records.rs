use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::health_records::list_records;

#[tracing::instrument(name = "List health records", skip(pool))]
pub async fn list_health_records(pool: web::Data<PgPool>) -> HttpResponse {
    match list_records(pool.get_ref()).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            tracing::error!("Failed to list health records: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
