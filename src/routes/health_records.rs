use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::health_records::create_record::create_health_record;
use crate::handlers::health_records::delete_record::delete_health_record;
use crate::handlers::health_records::get_record::get_health_record;
use crate::handlers::health_records::list_records::list_health_records;
use crate::handlers::health_records::update_record::update_health_record;
use crate::models::health_record::HealthRecordPayload;

#[get("/healthdata")]
async fn list_health_data(pool: web::Data<PgPool>) -> HttpResponse {
    list_health_records(pool).await
}

#[get("/healthdata/{id}")]
async fn get_health_data(pool: web::Data<PgPool>, id: web::Path<i64>) -> HttpResponse {
    get_health_record(pool, id.into_inner()).await
}

#[post("/healthdata")]
async fn create_health_data(
    pool: web::Data<PgPool>,
    payload: web::Json<HealthRecordPayload>,
) -> HttpResponse {
    create_health_record(pool, payload).await
}

#[put("/healthdata/{id}")]
async fn update_health_data(
    pool: web::Data<PgPool>,
    id: web::Path<i64>,
    payload: web::Json<HealthRecordPayload>,
) -> HttpResponse {
    update_health_record(pool, id.into_inner(), payload).await
}

#[delete("/healthdata/{id}")]
async fn delete_health_data(pool: web::Data<PgPool>, id: web::Path<i64>) -> HttpResponse {
    delete_health_record(pool, id.into_inner()).await
}
