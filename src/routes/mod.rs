use actix_web::web;

pub mod backend_health;
pub mod health_records;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(health_records::list_health_data)
        .service(health_records::get_health_data)
        .service(health_records::create_health_data)
        .service(health_records::update_health_data)
        .service(health_records::delete_health_data);
}
