pub mod backend_health;
pub mod health_records;
