pub mod health_record;
