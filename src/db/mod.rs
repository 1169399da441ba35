pub mod health_records;
