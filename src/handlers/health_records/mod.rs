pub mod create_record;
pub mod delete_record;
pub mod get_record;
pub mod list_records;
pub mod update_record;
