use thiserror::Error;

/// Failures surfaced by the storage gateway. Handlers map `NotFound` to 404
/// and `Database` to 500 at the response boundary; decode failures never
/// reach this type (the JSON extractor rejects them with 400).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no matching health record")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
