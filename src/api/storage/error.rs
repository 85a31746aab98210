//! Storage error types for the API storage backends.

use thiserror::Error;

/// Storage operation errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A record with the same business id already exists.
    #[error("{kind} with id '{id}' already exists")]
    Duplicate { kind: &'static str, id: String },
    /// Database connection or migration error
    #[error("connection error: {0}")]
    Connection(String),
    /// Database query error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Stored document could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
