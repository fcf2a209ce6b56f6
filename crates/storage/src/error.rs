//! Typed error enum for the storage layer.
//!
//! Every store trait returns `Result<_, StorageError>` so callers can match
//! on specific failure modes (not found, pool exhaustion, backend errors)
//! instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for an expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Connection pool or blocking-task failure.
    #[error("pool error: {0}")]
    Pool(String),

    /// SQLite query or connection failure.
    #[cfg(feature = "sqlite")]
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// PostgreSQL query or connection failure.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
