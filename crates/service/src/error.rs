//! Typed error enum for the service layer.
//!
//! Every failure category in the request pipeline maps to exactly one
//! variant, so the HTTP boundary can classify by kind instead of call site.

use storefront_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying validation, reference-resolution, and
/// storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, pool, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// One or more required-field constraints violated on the request body.
    /// Each entry is `"<field>: <reason>"`.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// A foreign-key reference inside a creation payload did not resolve.
    /// Distinct from not-found: it concerns the payload, not a direct lookup.
    #[error("{0}")]
    InvalidReference(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }
}
