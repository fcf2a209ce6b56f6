//! Storage layer for storefront
//!
//! Relational persistence for customers, products, and orders behind
//! per-entity async store traits. SQLite (via a pooled synchronous
//! connection) is the default backend; PostgreSQL is available behind the
//! `postgres` feature.

mod backend;
mod error;
#[cfg(feature = "sqlite")]
mod migrations;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(feature = "sqlite")]
mod sqlite;
#[cfg(feature = "sqlite")]
mod sqlite_async;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
mod types;

pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStorage;
pub use types::Page;
