//! SQLite storage implementation.
//!
//! All methods are synchronous; the async store traits are implemented on
//! top of them in `sqlite_async` via `spawn_blocking`.

// SQLite uses i64 for counts/limits, Rust uses usize/u32 - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust integer conversions are safe within DB row counts"
)]
#![allow(
    clippy::arithmetic_side_effects,
    reason = "pagination offsets are bounded by SQLite row counts"
)]

mod customers;
mod orders;
mod products;

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping a SQLite connection pool
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Connection initializer for concurrency settings and FK enforcement
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    std::env::var("STOREFRONT_DB_POOL_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(8)
}

impl SqliteStorage {
    /// Create a new storage instance with a SQLite connection pool.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder()
            .max_size(pool_size)
            .build(manager)
            .map_err(|e| StorageError::Pool(e.to_string()))?;

        // Run migrations on first connection
        let conn = pool.get().map_err(|e| StorageError::Pool(e.to_string()))?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(pool_size = pool_size, "SQLite storage initialized");

        Ok(Self { pool })
    }
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    pool.get().map_err(|e| StorageError::Pool(format!("failed to get connection from pool: {e}")))
}

/// Escape special characters for LIKE pattern matching
pub(crate) fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}
