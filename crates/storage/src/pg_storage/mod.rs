//! PostgreSQL storage backend using sqlx.

mod customers;
mod orders;
mod products;

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use storefront_core::Product;

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new().max_connections(8).connect(database_url).await?;
        run_pg_migrations(&pool).await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

pub(crate) fn row_to_product(row: &PgRow) -> Result<Product, StorageError> {
    Ok(Product { id: row.try_get("id")?, description: row.try_get("description")? })
}

/// Escape special characters for LIKE/ILIKE pattern matching
pub(crate) fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}
