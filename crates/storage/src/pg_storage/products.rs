//! ProductStore implementation for PgStorage.

use async_trait::async_trait;
use sqlx::Row;
use storefront_core::Product;

use super::{PgStorage, row_to_product};
use crate::error::StorageError;
use crate::traits::ProductStore;

#[async_trait]
impl ProductStore for PgStorage {
    async fn save_product(&self, description: &str) -> Result<Product, StorageError> {
        let row = sqlx::query("INSERT INTO products (description) VALUES ($1) RETURNING id")
            .bind(description)
            .fetch_one(self.pool())
            .await?;
        let id: i64 = row.try_get("id")?;
        Ok(Product { id, description: description.to_owned() })
    }

    async fn get_product(&self, id: i64) -> Result<Option<Product>, StorageError> {
        let row = sqlx::query("SELECT id, description FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        row.map(|r| row_to_product(&r)).transpose()
    }

    async fn all_products(&self) -> Result<Vec<Product>, StorageError> {
        let rows = sqlx::query("SELECT id, description FROM products ORDER BY id")
            .fetch_all(self.pool())
            .await?;
        rows.iter().map(row_to_product).collect()
    }

    async fn products_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, StorageError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows =
            sqlx::query("SELECT id, description FROM products WHERE id = ANY($1) ORDER BY id")
                .bind(ids)
                .fetch_all(self.pool())
                .await?;
        rows.iter().map(row_to_product).collect()
    }
}
