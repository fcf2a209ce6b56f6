//! CustomerStore implementation for PgStorage.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::Row;
use storefront_core::Customer;

use super::{PgStorage, escape_like_pattern};
use crate::error::StorageError;
use crate::traits::CustomerStore;
use crate::types::Page;

impl PgStorage {
    async fn order_ids_for(&self, customer_id: i64) -> Result<Vec<i64>, StorageError> {
        let rows = sqlx::query("SELECT id FROM orders WHERE customer_id = $1 ORDER BY id")
            .bind(customer_id)
            .fetch_all(self.pool())
            .await?;
        rows.iter().map(|r| Ok(r.try_get("id")?)).collect()
    }

    async fn order_ids_by_customer(&self) -> Result<HashMap<i64, Vec<i64>>, StorageError> {
        let rows = sqlx::query("SELECT id, customer_id FROM orders ORDER BY id")
            .fetch_all(self.pool())
            .await?;
        let mut map: HashMap<i64, Vec<i64>> = HashMap::new();
        for row in rows {
            let order_id: i64 = row.try_get("id")?;
            let customer_id: i64 = row.try_get("customer_id")?;
            map.entry(customer_id).or_default().push(order_id);
        }
        Ok(map)
    }

    async fn customers_with_orders(
        &self,
        rows: Vec<sqlx::postgres::PgRow>,
    ) -> Result<Vec<Customer>, StorageError> {
        let mut order_map = self.order_ids_by_customer().await?;
        let mut customers = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.try_get("id")?;
            customers.push(Customer {
                id,
                name: row.try_get("name")?,
                order_ids: order_map.remove(&id).unwrap_or_default(),
            });
        }
        Ok(customers)
    }
}

#[async_trait]
impl CustomerStore for PgStorage {
    async fn save_customer(&self, name: &str) -> Result<Customer, StorageError> {
        let row = sqlx::query("INSERT INTO customers (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(self.pool())
            .await?;
        let id: i64 = row.try_get("id")?;
        Ok(Customer { id, name: name.to_owned(), order_ids: Vec::new() })
    }

    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, StorageError> {
        let row = sqlx::query("SELECT id, name FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        match row {
            Some(row) => {
                let id: i64 = row.try_get("id")?;
                let order_ids = self.order_ids_for(id).await?;
                Ok(Some(Customer { id, name: row.try_get("name")?, order_ids }))
            },
            None => Ok(None),
        }
    }

    async fn all_customers(&self) -> Result<Vec<Customer>, StorageError> {
        let rows = sqlx::query("SELECT id, name FROM customers ORDER BY id")
            .fetch_all(self.pool())
            .await?;
        self.customers_with_orders(rows).await
    }

    async fn customers_page(&self, page: u32, size: u32) -> Result<Page<Customer>, StorageError> {
        let total: i64 = sqlx::query("SELECT COUNT(*) AS total FROM customers")
            .fetch_one(self.pool())
            .await?
            .try_get("total")?;
        let rows = sqlx::query("SELECT id, name FROM customers ORDER BY id LIMIT $1 OFFSET $2")
            .bind(i64::from(size))
            .bind(i64::from(page) * i64::from(size))
            .fetch_all(self.pool())
            .await?;
        let content = self.customers_with_orders(rows).await?;
        Ok(Page::new(content, page, size, total.unsigned_abs()))
    }

    async fn search_customers(&self, query: &str) -> Result<Vec<Customer>, StorageError> {
        let pattern = format!("%{}%", escape_like_pattern(query));
        let rows = sqlx::query("SELECT id, name FROM customers WHERE name ILIKE $1 ORDER BY id")
            .bind(pattern)
            .fetch_all(self.pool())
            .await?;
        self.customers_with_orders(rows).await
    }
}
