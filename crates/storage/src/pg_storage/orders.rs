//! OrderStore implementation for PgStorage.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::Row;
use storefront_core::{Order, Product};

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::OrderStore;

impl PgStorage {
    async fn products_for_order(&self, order_id: i64) -> Result<Vec<Product>, StorageError> {
        let rows = sqlx::query(
            "SELECT p.id, p.description FROM products p
               JOIN order_products op ON op.product_id = p.id
               WHERE op.order_id = $1 ORDER BY p.id",
        )
        .bind(order_id)
        .fetch_all(self.pool())
        .await?;
        rows.iter()
            .map(|r| Ok(Product { id: r.try_get("id")?, description: r.try_get("description")? }))
            .collect()
    }

    async fn products_by_order(&self) -> Result<HashMap<i64, Vec<Product>>, StorageError> {
        let rows = sqlx::query(
            "SELECT op.order_id, p.id, p.description FROM products p
               JOIN order_products op ON op.product_id = p.id
               ORDER BY p.id",
        )
        .fetch_all(self.pool())
        .await?;
        let mut map: HashMap<i64, Vec<Product>> = HashMap::new();
        for row in rows {
            let order_id: i64 = row.try_get("order_id")?;
            let product =
                Product { id: row.try_get("id")?, description: row.try_get("description")? };
            map.entry(order_id).or_default().push(product);
        }
        Ok(map)
    }
}

#[async_trait]
impl OrderStore for PgStorage {
    async fn save_order(
        &self,
        description: &str,
        customer_id: i64,
        product_ids: &[i64],
    ) -> Result<Order, StorageError> {
        let mut tx = self.pool().begin().await?;
        let row = sqlx::query(
            "INSERT INTO orders (description, customer_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(description)
        .bind(customer_id)
        .fetch_one(&mut *tx)
        .await?;
        let id: i64 = row.try_get("id")?;
        for product_id in product_ids {
            sqlx::query(
                "INSERT INTO order_products (order_id, product_id) VALUES ($1, $2)
                   ON CONFLICT DO NOTHING",
            )
            .bind(id)
            .bind(product_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        let products = self.products_for_order(id).await?;
        Ok(Order { id, description: description.to_owned(), customer_id, products })
    }

    async fn get_order(&self, id: i64) -> Result<Option<Order>, StorageError> {
        let row = sqlx::query("SELECT id, description, customer_id FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        match row {
            Some(row) => {
                let id: i64 = row.try_get("id")?;
                let products = self.products_for_order(id).await?;
                Ok(Some(Order {
                    id,
                    description: row.try_get("description")?,
                    customer_id: row.try_get("customer_id")?,
                    products,
                }))
            },
            None => Ok(None),
        }
    }

    async fn all_orders(&self) -> Result<Vec<Order>, StorageError> {
        let mut product_map = self.products_by_order().await?;
        let rows = sqlx::query("SELECT id, description, customer_id FROM orders ORDER BY id")
            .fetch_all(self.pool())
            .await?;
        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.try_get("id")?;
            orders.push(Order {
                id,
                description: row.try_get("description")?,
                customer_id: row.try_get("customer_id")?,
                products: product_map.remove(&id).unwrap_or_default(),
            });
        }
        Ok(orders)
    }
}
