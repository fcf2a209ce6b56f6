//! Store trait abstractions.
//!
//! Defines async per-entity traits for the persistence operations the
//! service layer consumes, enabling SQLite-default with PostgreSQL via
//! enum dispatch.

use async_trait::async_trait;
use storefront_core::{Customer, Order, Product};

use crate::error::StorageError;
use crate::types::Page;

/// Customer persistence operations.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a customer and return it with its store-assigned id.
    async fn save_customer(&self, name: &str) -> Result<Customer, StorageError>;

    /// Get customer by id.
    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, StorageError>;

    /// Get every customer, in store order.
    async fn all_customers(&self) -> Result<Vec<Customer>, StorageError>;

    /// Get one zero-based page of customers with pagination metadata.
    async fn customers_page(&self, page: u32, size: u32) -> Result<Page<Customer>, StorageError>;

    /// Case-insensitive substring match on customer name.
    async fn search_customers(&self, query: &str) -> Result<Vec<Customer>, StorageError>;
}

/// Product persistence operations.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a product and return it with its store-assigned id.
    async fn save_product(&self, description: &str) -> Result<Product, StorageError>;

    /// Get product by id.
    async fn get_product(&self, id: i64) -> Result<Option<Product>, StorageError>;

    /// Get every product, in store order.
    async fn all_products(&self) -> Result<Vec<Product>, StorageError>;

    /// Bulk lookup by id set. Ids with no matching row are absent from the
    /// result; no error is raised for partial misses.
    async fn products_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, StorageError>;
}

/// Order persistence operations.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert an order plus its product associations in one transaction and
    /// return the persisted aggregate with products populated.
    async fn save_order(
        &self,
        description: &str,
        customer_id: i64,
        product_ids: &[i64],
    ) -> Result<Order, StorageError>;

    /// Get order by id, with its product set.
    async fn get_order(&self, id: i64) -> Result<Option<Order>, StorageError>;

    /// Get every order, in store order.
    async fn all_orders(&self) -> Result<Vec<Order>, StorageError>;
}
