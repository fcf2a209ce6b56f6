//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use storefront_core::{Customer, Order, Product};

use crate::error::StorageError;
use crate::traits::{CustomerStore, OrderStore, ProductStore};
use crate::types::Page;

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::SqliteStorage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::SqliteStorage),
    #[cfg(feature = "postgres")]
    Postgres(crate::PgStorage),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::SqliteStorage::new(db_path)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url).await?))
    }
}

// ── CustomerStore ────────────────────────────────────────────────

#[async_trait]
impl CustomerStore for StorageBackend {
    async fn save_customer(&self, name: &str) -> Result<Customer, StorageError> {
        dispatch!(self, CustomerStore, save_customer(name))
    }

    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, StorageError> {
        dispatch!(self, CustomerStore, get_customer(id))
    }

    async fn all_customers(&self) -> Result<Vec<Customer>, StorageError> {
        dispatch!(self, CustomerStore, all_customers())
    }

    async fn customers_page(&self, page: u32, size: u32) -> Result<Page<Customer>, StorageError> {
        dispatch!(self, CustomerStore, customers_page(page, size))
    }

    async fn search_customers(&self, query: &str) -> Result<Vec<Customer>, StorageError> {
        dispatch!(self, CustomerStore, search_customers(query))
    }
}

// ── ProductStore ─────────────────────────────────────────────────

#[async_trait]
impl ProductStore for StorageBackend {
    async fn save_product(&self, description: &str) -> Result<Product, StorageError> {
        dispatch!(self, ProductStore, save_product(description))
    }

    async fn get_product(&self, id: i64) -> Result<Option<Product>, StorageError> {
        dispatch!(self, ProductStore, get_product(id))
    }

    async fn all_products(&self) -> Result<Vec<Product>, StorageError> {
        dispatch!(self, ProductStore, all_products())
    }

    async fn products_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, StorageError> {
        dispatch!(self, ProductStore, products_by_ids(ids))
    }
}

// ── OrderStore ───────────────────────────────────────────────────

#[async_trait]
impl OrderStore for StorageBackend {
    async fn save_order(
        &self,
        description: &str,
        customer_id: i64,
        product_ids: &[i64],
    ) -> Result<Order, StorageError> {
        dispatch!(self, OrderStore, save_order(description, customer_id, product_ids))
    }

    async fn get_order(&self, id: i64) -> Result<Option<Order>, StorageError> {
        dispatch!(self, OrderStore, get_order(id))
    }

    async fn all_orders(&self) -> Result<Vec<Order>, StorageError> {
        dispatch!(self, OrderStore, all_orders())
    }
}
