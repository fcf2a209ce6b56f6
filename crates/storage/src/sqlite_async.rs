//! Async trait implementations for `SqliteStorage` via `spawn_blocking`.

use async_trait::async_trait;
use storefront_core::{Customer, Order, Product};

use crate::error::StorageError;
use crate::sqlite::SqliteStorage;
use crate::traits::{CustomerStore, OrderStore, ProductStore};
use crate::types::Page;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Pool(format!("spawn_blocking join error: {e}")))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@str arg`   - `.to_owned()` a `&str`, pass as `&arg`
/// - `@slice arg` - `.to_vec()` a `&[T]`, pass as `&arg`
/// - `@val arg`   - move directly (Copy types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture slice $arg:ident) => { let $arg = $arg.to_vec(); };
    (@capture val $arg:ident) => { };
    (@pass str $arg:ident) => { &$arg };
    (@pass slice $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

#[async_trait]
impl CustomerStore for SqliteStorage {
    async fn save_customer(&self, name: &str) -> Result<Customer, StorageError> {
        delegate!(self, save_customer, @str name)
    }
    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, StorageError> {
        delegate!(self, get_customer, @val id)
    }
    async fn all_customers(&self) -> Result<Vec<Customer>, StorageError> {
        delegate!(self, all_customers)
    }
    async fn customers_page(&self, page: u32, size: u32) -> Result<Page<Customer>, StorageError> {
        delegate!(self, customers_page, @val page, @val size)
    }
    async fn search_customers(&self, query: &str) -> Result<Vec<Customer>, StorageError> {
        delegate!(self, search_customers, @str query)
    }
}

#[async_trait]
impl ProductStore for SqliteStorage {
    async fn save_product(&self, description: &str) -> Result<Product, StorageError> {
        delegate!(self, save_product, @str description)
    }
    async fn get_product(&self, id: i64) -> Result<Option<Product>, StorageError> {
        delegate!(self, get_product, @val id)
    }
    async fn all_products(&self) -> Result<Vec<Product>, StorageError> {
        delegate!(self, all_products)
    }
    async fn products_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, StorageError> {
        delegate!(self, products_by_ids, @slice ids)
    }
}

#[async_trait]
impl OrderStore for SqliteStorage {
    async fn save_order(
        &self,
        description: &str,
        customer_id: i64,
        product_ids: &[i64],
    ) -> Result<Order, StorageError> {
        delegate!(self, save_order, @str description, @val customer_id, @slice product_ids)
    }
    async fn get_order(&self, id: i64) -> Result<Option<Order>, StorageError> {
        delegate!(self, get_order, @val id)
    }
    async fn all_orders(&self) -> Result<Vec<Order>, StorageError> {
        delegate!(self, all_orders)
    }
}
