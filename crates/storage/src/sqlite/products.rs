use rusqlite::{Connection, params, params_from_iter};
use storefront_core::Product;

use super::{SqliteStorage, get_conn};
use crate::error::StorageError;

fn map_product(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product { id: row.get(0)?, description: row.get(1)? })
}

/// Bulk lookup used by both the trait method and order loading.
pub(crate) fn products_by_ids(
    conn: &Connection,
    ids: &[i64],
) -> rusqlite::Result<Vec<Product>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = vec!["?"; ids.len()].join(",");
    let sql = format!(
        "SELECT id, description FROM products WHERE id IN ({placeholders}) ORDER BY id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(ids.iter()), map_product)?;
    rows.collect()
}

impl SqliteStorage {
    /// Insert a product and return it with its store-assigned id.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn save_product(&self, description: &str) -> Result<Product, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute("INSERT INTO products (description) VALUES (?1)", params![description])?;
        let id = conn.last_insert_rowid();
        Ok(Product { id, description: description.to_owned() })
    }

    /// Get product by id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_product(&self, id: i64) -> Result<Option<Product>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare("SELECT id, description FROM products WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(map_product(row)?))
        } else {
            Ok(None)
        }
    }

    /// Get every product in insertion order.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn all_products(&self) -> Result<Vec<Product>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare("SELECT id, description FROM products ORDER BY id")?;
        let rows = stmt.query_map([], map_product)?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// Bulk lookup by id set. Missing ids are simply absent from the result.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn products_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(products_by_ids(&conn, ids)?)
    }
}
