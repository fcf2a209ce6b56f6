use std::collections::HashMap;

use rusqlite::{Connection, params};
use storefront_core::{Order, Product};

use super::{SqliteStorage, get_conn};
use crate::error::StorageError;

/// Products for one order via the junction table.
fn products_for_order(conn: &Connection, order_id: i64) -> rusqlite::Result<Vec<Product>> {
    let mut stmt = conn.prepare(
        "SELECT p.id, p.description FROM products p
           JOIN order_products op ON op.product_id = p.id
           WHERE op.order_id = ?1 ORDER BY p.id",
    )?;
    let rows = stmt.query_map(params![order_id], |row| {
        Ok(Product { id: row.get(0)?, description: row.get(1)? })
    })?;
    rows.collect()
}

/// Products grouped by order, for list operations.
fn products_by_order(conn: &Connection) -> rusqlite::Result<HashMap<i64, Vec<Product>>> {
    let mut stmt = conn.prepare(
        "SELECT op.order_id, p.id, p.description FROM products p
           JOIN order_products op ON op.product_id = p.id
           ORDER BY p.id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, Product { id: row.get(1)?, description: row.get(2)? }))
    })?;
    let mut map: HashMap<i64, Vec<Product>> = HashMap::new();
    for row in rows {
        let (order_id, product) = row?;
        map.entry(order_id).or_default().push(product);
    }
    Ok(map)
}

impl SqliteStorage {
    /// Insert an order plus its product associations in one transaction and
    /// return the persisted aggregate.
    ///
    /// # Errors
    /// Returns error if the insert fails; nothing is written on failure.
    pub fn save_order(
        &self,
        description: &str,
        customer_id: i64,
        product_ids: &[i64],
    ) -> Result<Order, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO orders (description, customer_id) VALUES (?1, ?2)",
            params![description, customer_id],
        )?;
        let id = tx.last_insert_rowid();
        for product_id in product_ids {
            tx.execute(
                "INSERT OR IGNORE INTO order_products (order_id, product_id) VALUES (?1, ?2)",
                params![id, product_id],
            )?;
        }
        tx.commit()?;

        let products = products_for_order(&conn, id)?;
        Ok(Order { id, description: description.to_owned(), customer_id, products })
    }

    /// Get order by id, with its product set.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_order(&self, id: i64) -> Result<Option<Order>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare("SELECT id, description, customer_id FROM orders WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            let id: i64 = row.get(0)?;
            let description: String = row.get(1)?;
            let customer_id: i64 = row.get(2)?;
            let products = products_for_order(&conn, id)?;
            Ok(Some(Order { id, description, customer_id, products }))
        } else {
            Ok(None)
        }
    }

    /// Get every order in insertion order.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn all_orders(&self) -> Result<Vec<Order>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut product_map = products_by_order(&conn)?;
        let mut stmt =
            conn.prepare("SELECT id, description, customer_id FROM orders ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, i64>(2)?))
        })?;
        let mut orders = Vec::new();
        for row in rows {
            let (id, description, customer_id) = row?;
            orders.push(Order {
                id,
                description,
                customer_id,
                products: product_map.remove(&id).unwrap_or_default(),
            });
        }
        Ok(orders)
    }
}
