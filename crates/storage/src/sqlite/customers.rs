use std::collections::HashMap;

use rusqlite::{Connection, params};
use storefront_core::Customer;

use super::{SqliteStorage, escape_like_pattern, get_conn};
use crate::error::StorageError;
use crate::types::Page;

/// Order ids for one customer, oldest first.
fn order_ids_for(conn: &Connection, customer_id: i64) -> rusqlite::Result<Vec<i64>> {
    let mut stmt = conn.prepare("SELECT id FROM orders WHERE customer_id = ?1 ORDER BY id")?;
    let rows = stmt.query_map(params![customer_id], |row| row.get(0))?;
    rows.collect()
}

/// Order ids grouped by customer, for list operations (avoids one query per row).
fn order_ids_by_customer(conn: &Connection) -> rusqlite::Result<HashMap<i64, Vec<i64>>> {
    let mut stmt = conn.prepare("SELECT id, customer_id FROM orders ORDER BY id")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;
    let mut map: HashMap<i64, Vec<i64>> = HashMap::new();
    for row in rows {
        let (order_id, customer_id) = row?;
        map.entry(customer_id).or_default().push(order_id);
    }
    Ok(map)
}

fn collect_customers(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> rusqlite::Result<Vec<Customer>> {
    let mut order_map = order_ids_by_customer(conn)?;
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;
    let mut customers = Vec::new();
    for row in rows {
        let (id, name) = row?;
        customers.push(Customer { id, name, order_ids: order_map.remove(&id).unwrap_or_default() });
    }
    Ok(customers)
}

impl SqliteStorage {
    /// Insert a customer and return it with its store-assigned id.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn save_customer(&self, name: &str) -> Result<Customer, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute("INSERT INTO customers (name) VALUES (?1)", params![name])?;
        let id = conn.last_insert_rowid();
        Ok(Customer { id, name: name.to_owned(), order_ids: Vec::new() })
    }

    /// Get customer by id, with its order back-references.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_customer(&self, id: i64) -> Result<Option<Customer>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare("SELECT id, name FROM customers WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            let id: i64 = row.get(0)?;
            let name: String = row.get(1)?;
            let order_ids = order_ids_for(&conn, id)?;
            Ok(Some(Customer { id, name, order_ids }))
        } else {
            Ok(None)
        }
    }

    /// Get every customer in insertion order.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn all_customers(&self) -> Result<Vec<Customer>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(collect_customers(&conn, "SELECT id, name FROM customers ORDER BY id", [])?)
    }

    /// Get one zero-based page of customers with pagination metadata.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn customers_page(&self, page: u32, size: u32) -> Result<Page<Customer>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let total: i64 = conn.query_row("SELECT COUNT(*) FROM customers", [], |row| row.get(0))?;
        let offset = i64::from(page) * i64::from(size);
        let content = collect_customers(
            &conn,
            "SELECT id, name FROM customers ORDER BY id LIMIT ?1 OFFSET ?2",
            params![i64::from(size), offset],
        )?;
        Ok(Page::new(content, page, size, total as u64))
    }

    /// Case-insensitive substring match on customer name.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn search_customers(&self, query: &str) -> Result<Vec<Customer>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let pattern = format!("%{}%", escape_like_pattern(&query.to_lowercase()));
        Ok(collect_customers(
            &conn,
            "SELECT id, name FROM customers
               WHERE LOWER(name) LIKE ?1 ESCAPE '\\' ORDER BY id",
            params![pattern],
        )?)
    }
}
