//! Test utilities and module declarations for storage tests.

use tempfile::TempDir;

use crate::SqliteStorage;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (SqliteStorage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = SqliteStorage::new(&db_path).unwrap();
    (storage, temp_dir)
}

mod customer_tests;
mod product_tests;
