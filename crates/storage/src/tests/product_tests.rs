#![expect(clippy::unwrap_used, reason = "test code")]

use super::create_test_storage;

#[test]
fn save_and_get_product() {
    let (storage, _temp_dir) = create_test_storage();

    let saved = storage.save_product("Laptop").unwrap();
    assert!(saved.id > 0);

    let retrieved = storage.get_product(saved.id).unwrap().unwrap();
    assert_eq!(retrieved.description, "Laptop");
}

#[test]
fn get_product_missing_returns_none() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(storage.get_product(42).unwrap().is_none());
}

#[test]
fn all_products_on_empty_table_is_empty() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(storage.all_products().unwrap().is_empty());
}

#[test]
fn products_by_ids_drops_missing_ids() {
    let (storage, _temp_dir) = create_test_storage();
    let laptop = storage.save_product("Laptop").unwrap();
    let phone = storage.save_product("Phone").unwrap();

    let found = storage.products_by_ids(&[laptop.id, 9999, phone.id]).unwrap();
    let ids: Vec<i64> = found.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![laptop.id, phone.id]);
}

#[test]
fn products_by_ids_empty_set_yields_empty() {
    let (storage, _temp_dir) = create_test_storage();
    storage.save_product("Laptop").unwrap();
    assert!(storage.products_by_ids(&[]).unwrap().is_empty());
}
