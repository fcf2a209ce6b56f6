#![expect(clippy::unwrap_used, reason = "test code")]

use super::create_test_storage;

#[test]
fn save_and_get_customer() {
    let (storage, _temp_dir) = create_test_storage();

    let saved = storage.save_customer("Alice").unwrap();
    assert!(saved.id > 0);
    assert_eq!(saved.name, "Alice");
    assert!(saved.order_ids.is_empty());

    let retrieved = storage.get_customer(saved.id).unwrap().unwrap();
    assert_eq!(retrieved.id, saved.id);
    assert_eq!(retrieved.name, "Alice");
}

#[test]
fn get_customer_missing_returns_none() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(storage.get_customer(999).unwrap().is_none());
}

#[test]
fn ids_are_assigned_once_and_never_reused_within_sequence() {
    let (storage, _temp_dir) = create_test_storage();
    let a = storage.save_customer("A").unwrap();
    let b = storage.save_customer("B").unwrap();
    assert!(b.id > a.id);
}

#[test]
fn duplicate_names_are_permitted() {
    let (storage, _temp_dir) = create_test_storage();
    let first = storage.save_customer("Alice").unwrap();
    let second = storage.save_customer("Alice").unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(storage.all_customers().unwrap().len(), 2);
}

#[test]
fn all_customers_in_insertion_order() {
    let (storage, _temp_dir) = create_test_storage();
    storage.save_customer("Alice").unwrap();
    storage.save_customer("Bob").unwrap();

    let all = storage.all_customers().unwrap();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn customer_carries_order_back_references() {
    let (storage, _temp_dir) = create_test_storage();
    let customer = storage.save_customer("Alice").unwrap();
    let order_a = storage.save_order("first", customer.id, &[]).unwrap();
    let order_b = storage.save_order("second", customer.id, &[]).unwrap();

    let retrieved = storage.get_customer(customer.id).unwrap().unwrap();
    assert_eq!(retrieved.order_ids, vec![order_a.id, order_b.id]);

    let listed = storage.all_customers().unwrap();
    assert_eq!(listed[0].order_ids, vec![order_a.id, order_b.id]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let (storage, _temp_dir) = create_test_storage();
    storage.save_customer("Alice Smith").unwrap();
    storage.save_customer("Bob Jones").unwrap();
    storage.save_customer("MALICE").unwrap();

    let hits = storage.search_customers("alice").unwrap();
    let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice Smith", "MALICE"]);
}

#[test]
fn search_with_no_match_returns_empty() {
    let (storage, _temp_dir) = create_test_storage();
    storage.save_customer("Alice").unwrap();
    assert!(storage.search_customers("zzz").unwrap().is_empty());
}

#[test]
fn search_escapes_like_wildcards() {
    let (storage, _temp_dir) = create_test_storage();
    storage.save_customer("100% Cotton Co").unwrap();
    storage.save_customer("Anything").unwrap();

    let hits = storage.search_customers("100%").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "100% Cotton Co");
}

#[test]
fn pagination_slices_and_reports_totals() {
    let (storage, _temp_dir) = create_test_storage();
    for i in 0..5 {
        storage.save_customer(&format!("Customer {i}")).unwrap();
    }

    let page = storage.customers_page(0, 2).unwrap();
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 3);

    let last = storage.customers_page(2, 2).unwrap();
    assert_eq!(last.content.len(), 1);
    assert_eq!(last.content[0].name, "Customer 4");
}

#[test]
fn pagination_past_end_is_empty_slice() {
    let (storage, _temp_dir) = create_test_storage();
    storage.save_customer("Alice").unwrap();

    let page = storage.customers_page(5, 20).unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.total_pages, 1);
}
