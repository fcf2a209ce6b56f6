use std::sync::Arc;

use storefront_core::{Customer, CustomerInput};
use storefront_storage::traits::CustomerStore;
use storefront_storage::{Page, StorageBackend, StorageError};

use crate::ServiceError;

pub struct CustomerService {
    storage: Arc<StorageBackend>,
}

impl CustomerService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Create a customer. Blank names are rejected before any store access;
    /// duplicate names are permitted.
    pub async fn create(&self, input: CustomerInput) -> Result<Customer, ServiceError> {
        if input.name.trim().is_empty() {
            tracing::warn!("Customer creation rejected: blank name");
            return Err(ServiceError::Validation(vec![
                "name: Customer name is required".to_owned(),
            ]));
        }
        tracing::info!(name = %input.name, "Creating new customer");
        let saved = self.storage.save_customer(&input.name).await?;
        tracing::info!(id = saved.id, "Customer created");
        Ok(saved)
    }

    pub async fn all(&self) -> Result<Vec<Customer>, ServiceError> {
        tracing::info!("Fetching all customers");
        let customers = self.storage.all_customers().await?;
        tracing::debug!(count = customers.len(), "Fetched customers");
        Ok(customers)
    }

    pub async fn page(&self, page: u32, size: u32) -> Result<Page<Customer>, ServiceError> {
        tracing::info!(page, size, "Fetching customers page");
        Ok(self.storage.customers_page(page, size).await?)
    }

    /// Case-insensitive substring search on name. No matches is an empty
    /// collection, never an error.
    pub async fn search(&self, query: &str) -> Result<Vec<Customer>, ServiceError> {
        tracing::info!(query, "Searching customers");
        let customers = self.storage.search_customers(query).await?;
        if customers.is_empty() {
            tracing::warn!(query, "No customers found matching query");
        }
        Ok(customers)
    }

    pub async fn get(&self, id: i64) -> Result<Customer, ServiceError> {
        tracing::info!(id, "Fetching customer by id");
        self.storage.get_customer(id).await?.ok_or_else(|| {
            tracing::error!(id, "Customer not found");
            ServiceError::Storage(StorageError::NotFound { entity: "Customer", id })
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn test_service() -> (CustomerService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let backend = StorageBackend::new_sqlite(&temp_dir.path().join("test.db")).unwrap();
        (CustomerService::new(Arc::new(backend)), temp_dir)
    }

    #[tokio::test]
    async fn create_rejects_blank_name_before_any_write() {
        let (service, _temp_dir) = test_service();

        let err = service.create(CustomerInput { name: "   ".to_owned() }).await.unwrap_err();
        match err {
            ServiceError::Validation(violations) => {
                assert_eq!(violations, vec!["name: Customer name is required"]);
            },
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(service.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let (service, _temp_dir) = test_service();

        let created = service.create(CustomerInput { name: "Alice".to_owned() }).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn get_missing_is_classified_not_found() {
        let (service, _temp_dir) = test_service();
        let err = service.get(404).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn search_without_matches_is_empty_not_error() {
        let (service, _temp_dir) = test_service();
        service.create(CustomerInput { name: "Alice".to_owned() }).await.unwrap();
        assert!(service.search("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn page_metadata_reflects_totals() {
        let (service, _temp_dir) = test_service();
        for i in 0..3 {
            service.create(CustomerInput { name: format!("Customer {i}") }).await.unwrap();
        }

        let page = service.page(0, 2).await.unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
    }
}
