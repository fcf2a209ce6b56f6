use std::sync::Arc;

use storefront_core::{Product, ProductInput};
use storefront_storage::traits::ProductStore;
use storefront_storage::{StorageBackend, StorageError};

use crate::ServiceError;

pub struct ProductService {
    storage: Arc<StorageBackend>,
}

impl ProductService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Create a product. Blank descriptions are rejected before any store
    /// access.
    pub async fn create(&self, input: ProductInput) -> Result<Product, ServiceError> {
        if input.description.trim().is_empty() {
            tracing::warn!("Product creation rejected: blank description");
            return Err(ServiceError::Validation(vec![
                "description: Product description is required".to_owned(),
            ]));
        }
        tracing::info!(description = %input.description, "Creating product");
        let saved = self.storage.save_product(&input.description).await?;
        tracing::info!(id = saved.id, "Product created");
        Ok(saved)
    }

    pub async fn all(&self) -> Result<Vec<Product>, ServiceError> {
        tracing::info!("Fetching all products");
        let products = self.storage.all_products().await?;
        tracing::debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    pub async fn get(&self, id: i64) -> Result<Product, ServiceError> {
        tracing::info!(id, "Fetching product by id");
        self.storage.get_product(id).await?.ok_or_else(|| {
            tracing::error!(id, "Product not found");
            ServiceError::Storage(StorageError::NotFound { entity: "Product", id })
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn test_service() -> (ProductService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let backend = StorageBackend::new_sqlite(&temp_dir.path().join("test.db")).unwrap();
        (ProductService::new(Arc::new(backend)), temp_dir)
    }

    #[tokio::test]
    async fn create_rejects_blank_description() {
        let (service, _temp_dir) = test_service();

        let err = service.create(ProductInput { description: String::new() }).await.unwrap_err();
        match err {
            ServiceError::Validation(violations) => {
                assert_eq!(violations, vec!["description: Product description is required"]);
            },
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(service.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let (service, _temp_dir) = test_service();

        let created =
            service.create(ProductInput { description: "Laptop".to_owned() }).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.description, "Laptop");
    }

    #[tokio::test]
    async fn get_missing_is_classified_not_found() {
        let (service, _temp_dir) = test_service();
        let err = service.get(99).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
