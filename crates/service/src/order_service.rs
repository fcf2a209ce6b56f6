use std::sync::Arc;

use storefront_core::{Order, OrderInput};
use storefront_storage::traits::{CustomerStore, OrderStore, ProductStore};
use storefront_storage::{StorageBackend, StorageError};

use crate::ServiceError;

pub struct OrderService {
    storage: Arc<StorageBackend>,
}

impl OrderService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Create an order from an untrusted request.
    ///
    /// Pipeline order matters: field validation, then customer resolution,
    /// then product resolution, then the single persist. A missing customer
    /// aborts the whole operation with no side effects; unresolvable
    /// product ids are silently dropped from the association set.
    pub async fn create(&self, input: OrderInput) -> Result<Order, ServiceError> {
        tracing::info!(
            customer_id = ?input.customer_id,
            product_ids = ?input.product_ids,
            "Creating order"
        );

        let mut violations = Vec::new();
        if input.description.trim().is_empty() {
            violations.push("description: Order description is required".to_owned());
        }
        let Some(customer_id) = input.customer_id else {
            violations.push("customerId: Customer ID is required".to_owned());
            return Err(ServiceError::Validation(violations));
        };
        if !violations.is_empty() {
            return Err(ServiceError::Validation(violations));
        }

        let customer = self
            .storage
            .get_customer(customer_id)
            .await?
            .ok_or_else(|| ServiceError::InvalidReference("Invalid customer ID".to_owned()))?;

        // Absent id set skips the bulk lookup entirely.
        let products = match &input.product_ids {
            None => Vec::new(),
            Some(ids) => self.storage.products_by_ids(ids).await?,
        };
        let resolved_ids: Vec<i64> = products.iter().map(|p| p.id).collect();

        let saved =
            self.storage.save_order(&input.description, customer.id, &resolved_ids).await?;
        tracing::info!(id = saved.id, customer_id = customer.id, "Order created");
        Ok(saved)
    }

    pub async fn all(&self) -> Result<Vec<Order>, ServiceError> {
        tracing::info!("Fetching all orders");
        let orders = self.storage.all_orders().await?;
        tracing::debug!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }

    pub async fn get(&self, id: i64) -> Result<Order, ServiceError> {
        tracing::info!(id, "Fetching order by id");
        self.storage.get_order(id).await?.ok_or_else(|| {
            tracing::error!(id, "Order not found");
            ServiceError::Storage(StorageError::NotFound { entity: "Order", id })
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use storefront_core::{CustomerInput, ProductInput};
    use tempfile::TempDir;

    use crate::{CustomerService, ProductService};

    use super::*;

    struct Fixture {
        customers: CustomerService,
        products: ProductService,
        orders: OrderService,
        _temp_dir: TempDir,
    }

    fn fixture() -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let backend =
            Arc::new(StorageBackend::new_sqlite(&temp_dir.path().join("test.db")).unwrap());
        Fixture {
            customers: CustomerService::new(Arc::clone(&backend)),
            products: ProductService::new(Arc::clone(&backend)),
            orders: OrderService::new(backend),
            _temp_dir: temp_dir,
        }
    }

    fn order_input(description: &str, customer_id: Option<i64>) -> OrderInput {
        OrderInput { description: description.to_owned(), customer_id, product_ids: None }
    }

    #[tokio::test]
    async fn create_reports_every_violated_field_at_once() {
        let fx = fixture();

        let err = fx.orders.create(order_input("  ", None)).await.unwrap_err();
        match err {
            ServiceError::Validation(violations) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.iter().any(|v| v.starts_with("description:")));
                assert!(violations.iter().any(|v| v.starts_with("customerId:")));
            },
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_with_unknown_customer_persists_nothing() {
        let fx = fixture();

        let err = fx.orders.create(order_input("Buy", Some(777))).await.unwrap_err();
        match err {
            ServiceError::InvalidReference(reason) => assert_eq!(reason, "Invalid customer ID"),
            other => panic!("expected InvalidReference, got {other:?}"),
        }
        assert!(fx.orders.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_drops_unresolvable_product_ids_silently() {
        let fx = fixture();
        let customer =
            fx.customers.create(CustomerInput { name: "Alice".to_owned() }).await.unwrap();
        let laptop =
            fx.products.create(ProductInput { description: "Laptop".to_owned() }).await.unwrap();

        let order = fx
            .orders
            .create(OrderInput {
                description: "Buy".to_owned(),
                customer_id: Some(customer.id),
                product_ids: Some(vec![laptop.id, 9999]),
            })
            .await
            .unwrap();

        let ids: Vec<i64> = order.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![laptop.id]);
    }

    #[tokio::test]
    async fn create_with_absent_product_set_yields_zero_products() {
        let fx = fixture();
        let customer =
            fx.customers.create(CustomerInput { name: "Alice".to_owned() }).await.unwrap();

        let order = fx.orders.create(order_input("Buy", Some(customer.id))).await.unwrap();
        assert!(order.products.is_empty());
    }

    #[tokio::test]
    async fn create_with_entirely_unresolvable_set_still_succeeds() {
        let fx = fixture();
        let customer =
            fx.customers.create(CustomerInput { name: "Alice".to_owned() }).await.unwrap();

        let order = fx
            .orders
            .create(OrderInput {
                description: "Buy".to_owned(),
                customer_id: Some(customer.id),
                product_ids: Some(vec![111, 222]),
            })
            .await
            .unwrap();
        assert!(order.products.is_empty());
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let fx = fixture();
        let customer =
            fx.customers.create(CustomerInput { name: "Alice".to_owned() }).await.unwrap();

        let created = fx.orders.create(order_input("Buy", Some(customer.id))).await.unwrap();
        let fetched = fx.orders.get(created.id).await.unwrap();
        assert_eq!(fetched.description, created.description);
        assert_eq!(fetched.customer_id, customer.id);
    }

    #[tokio::test]
    async fn get_missing_is_classified_not_found() {
        let fx = fixture();
        let err = fx.orders.get(5).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
