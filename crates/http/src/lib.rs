//! HTTP API server for storefront.

pub mod api_error;
mod api_types;
mod dto;
mod handlers;

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use storefront_service::{CustomerService, OrderService, ProductService};
use storefront_storage::StorageBackend;

pub use api_types::VersionResponse;
pub use dto::{CustomerDto, OrderDto, ProductDto};

/// Shared application state for all HTTP handlers.
///
/// Contains one service instance per resource, wrapped in `Arc` for
/// thread-safe sharing across handlers.
pub struct AppState {
    /// Service for customer operations
    pub customer_service: Arc<CustomerService>,
    /// Service for product operations
    pub product_service: Arc<ProductService>,
    /// Service for order operations
    pub order_service: Arc<OrderService>,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self {
            customer_service: Arc::new(CustomerService::new(Arc::clone(&storage))),
            product_service: Arc::new(ProductService::new(Arc::clone(&storage))),
            order_service: Arc::new(OrderService::new(storage)),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/customer/list", get(handlers::customers::list_customers))
        .route("/customer/list/paged", get(handlers::customers::list_customers_paged))
        .route("/customer/search", get(handlers::customers::search_customers))
        .route("/customer/create", post(handlers::customers::create_customer))
        .route("/order/list", get(handlers::orders::list_orders))
        .route("/order/find/{id}", get(handlers::orders::find_order))
        .route("/order/create", post(handlers::orders::create_order))
        .route("/products/list", get(handlers::products::list_products))
        .route("/products/find/{id}", get(handlers::products::find_product))
        .route("/products/create", post(handlers::products::create_product))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
