//! Business logic layer for storefront.
//!
//! Each service turns an untrusted creation request into either a persisted
//! entity or a classified [`ServiceError`], with no partial writes on
//! failure. Read operations classify missing rows as not-found.

mod customer_service;
mod error;
mod order_service;
mod product_service;

pub use customer_service::CustomerService;
pub use error::ServiceError;
pub use order_service::OrderService;
pub use product_service::ProductService;
