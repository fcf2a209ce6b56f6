//! Externally-visible representations and their conversions.
//!
//! Conversions are explicit, hand-written field copies: the field lists are
//! small and fixed, so no mapping framework sits between the domain types
//! and the wire format.

use serde::{Deserialize, Serialize};
use storefront_core::{Customer, Order, Product};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i64,
    pub name: String,
    pub order_ids: Vec<i64>,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self { id: customer.id, name: customer.name, order_ids: customer.order_ids }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub description: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self { id: product.id, description: product.description }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    pub description: String,
    pub customer_id: i64,
    pub products: Vec<ProductDto>,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            description: order.description,
            customer_id: order.customer_id,
            products: order.products.into_iter().map(ProductDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_dto_maps_nested_products() {
        let order = Order {
            id: 10,
            description: "Electronics".to_owned(),
            customer_id: 1,
            products: vec![Product { id: 100, description: "Laptop".to_owned() }],
        };
        let dto = OrderDto::from(order);
        assert_eq!(dto.id, 10);
        assert_eq!(dto.customer_id, 1);
        assert_eq!(dto.products.len(), 1);
        assert_eq!(dto.products[0].description, "Laptop");
    }

    #[test]
    fn customer_dto_serializes_order_ids_camel_case() {
        let dto = CustomerDto::from(Customer {
            id: 1,
            name: "Alice".to_owned(),
            order_ids: vec![7],
        });
        let value = serde_json::to_value(&dto).expect("serializable");
        assert_eq!(value["orderIds"], serde_json::json!([7]));
    }
}
