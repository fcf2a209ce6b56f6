use serde::{Deserialize, Serialize};

use crate::Product;

/// An order as persisted by the store: a description, its owning customer,
/// and the resolved set of associated products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub description: String,
    pub customer_id: i64,
    pub products: Vec<Product>,
}

/// Creation payload for an order.
///
/// `customer_id` stays an `Option` rather than a required field so that a
/// request missing both the description and the customer id reports both
/// violations in one response. `product_ids: None` means "no products" and
/// skips the bulk product lookup entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    #[serde(default)]
    pub description: String,
    pub customer_id: Option<i64>,
    pub product_ids: Option<Vec<i64>>,
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use super::*;

    #[test]
    fn order_input_accepts_camel_case_fields() {
        let input: OrderInput = serde_json::from_str(
            r#"{"description":"Buy","customerId":1,"productIds":[10,11]}"#,
        )
        .unwrap();
        assert_eq!(input.description, "Buy");
        assert_eq!(input.customer_id, Some(1));
        assert_eq!(input.product_ids, Some(vec![10, 11]));
    }

    #[test]
    fn order_input_tolerates_missing_fields() {
        let input: OrderInput = serde_json::from_str("{}").unwrap();
        assert!(input.description.is_empty());
        assert_eq!(input.customer_id, None);
        assert_eq!(input.product_ids, None);
    }
}
