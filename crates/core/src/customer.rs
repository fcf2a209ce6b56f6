use serde::{Deserialize, Serialize};

/// A customer as persisted by the store.
///
/// `order_ids` is a back-reference only: the order side owns the
/// relationship, so the list is loaded for presentation and never accepted
/// in creation payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub order_ids: Vec<i64>,
}

/// Creation payload for a customer.
///
/// A missing `name` field deserializes to an empty string so the service
/// layer can report it as a blank-field violation instead of a parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInput {
    #[serde(default)]
    pub name: String,
}
