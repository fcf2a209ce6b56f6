use serde::{Deserialize, Serialize};

/// A product as persisted by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub description: String,
}

/// Creation payload for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub description: String,
}
