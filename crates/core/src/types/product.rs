//! Catalog product type.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A product in the shop catalog.
///
/// Server-owned and read-only to storefront clients. Appears on the wire as
/// `{"id": 1, "name": "Laptop", "price": 999.99, "stock": 10}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Units currently available.
    pub stock: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let product = Product {
            id: ProductId::new(1),
            name: "Laptop".to_string(),
            price: Price::from_cents(99999),
            stock: 10,
        };

        let json: serde_json::Value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Laptop", "price": 999.99, "stock": 10})
        );
    }
}
