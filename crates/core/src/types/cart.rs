//! Cart and cart-line types, plus the cart mutation request bodies.
//!
//! The shop holds the authoritative cart; the storefront holds a cached copy
//! that is wholesale-replaced by every shop response. Both sides use these
//! types, so the JSON array shape (`[{product_id, name, price, quantity},
//! ...]`) is fixed in one place.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::product::Product;

/// One product-quantity pairing within a cart.
///
/// Name and price are denormalized from the product at add-time, so a later
/// catalog change does not reprice lines already in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartLine {
    /// Price of the whole line (unit price times quantity).
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.price * self.quantity
    }
}

/// An ordered collection of line items representing a pending purchase.
///
/// Serializes transparently as a JSON array of [`CartLine`], matching the
/// body returned by `/add_to_cart` and `/update_cart`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// The line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_price).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Merge a product into the cart: bump the quantity of an existing line,
    /// or append a new denormalized line.
    pub fn merge(&mut self, product: &Product, quantity: u32) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                quantity,
            }),
        }
    }

    /// Set a line's quantity verbatim. A quantity at or below zero removes
    /// the line; an id with no line in the cart is a no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.lines.retain(|line| line.product_id != product_id);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }
}

/// Body of `POST /add_to_cart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    /// Defaults to 1 when omitted.
    #[serde(default = "default_add_quantity")]
    pub quantity: u32,
}

const fn default_add_quantity() -> u32 {
    1
}

/// Body of `POST /update_cart`.
///
/// The quantity is signed on purpose: the storefront stepper sends
/// `current - 1` unclamped, and the shop treats anything at or below zero as
/// removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn widget() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Widget".to_string(),
            price: Price::from_cents(999),
            stock: 10,
        }
    }

    fn gadget() -> Product {
        Product {
            id: ProductId::new(2),
            name: "Gadget".to_string(),
            price: Price::new(Decimal::new(45, 1)),
            stock: 5,
        }
    }

    #[test]
    fn test_merge_appends_then_bumps() {
        let mut cart = Cart::default();
        cart.merge(&widget(), 1);
        cart.merge(&gadget(), 1);
        cart.merge(&widget(), 1);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn test_subtotal_and_count_over_mixed_lines() {
        let mut cart = Cart::default();
        cart.merge(&widget(), 2);
        cart.merge(&gadget(), 1);

        assert_eq!(cart.subtotal().to_fixed(), "24.48");
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_set_quantity_verbatim() {
        let mut cart = Cart::default();
        cart.merge(&gadget(), 1);
        cart.set_quantity(ProductId::new(2), 2);

        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.subtotal().to_fixed(), "9.00");
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::default();
        cart.merge(&widget(), 1);
        cart.set_quantity(ProductId::new(1), 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes_line() {
        let mut cart = Cart::default();
        cart.merge(&widget(), 1);
        cart.set_quantity(ProductId::new(1), -1);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_product_is_noop() {
        let mut cart = Cart::default();
        cart.merge(&widget(), 1);
        cart.set_quantity(ProductId::new(99), 5);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut cart = Cart::default();
        cart.merge(&widget(), 2);

        let json: serde_json::Value = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"product_id": 1, "name": "Widget", "price": 9.99, "quantity": 2}
            ])
        );
    }

    #[test]
    fn test_add_request_quantity_defaults_to_one() {
        let req: AddToCartRequest = serde_json::from_str(r#"{"product_id": 3}"#).unwrap();
        assert_eq!(req.quantity, 1);
    }

    #[test]
    fn test_update_request_accepts_negative_quantity() {
        let req: UpdateCartRequest =
            serde_json::from_str(r#"{"product_id": 2, "quantity": -1}"#).unwrap();
        assert_eq!(req.quantity, -1);
    }
}
