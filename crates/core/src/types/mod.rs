//! Core types for Mercadito.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod order;
pub mod price;
pub mod product;

pub use cart::{AddToCartRequest, Cart, CartLine, UpdateCartRequest};
pub use id::*;
pub use order::{CheckoutConfirmation, ErrorBody, OrderSummary};
pub use price::Price;
pub use product::Product;
