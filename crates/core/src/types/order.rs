//! Checkout and error-envelope types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::CartLine;
use super::price::Price;

/// A finalized order, produced by `/checkout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub items: Vec<CartLine>,
    pub total: Price,
    pub placed_at: DateTime<Utc>,
}

/// Successful checkout response body.
///
/// Clients key success off the presence of `message`; everything else in the
/// body is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfirmation {
    pub message: String,
    pub order: OrderSummary,
}

/// Error envelope used by all non-2xx shop responses:
/// `{"error": "Product not found"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
