//! Shop API client.
//!
//! # Architecture
//!
//! - The shop is the source of truth - NO local catalog, direct API calls
//! - Cart-mutating clients carry a cookie jar, so the shop's session cookie
//!   rides along exactly as it would from a browser
//! - Every failure surfaces as a [`ShopError`]; callers leave their local
//!   state unchanged on any error path
//!
//! # Example
//!
//! ```rust,ignore
//! use mercadito_storefront::shop::ShopClient;
//!
//! let shop = ShopClient::with_cart_session("http://127.0.0.1:5000")?;
//!
//! let products = shop.search("lap").await?;
//! let cart = shop.add_to_cart(products[0].id, 1).await?;
//! ```

mod client;

pub use client::ShopClient;

use thiserror::Error;

/// Errors that can occur when talking to the shop API.
#[derive(Debug, Error)]
pub enum ShopError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The shop returned a non-success status.
    #[error("Shop returned {status}: {message}")]
    Status { status: u16, message: String },
}
