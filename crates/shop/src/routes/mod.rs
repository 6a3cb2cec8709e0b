//! HTTP route handlers for the shop API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health        - Health check
//! GET  /search?q=     - Catalog search, returns an array of products
//! POST /add_to_cart   - Add a product to the session cart, returns the cart
//! POST /update_cart   - Set a line quantity (<= 0 removes), returns the cart
//! POST /checkout      - Finalize the session cart into an order
//! ```
//!
//! Every cart mutation responds with the full, authoritative cart so clients
//! can wholesale-replace whatever copy they hold.

pub mod cart;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the shop.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/search", get(search::search))
        .route("/add_to_cart", post(cart::add))
        .route("/update_cart", post(cart::update))
        .route("/checkout", post(cart::checkout))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
