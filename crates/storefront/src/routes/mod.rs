//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /               - Home page (search input, catalog, cart panel)
//! GET  /health         - Health check
//! GET  /health/ready   - Readiness check (probes the shop)
//!
//! # Search (HTMX fragment)
//! GET  /search?q=      - Product cards fragment
//!
//! # Cart (HTMX fragments, all return the cart panel)
//! POST /cart/add       - Add one unit of a product
//! POST /cart/update    - Set a line quantity (unclamped; 0 removes)
//! POST /cart/checkout  - Finalize the cart
//! POST /cart/toggle    - Show/hide the panel (no network)
//! ```
//!
//! Every fragment is regenerated in full from the current mirror state -
//! no incremental updates.

pub mod cart;
pub mod home;
pub mod search;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/checkout", post(cart::checkout))
        .route("/toggle", post(cart::toggle))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Search fragment
        .route("/search", get(search::search))
        // Cart routes
        .nest("/cart", cart_routes())
        // Health
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies that the shop API is reachable before returning OK.
/// Returns 503 Service Unavailable if it is not.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.shop().health().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
