//! Cart route handlers: add, update, checkout.
//!
//! The cart lives in the caller's cookie session. Every mutation returns the
//! full updated cart; clients treat that response as authoritative.

use axum::{Json, extract::State};
use chrono::Utc;
use tower_sessions::Session;
use tracing::instrument;

use mercadito_core::{
    AddToCartRequest, Cart, CheckoutConfirmation, OrderSummary, UpdateCartRequest,
};

use crate::error::{ApiError, Result};
use crate::session;
use crate::state::AppState;

/// Add a product to the session cart.
///
/// An existing line for the product gets its quantity bumped; otherwise a new
/// line is appended with the product's name and price denormalized in.
#[instrument(skip(state, http_session))]
pub async fn add(
    State(state): State<AppState>,
    http_session: Session,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<Cart>> {
    let product = state
        .catalog()
        .get(request.product_id)
        .ok_or(ApiError::ProductNotFound)?
        .clone();

    let mut cart = session::load_cart(&http_session).await?;
    cart.merge(&product, request.quantity);
    session::save_cart(&http_session, &cart).await?;

    tracing::debug!(product_id = %request.product_id, quantity = request.quantity, "Added to cart");
    Ok(Json(cart))
}

/// Set a cart line's quantity verbatim.
///
/// A quantity at or below zero removes the line; a product with no line in
/// the cart is a no-op. Either way the full cart is returned.
#[instrument(skip(http_session))]
pub async fn update(
    http_session: Session,
    Json(request): Json<UpdateCartRequest>,
) -> Result<Json<Cart>> {
    let mut cart = session::load_cart(&http_session).await?;
    cart.set_quantity(request.product_id, request.quantity);
    session::save_cart(&http_session, &cart).await?;

    Ok(Json(cart))
}

/// Finalize the session cart into an order.
///
/// Fails with `400 {"error": "Cart is empty"}` when there is nothing to buy;
/// otherwise clears the cart and returns the confirmation, whose `message`
/// field is the success signal clients key off.
#[instrument(skip(http_session))]
pub async fn checkout(http_session: Session) -> Result<Json<CheckoutConfirmation>> {
    let mut cart = session::load_cart(&http_session).await?;
    if cart.is_empty() {
        return Err(ApiError::EmptyCart);
    }

    let order = OrderSummary {
        items: cart.lines().to_vec(),
        total: cart.subtotal(),
        placed_at: Utc::now(),
    };

    cart.clear();
    session::save_cart(&http_session, &cart).await?;

    tracing::info!(total = %order.total, "Order placed");
    Ok(Json(CheckoutConfirmation {
        message: "Order placed successfully".to_string(),
        order,
    }))
}
