//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every handler funnels through the session's cart mirror and responds with
//! the re-rendered cart panel fragment; failures render the unchanged mirror
//! state with a notice instead of a blocking alert.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tokio::sync::Mutex;
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use mercadito_core::{Cart, CartLine, ProductId};

use crate::cart::{CartMirror, CheckoutStatus};
use crate::error::Result;
use crate::state::AppState;

/// Notice text for a confirmed checkout.
const CHECKOUT_COMPLETED: &str = "¡Compra completada con éxito!";
/// Notice text for a failed checkout.
const CHECKOUT_FAILED: &str = "Error al procesar la compra";
/// Notice text for checking out an empty cart.
const CART_EMPTY: &str = "El carrito está vacío";
/// Notice text for a failed add/update.
const CART_UPDATE_FAILED: &str = "No se pudo actualizar el carrito";

// =============================================================================
// View Models
// =============================================================================

/// Cart line display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    /// Formatted unit price, e.g. `$9.99`.
    pub price: String,
    pub quantity: u32,
    /// Quantity the decrement control submits: `current - 1`, unclamped.
    /// At quantity 1 this is 0, which the shop treats as removal.
    pub decrement_quantity: i64,
    /// Quantity the increment control submits: `current + 1`.
    pub increment_quantity: i64,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        let quantity = i64::from(line.quantity);
        Self {
            product_id: line.product_id.as_i32(),
            name: line.name.clone(),
            price: line.price.to_string(),
            quantity: line.quantity,
            decrement_quantity: quantity - 1,
            increment_quantity: quantity + 1,
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Formatted subtotal without currency symbol, e.g. `24.48`.
    pub subtotal: String,
    pub item_count: u64,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.subtotal().to_fixed(),
            item_count: cart.item_count(),
        }
    }
}

/// A non-blocking notification rendered inside the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub success: bool,
    pub text: String,
}

impl Notice {
    fn success(text: &str) -> Self {
        Self {
            success: true,
            text: text.to_string(),
        }
    }

    fn error(text: &str) -> Self {
        Self {
            success: false,
            text: text.to_string(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Session key holding the mirror-registry id.
const MIRROR_ID_KEY: &str = "mirror_id";

/// Get this session's cart mirror, creating it on first use.
pub(crate) async fn mirror_for(
    state: &AppState,
    session: &Session,
) -> Result<Arc<Mutex<CartMirror>>> {
    let key = match session.get::<Uuid>(MIRROR_ID_KEY).await? {
        Some(key) => key,
        None => {
            let key = Uuid::new_v4();
            session.insert(MIRROR_ID_KEY, key).await?;
            key
        }
    };

    Ok(state.mirror(key).await?)
}

// =============================================================================
// Templates
// =============================================================================

/// Cart panel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_panel.html")]
pub struct CartPanelTemplate {
    pub cart: CartView,
    pub visible: bool,
    pub notice: Option<Notice>,
}

/// Render the panel from the mirror's current state.
fn panel(mirror: &CartMirror, notice: Option<Notice>) -> CartPanelTemplate {
    CartPanelTemplate {
        cart: CartView::from(mirror.cart()),
        visible: mirror.panel_visible(),
        notice,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    /// Precomputed at render time as current ± 1; intentionally unclamped.
    pub quantity: i64,
}

/// Add one unit of a product to the cart (HTMX).
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<CartPanelTemplate> {
    let mirror = mirror_for(&state, &session).await?;
    let mut mirror = mirror.lock().await;

    let notice = match mirror.add(ProductId::new(form.product_id)).await {
        Ok(()) => None,
        Err(e) => {
            tracing::error!("Failed to add item to cart: {e}");
            Some(Notice::error(CART_UPDATE_FAILED))
        }
    };

    Ok(panel(&mirror, notice))
}

/// Set a cart line's quantity (HTMX).
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<CartPanelTemplate> {
    let mirror = mirror_for(&state, &session).await?;
    let mut mirror = mirror.lock().await;

    let notice = match mirror
        .set_quantity(ProductId::new(form.product_id), form.quantity)
        .await
    {
        Ok(()) => None,
        Err(e) => {
            tracing::error!("Failed to update cart: {e}");
            Some(Notice::error(CART_UPDATE_FAILED))
        }
    };

    Ok(panel(&mirror, notice))
}

/// Finalize the cart (HTMX).
#[instrument(skip(state, session))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
) -> Result<CartPanelTemplate> {
    let mirror = mirror_for(&state, &session).await?;
    let mut mirror = mirror.lock().await;

    let notice = match mirror.checkout().await {
        Ok(CheckoutStatus::Completed { message }) => {
            tracing::info!(message = %message, "Checkout completed");
            Notice::success(CHECKOUT_COMPLETED)
        }
        Ok(CheckoutStatus::EmptyCart) => Notice::error(CART_EMPTY),
        Ok(CheckoutStatus::Rejected { reason }) => {
            tracing::warn!(reason = %reason, "Checkout rejected");
            Notice::error(CHECKOUT_FAILED)
        }
        Err(e) => {
            tracing::error!("Checkout failed: {e}");
            Notice::error(CHECKOUT_FAILED)
        }
    };

    Ok(panel(&mirror, Some(notice)))
}

/// Show or hide the cart panel (HTMX). Pure UI state, no network.
#[instrument(skip(state, session))]
pub async fn toggle(
    State(state): State<AppState>,
    session: Session,
) -> Result<CartPanelTemplate> {
    let mirror = mirror_for(&state, &session).await?;
    let mut mirror = mirror.lock().await;

    mirror.toggle_panel();
    Ok(panel(&mirror, None))
}
