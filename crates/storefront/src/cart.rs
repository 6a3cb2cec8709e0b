//! The cart mirror: a client-side cache of the shop-held cart.
//!
//! One mirror exists per browser session. It never mutates its cart
//! independently - every operation sends the mutation to the shop and
//! wholesale-replaces the local copy with the cart the shop returned, so the
//! invariant is always "local cart == last value returned by the shop". On
//! any failure the local copy is left untouched.

use mercadito_core::{Cart, ProductId};

use crate::shop::{ShopClient, ShopError};

/// Outcome of a checkout attempt, as the UI should report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutStatus {
    /// The shop confirmed the order; the mirror has been cleared.
    Completed {
        /// The shop's confirmation message.
        message: String,
    },
    /// The shop answered with something other than a confirmation; the
    /// mirror is unchanged.
    Rejected {
        /// The shop's error message, when it sent one.
        reason: String,
    },
    /// The mirror was empty, so nothing was sent to the shop.
    EmptyCart,
}

/// Per-session cart state: the cached cart, the panel-visibility flag, and
/// the cookie-carrying shop client that keeps both in sync with the shop.
#[derive(Debug)]
pub struct CartMirror {
    client: ShopClient,
    cart: Cart,
    panel_visible: bool,
}

impl CartMirror {
    /// Create an empty mirror backed by its own shop session.
    ///
    /// # Errors
    ///
    /// Returns an error if the shop client cannot be constructed.
    pub fn new(shop_url: &str) -> Result<Self, ShopError> {
        Ok(Self {
            client: ShopClient::with_cart_session(shop_url)?,
            cart: Cart::default(),
            panel_visible: true,
        })
    }

    /// The cached cart, as of the last shop response.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Whether the cart panel is currently shown.
    #[must_use]
    pub const fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// Flip the cart panel's visibility. Pure UI state, no network.
    pub const fn toggle_panel(&mut self) {
        self.panel_visible = !self.panel_visible;
    }

    /// Add one unit of a product, replacing the cache with the shop's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails; the cache is left unchanged.
    pub async fn add(&mut self, product_id: ProductId) -> Result<(), ShopError> {
        self.cart = self.client.add_to_cart(product_id, 1).await?;
        Ok(())
    }

    /// Set a line's quantity verbatim, replacing the cache with the shop's
    /// cart. The value is not clamped here: the stepper sends `current - 1`
    /// even when that is zero, and the shop treats it as removal.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails; the cache is left unchanged.
    pub async fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<(), ShopError> {
        self.cart = self.client.update_cart(product_id, quantity).await?;
        Ok(())
    }

    /// Attempt checkout.
    ///
    /// An empty mirror short-circuits without a network call. Otherwise the
    /// shop's answer is interpreted by body shape: a non-empty `message`
    /// field confirms the order and clears the mirror; anything else is a
    /// rejection and the mirror keeps its lines.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-JSON response; the
    /// cache is left unchanged.
    pub async fn checkout(&mut self) -> Result<CheckoutStatus, ShopError> {
        if self.cart.is_empty() {
            return Ok(CheckoutStatus::EmptyCart);
        }

        let body = self.client.checkout().await?;
        let status = interpret_checkout(&body);

        if matches!(status, CheckoutStatus::Completed { .. }) {
            self.cart.clear();
        }

        Ok(status)
    }
}

/// Decide what a checkout response body means.
///
/// Success is signaled by the presence of a non-empty `message` field; any
/// other shape is a rejection, with the shop's `error` field as the reason
/// when present.
fn interpret_checkout(body: &serde_json::Value) -> CheckoutStatus {
    match body.get("message").and_then(serde_json::Value::as_str) {
        Some(message) if !message.is_empty() => CheckoutStatus::Completed {
            message: message.to_string(),
        },
        _ => CheckoutStatus::Rejected {
            reason: body
                .get("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unrecognized checkout response")
                .to_string(),
        },
    }
}
