//! Cookie-session plumbing: the session layer and cart accessors.
//!
//! Each browser session holds its own cart under a single session key. Carts
//! live in the in-memory session store and disappear with the process.

use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use mercadito_core::Cart;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "mercadito_shop";

/// Session key holding the cart.
const CART_KEY: &str = "cart";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with the in-memory store.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Load the session's cart, defaulting to an empty one.
pub async fn load_cart(session: &Session) -> Result<Cart, tower_sessions::session::Error> {
    Ok(session.get::<Cart>(CART_KEY).await?.unwrap_or_default())
}

/// Store the session's cart.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(CART_KEY, cart).await
}
