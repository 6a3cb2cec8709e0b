//! Integration tests for Mercadito.
//!
//! The shop is spawned in-process on an ephemeral port; tests drive it over
//! real HTTP with cookie-carrying clients, exactly as the storefront does.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mercadito-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shop_api` - Wire-shape tests for the four shop endpoints
//! - `cart_sync` - Cart-mirror synchronization against a live shop

use mercadito_core::{Price, Product, ProductId};
use mercadito_shop::catalog::Catalog;
use mercadito_shop::config::ShopConfig;
use mercadito_shop::state::AppState;

/// Spawn the shop app on an ephemeral port and return its base URL.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn spawn_shop(catalog: Catalog) -> String {
    let state = AppState::new(ShopConfig::default(), catalog);
    let app = mercadito_shop::app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read listener addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test shop died");
    });

    format!("http://{addr}")
}

/// A two-product catalog with round prices, handy for asserting totals.
#[must_use]
pub fn demo_catalog() -> Catalog {
    Catalog::new(vec![
        product(1, "Widget", 999, 10),
        product(2, "Gadget", 450, 5),
    ])
}

/// Create an HTTP client with a cookie jar, like a browser session.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn cookie_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

fn product(id: i32, name: &str, price_cents: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::from_cents(price_cents),
        stock,
    }
}
