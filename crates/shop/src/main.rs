//! Mercadito Shop - Commerce API service.
//!
//! This binary serves the JSON shop API on port 5000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request/response bodies
//! - In-memory product catalog, fixed at startup
//! - Per-browser carts held in cookie sessions (tower-sessions, in-memory
//!   store); every cart mutation returns the full authoritative cart
//!
//! The storefront binary is the intended client, but the API stands alone:
//! any HTTP client with a cookie jar gets its own cart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mercadito_shop::catalog::Catalog;
use mercadito_shop::config::ShopConfig;
use mercadito_shop::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mercadito_shop=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ShopConfig::from_env().expect("Failed to load configuration");

    let state = AppState::new(config.clone(), Catalog::builtin());
    let app = mercadito_shop::app(state);

    let addr = config.socket_addr();
    tracing::info!("shop listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
