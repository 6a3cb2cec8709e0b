//! Mercadito Shop library.
//!
//! This crate provides the shop service as a library, allowing it to be
//! spawned in-process by the integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the complete shop application: routes, session layer, tracing.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(session::create_session_layer()),
        )
        .with_state(state)
}
