//! Unified error handling for the storefront.
//!
//! Route handlers return `Result<T, AppError>` for failures that cannot be
//! folded into a rendered fragment (session-store faults, mirror
//! construction). Shop-call failures inside a fragment handler are rendered
//! as a notice in the fragment itself instead, leaving local state unchanged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::shop::ShopError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Shop API operation failed.
    #[error("Shop error: {0}")]
    Shop(#[from] ShopError),

    /// The session store failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request error");

        let status = match &self {
            Self::Shop(_) => StatusCode::BAD_GATEWAY,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Shop(_) => "External service error",
            Self::Session(_) => "Internal server error",
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
