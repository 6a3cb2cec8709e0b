//! Unified error handling for the shop API.
//!
//! All route handlers return `Result<T, ApiError>`. Errors become the JSON
//! envelope the API has always spoken: `{"error": "<text>"}` with a matching
//! status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use mercadito_core::ErrorBody;

/// Application-level error type for the shop.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested product does not exist in the catalog.
    #[error("Product not found")]
    ProductNotFound,

    /// Checkout was attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The session store failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Session(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::ProductNotFound => StatusCode::NOT_FOUND,
            Self::EmptyCart => StatusCode::BAD_REQUEST,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Session(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_match_wire_contract() {
        assert_eq!(ApiError::ProductNotFound.to_string(), "Product not found");
        assert_eq!(ApiError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::ProductNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::EmptyCart.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
