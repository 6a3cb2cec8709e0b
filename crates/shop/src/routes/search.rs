//! Catalog search route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use mercadito_core::Product;

use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search the catalog by name.
///
/// The query is matched as a case-insensitive substring; the empty query
/// returns the full catalog.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Product>> {
    Json(state.catalog().search(&query.q))
}
