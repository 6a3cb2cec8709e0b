//! Search route handler.
//!
//! Mirrors the original UI's behavior: every input event issues a query,
//! with no client-side debouncing or request cancellation, and the product
//! display is fully replaced by whatever the response renders.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use mercadito_core::Product;

use crate::state::AppState;

/// Product display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    /// Formatted unit price, e.g. `$999.99`.
    pub price: String,
    pub stock: u32,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock,
        }
    }
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Product cards fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_cards.html")]
pub struct ProductCardsTemplate {
    pub products: Vec<ProductView>,
    pub error: Option<String>,
}

/// Search the catalog and render the product cards fragment.
///
/// A shop failure renders an error message in place of the cards; nothing
/// else on the page is touched.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ProductCardsTemplate {
    match state.shop().search(&query.q).await {
        Ok(products) => ProductCardsTemplate {
            products: products.iter().map(ProductView::from).collect(),
            error: None,
        },
        Err(e) => {
            tracing::error!("Search failed: {e}");
            ProductCardsTemplate {
                products: Vec::new(),
                error: Some("No se pudieron cargar los productos".to_string()),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mercadito_core::{Price, ProductId};

    fn products() -> Vec<ProductView> {
        vec![
            ProductView::from(&Product {
                id: ProductId::new(1),
                name: "Laptop".to_string(),
                price: Price::from_cents(99999),
                stock: 10,
            }),
            ProductView::from(&Product {
                id: ProductId::new(2),
                name: "Smartphone".to_string(),
                price: Price::from_cents(49999),
                stock: 15,
            }),
        ]
    }

    #[test]
    fn test_renders_cards_in_response_order() {
        let html = ProductCardsTemplate {
            products: products(),
            error: None,
        }
        .render()
        .unwrap();

        let laptop = html.find("Laptop").unwrap();
        let phone = html.find("Smartphone").unwrap();
        assert!(laptop < phone);
        assert!(html.contains("$999.99"));
        assert!(html.contains("Stock: 10"));
        assert!(html.contains("Añadir al carrito"));
    }

    #[test]
    fn test_card_carries_product_id() {
        let html = ProductCardsTemplate {
            products: products(),
            error: None,
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"name="product_id" value="2""#));
    }

    #[test]
    fn test_error_fragment() {
        let html = ProductCardsTemplate {
            products: Vec::new(),
            error: Some("No se pudieron cargar los productos".to_string()),
        }
        .render()
        .unwrap();

        assert!(html.contains("No se pudieron cargar los productos"));
        assert!(!html.contains("card-title"));
    }
}
