//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::cart::{self, CartView, Notice};
use crate::routes::search::ProductView;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Full catalog, as returned by an empty-query search.
    pub products: Vec<ProductView>,
    /// Set when the catalog could not be loaded.
    pub error: Option<String>,
    /// This session's cart, as of the last shop response.
    pub cart: CartView,
    /// Whether the cart panel starts out shown.
    pub visible: bool,
    /// Always `None` on a full page load; fragment responses carry notices.
    pub notice: Option<Notice>,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let (products, error) = match state.shop().search("").await {
        Ok(products) => (products.iter().map(ProductView::from).collect(), None),
        Err(e) => {
            tracing::error!("Failed to load catalog: {e}");
            (
                Vec::new(),
                Some("No se pudieron cargar los productos".to_string()),
            )
        }
    };

    let mirror = cart::mirror_for(&state, &session).await?;
    let mirror = mirror.lock().await;

    Ok(HomeTemplate {
        products,
        error,
        cart: CartView::from(mirror.cart()),
        visible: mirror.panel_visible(),
        notice: None,
    })
}
