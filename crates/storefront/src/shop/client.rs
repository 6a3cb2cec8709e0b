//! HTTP client for the shop's four endpoints.

use std::sync::Arc;

use tracing::{debug, instrument};

use mercadito_core::{AddToCartRequest, Cart, ErrorBody, Product, ProductId, UpdateCartRequest};

use super::ShopError;

/// Client for the shop API.
///
/// Cheaply cloneable via `Arc`. A plain client is enough for catalog search;
/// cart operations need [`ShopClient::with_cart_session`] so the shop's
/// session cookie is retained between calls.
#[derive(Debug, Clone)]
pub struct ShopClient {
    inner: Arc<ShopClientInner>,
}

#[derive(Debug)]
struct ShopClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ShopClient {
    /// Create a client without a cookie jar, suitable for stateless calls.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::build(reqwest::Client::new(), base_url)
    }

    /// Create a client with its own cookie jar.
    ///
    /// The shop keys carts off a session cookie; one of these clients per
    /// browser session gives each visitor their own server-side cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn with_cart_session(base_url: &str) -> Result<Self, ShopError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self::build(client, base_url))
    }

    fn build(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            inner: Arc::new(ShopClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Check that the shop is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the shop reports non-success.
    pub async fn health(&self) -> Result<(), ShopError> {
        let response = self.inner.client.get(self.url("/health")).send().await?;
        expect_success(response).await.map(|_| ())
    }

    /// Search the catalog. The empty query returns the full catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, ShopError> {
        let response = self
            .inner
            .client
            .get(self.url("/search"))
            .query(&[("q", query)])
            .send()
            .await?;

        let body = expect_success(response).await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;
        debug!(count = products.len(), "Search results received");
        Ok(products)
    }

    /// Add a product to the session cart; returns the full updated cart.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status (e.g. an
    /// unknown product), or an undecodable body.
    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Cart, ShopError> {
        let response = self
            .inner
            .client
            .post(self.url("/add_to_cart"))
            .json(&AddToCartRequest {
                product_id,
                quantity,
            })
            .send()
            .await?;

        let body = expect_success(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Set a cart line's quantity verbatim; returns the full updated cart.
    ///
    /// The quantity is intentionally unclamped - the shop treats anything at
    /// or below zero as removal.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    #[instrument(skip(self))]
    pub async fn update_cart(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<Cart, ShopError> {
        let response = self
            .inner
            .client
            .post(self.url("/update_cart"))
            .json(&UpdateCartRequest {
                product_id,
                quantity,
            })
            .send()
            .await?;

        let body = expect_success(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Post the checkout and return whatever JSON the shop answered with,
    /// regardless of status.
    ///
    /// Checkout success is a property of the body (a `message` field), not
    /// the status line, so business rejections come back as `Ok` values and
    /// the caller decides what they mean.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-JSON body.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<serde_json::Value, ShopError> {
        let response = self.inner.client.post(self.url("/checkout")).send().await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Read the body of a response, turning non-success statuses into
/// [`ShopError::Status`] with the shop's error message when it sent one.
async fn expect_success(response: reqwest::Response) -> Result<String, ShopError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return Ok(body);
    }

    let message = serde_json::from_str::<ErrorBody>(&body)
        .map_or_else(|_| body.chars().take(200).collect(), |e| e.error);

    Err(ShopError::Status {
        status: status.as_u16(),
        message,
    })
}
