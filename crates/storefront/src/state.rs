//! Application state shared across handlers.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::cart::CartMirror;
use crate::config::StorefrontConfig;
use crate::shop::{ShopClient, ShopError};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the shared catalog-search client and
/// the per-session cart mirrors.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    shop: ShopClient,
    mirrors: RwLock<HashMap<Uuid, Arc<Mutex<CartMirror>>>>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let shop = ShopClient::new(&config.shop_url);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                shop,
                mirrors: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shared shop client (catalog search only -
    /// it carries no cart session).
    #[must_use]
    pub fn shop(&self) -> &ShopClient {
        &self.inner.shop
    }

    /// Get the cart mirror for a session key, creating it on first use.
    ///
    /// Each mirror is behind its own async mutex, so overlapping requests
    /// from one browser session serialize instead of interleaving.
    ///
    /// # Errors
    ///
    /// Returns an error if a fresh mirror's shop client cannot be built.
    pub async fn mirror(&self, key: Uuid) -> Result<Arc<Mutex<CartMirror>>, ShopError> {
        if let Some(mirror) = self.inner.mirrors.read().await.get(&key) {
            return Ok(mirror.clone());
        }

        let mut mirrors = self.inner.mirrors.write().await;
        // Re-check under the write lock; another request may have won.
        if let Some(mirror) = mirrors.get(&key) {
            return Ok(mirror.clone());
        }

        let mirror = Arc::new(Mutex::new(CartMirror::new(&self.inner.config.shop_url)?));
        mirrors.insert(key, mirror.clone());
        Ok(mirror)
    }
}
