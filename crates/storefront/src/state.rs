//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cart::{CartService, JsonFileCartRepository};
use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the catalog, and the single cart service. The cart sits
/// behind a mutex so each mutation is atomic from the caller's perspective.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: Mutex<CartService>,
}

impl AppState {
    /// Create application state from pre-built parts.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog, cart: CartService) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: Mutex::new(cart),
            }),
        }
    }

    /// Create application state from configuration alone: loads the catalog
    /// and seeds the cart service from the file-backed repository.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog file exists but is unreadable
    /// or malformed. The cart load cannot fail.
    pub fn from_config(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::load_or_seed(&config.catalog_path)?;
        let repository = JsonFileCartRepository::new(config.cart_path());
        let cart = CartService::new(Box::new(repository));
        Ok(Self::new(config, catalog, cart))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the cart service mutex.
    #[must_use]
    pub fn cart(&self) -> &Mutex<CartService> {
        &self.inner.cart
    }
}
