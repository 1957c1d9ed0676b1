//! Integration tests for Roastline.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p roastline-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart service against real file-backed persistence
//! - `storefront_http` - HTTP surface driven through the axum router
//!
//! No external services are needed: each test context gets its own
//! temporary data directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::IpAddr;
use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use tempfile::TempDir;

use roastline_storefront::cart::{CartService, JsonFileCartRepository};
use roastline_storefront::catalog::{Catalog, seed_products};
use roastline_storefront::config::StorefrontConfig;
use roastline_storefront::routes;
use roastline_storefront::state::AppState;

/// Shared setup for integration tests: an isolated data directory plus the
/// app state and router built on top of it.
pub struct TestContext {
    data_dir: TempDir,
    state: AppState,
}

impl TestContext {
    /// Create a context with the seed catalog and an empty cart.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created; tests cannot
    /// proceed without one.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("create temp data dir");
        let config = test_config(data_dir.path().to_path_buf());

        let catalog = Catalog::from_products(seed_products());
        let repository = JsonFileCartRepository::new(config.cart_path());
        let cart = CartService::new(Box::new(repository));

        let state = AppState::new(config, catalog, cart);
        Self { data_dir, state }
    }

    /// The application state under test.
    #[must_use]
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Path of the persisted cart file inside the test data directory.
    #[must_use]
    pub fn cart_path(&self) -> PathBuf {
        self.data_dir.path().join("cart.json")
    }

    /// Build the full router, including the health endpoint, ready for
    /// `tower::ServiceExt::oneshot` calls.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(|| async { "ok" }))
            .merge(routes::routes())
            .with_state(self.state())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

fn test_config(data_dir: PathBuf) -> StorefrontConfig {
    let host: IpAddr = "127.0.0.1".parse().unwrap_or(IpAddr::from([127, 0, 0, 1]));
    StorefrontConfig {
        host,
        port: 0,
        catalog_path: data_dir.join("catalog.json"),
        static_dir: data_dir.join("static"),
        data_dir,
    }
}
