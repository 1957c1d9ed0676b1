//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                 - Home page: product grid with filter/search
//! GET  /health           - Health check
//! GET  /health/ready     - Readiness check
//!
//! # Products
//! GET  /products/{id}    - Product detail
//!
//! # Cart (HTMX fragments)
//! GET  /cart             - Cart page
//! POST /cart/add         - Add to cart (returns toast, triggers cart-updated)
//! POST /cart/update      - Update quantity (returns cart_items fragment)
//! POST /cart/remove      - Remove item (returns cart_items fragment)
//! GET  /cart/count       - Cart count badge (fragment)
//! ```

pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
}
