//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation answers with a fragment and an `HX-Trigger: cart-updated`
//! header; the header badge listens for that event and refetches its count.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use roastline_core::{CartSummary, LineItem, Money, ProductId};

use crate::cart::CartUpdate;
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: Money,
    pub line_total: Money,
    pub image: String,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price,
            line_total: item.line_total(),
            image: item.image.clone(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub items: Vec<CartItemView>,
    pub summary: CartSummary,
    pub notice: Option<&'static str>,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub items: Vec<CartItemView>,
    pub summary: CartSummary,
    pub notice: Option<&'static str>,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Toast fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub notice: Option<&'static str>,
}

fn items_fragment(items: Vec<CartItemView>, update: &CartUpdate) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            items,
            summary: update.summary.clone(),
            notice: update.notice,
        },
    )
        .into_response()
}

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> CartShowTemplate {
    let cart = state.cart().lock().await;
    CartShowTemplate {
        items: cart.items().iter().map(CartItemView::from).collect(),
        summary: cart.summary(),
        notice: None,
    }
}

/// Add a product to the cart (HTMX).
///
/// Looks the product up in the catalog, merges it into the cart, and returns
/// a toast fragment with the `cart-updated` trigger.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .find(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?
        .clone();

    let mut cart = state.cart().lock().await;
    let update = cart.add_item(&product)?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        ToastTemplate {
            notice: update.notice,
        },
    )
        .into_response())
}

/// Update a cart line's quantity (HTMX).
///
/// A quantity of zero removes the line; unknown ids are a no-op. Returns the
/// cart items fragment so the page re-renders items and summary together.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let id = ProductId::new(form.product_id);

    let mut cart = state.cart().lock().await;
    let update = cart.update_quantity(&id, form.quantity)?;
    let items = cart.items().iter().map(CartItemView::from).collect();

    Ok(items_fragment(items, &update))
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let id = ProductId::new(form.product_id);

    let mut cart = state.cart().lock().await;
    let update = cart.remove_item(&id)?;
    let items = cart.items().iter().map(CartItemView::from).collect();

    Ok(items_fragment(items, &update))
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> CartCountTemplate {
    let cart = state.cart().lock().await;
    CartCountTemplate {
        count: cart.item_count(),
    }
}
