//! HTTP surface tests driven through the axum router.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use roastline_integration_tests::TestContext;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let ctx = TestContext::new();
    let response = ctx.router().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn home_lists_the_full_catalog() {
    let ctx = TestContext::new();
    let response = ctx.router().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Total products: 8"));
    assert!(body.contains("Qualità Oro Mountain Grown"));
}

#[tokio::test]
async fn home_filter_narrows_the_grid() {
    let ctx = TestContext::new();
    let response = ctx
        .router()
        .oneshot(get("/?brand=welikecoffee"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Total products: 2"));
}

#[tokio::test]
async fn product_page_shows_price() {
    let ctx = TestContext::new();
    let response = ctx.router().oneshot(get("/products/3")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("$99.99"));
}

#[tokio::test]
async fn unknown_product_page_is_404() {
    let ctx = TestContext::new();
    let response = ctx.router().oneshot(get("/products/404")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn add_to_cart_returns_toast_and_trigger() {
    let ctx = TestContext::new();
    let response = ctx
        .router()
        .oneshot(form_post("/cart/add", "product_id=1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").unwrap(),
        "cart-updated"
    );
    let body = body_string(response).await;
    assert!(body.contains("Added to cart"));

    // The badge fragment reflects the new count
    let response = ctx.router().oneshot(get("/cart/count")).await.unwrap();
    assert_eq!(body_string(response).await.trim(), "1");
}

#[tokio::test]
async fn add_unknown_product_is_404() {
    let ctx = TestContext::new();
    let response = ctx
        .router()
        .oneshot(form_post("/cart/add", "product_id=nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cart_page_shows_items_and_summary() {
    let ctx = TestContext::new();

    // Empty state first
    let response = ctx.router().oneshot(get("/cart")).await.unwrap();
    let body = body_string(response).await;
    assert!(body.contains("Your cart is empty."));

    ctx.router()
        .oneshot(form_post("/cart/add", "product_id=1"))
        .await
        .unwrap();

    let response = ctx.router().oneshot(get("/cart")).await.unwrap();
    let body = body_string(response).await;
    assert!(body.contains("Coffee Beans - Espresso Arabica and Robusta Beans"));
    assert!(body.contains("$47.00"));
    // Below the free-shipping threshold the flat fee shows
    assert!(body.contains("$5.99"));
    assert!(body.contains("$52.99"));
}

#[tokio::test]
async fn shipping_renders_free_above_threshold() {
    let ctx = TestContext::new();
    ctx.router()
        .oneshot(form_post("/cart/add", "product_id=1"))
        .await
        .unwrap();

    let response = ctx
        .router()
        .oneshot(form_post("/cart/update", "product_id=1&quantity=2"))
        .await
        .unwrap();

    // $94.00 subtotal crosses the threshold
    let body = body_string(response).await;
    assert!(body.contains("Free"));
    assert!(body.contains("$94.00"));
}

#[tokio::test]
async fn update_to_zero_renders_empty_fragment() {
    let ctx = TestContext::new();
    ctx.router()
        .oneshot(form_post("/cart/add", "product_id=2"))
        .await
        .unwrap();

    let response = ctx
        .router()
        .oneshot(form_post("/cart/update", "product_id=2&quantity=0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn remove_returns_fragment_with_notice() {
    let ctx = TestContext::new();
    ctx.router()
        .oneshot(form_post("/cart/add", "product_id=1"))
        .await
        .unwrap();

    let response = ctx
        .router()
        .oneshot(form_post("/cart/remove", "product_id=1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").unwrap(),
        "cart-updated"
    );
    let body = body_string(response).await;
    assert!(body.contains("Removed from cart"));
    assert!(body.contains("Your cart is empty."));
}
