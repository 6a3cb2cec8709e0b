//! Wire-shape tests for the shop's four endpoints.
//!
//! These pin the exact JSON bodies the API speaks, since the storefront (and
//! any other client) keys off them.

use reqwest::StatusCode;
use serde_json::{Value, json};

use mercadito_integration_tests::{cookie_client, demo_catalog, spawn_shop};
use mercadito_shop::catalog::Catalog;

#[tokio::test]
async fn test_search_returns_product_array() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    let body: Value = client
        .get(format!("{base_url}/search"))
        .query(&[("q", "widg")])
        .send()
        .await
        .expect("search request failed")
        .json()
        .await
        .expect("search body was not JSON");

    assert_eq!(
        body,
        json!([{"id": 1, "name": "Widget", "price": 9.99, "stock": 10}])
    );
}

#[tokio::test]
async fn test_search_empty_query_returns_full_catalog() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    let body: Value = client
        .get(format!("{base_url}/search"))
        .query(&[("q", "")])
        .send()
        .await
        .expect("search request failed")
        .json()
        .await
        .expect("search body was not JSON");

    let names: Vec<&str> = body
        .as_array()
        .expect("expected array")
        .iter()
        .map(|p| p["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, ["Widget", "Gadget"]);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    let body: Value = client
        .get(format!("{base_url}/search"))
        .query(&[("q", "GADG")])
        .send()
        .await
        .expect("search request failed")
        .json()
        .await
        .expect("search body was not JSON");

    assert_eq!(body[0]["name"], "Gadget");
}

#[tokio::test]
async fn test_add_to_cart_returns_full_cart_and_merges() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    let first: Value = client
        .post(format!("{base_url}/add_to_cart"))
        .json(&json!({"product_id": 1, "quantity": 1}))
        .send()
        .await
        .expect("add request failed")
        .json()
        .await
        .expect("add body was not JSON");

    assert_eq!(
        first,
        json!([{"product_id": 1, "name": "Widget", "price": 9.99, "quantity": 1}])
    );

    // Adding the same product again bumps the existing line.
    let second: Value = client
        .post(format!("{base_url}/add_to_cart"))
        .json(&json!({"product_id": 1, "quantity": 1}))
        .send()
        .await
        .expect("add request failed")
        .json()
        .await
        .expect("add body was not JSON");

    assert_eq!(
        second,
        json!([{"product_id": 1, "name": "Widget", "price": 9.99, "quantity": 2}])
    );
}

#[tokio::test]
async fn test_add_quantity_defaults_to_one() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    let body: Value = client
        .post(format!("{base_url}/add_to_cart"))
        .json(&json!({"product_id": 2}))
        .send()
        .await
        .expect("add request failed")
        .json()
        .await
        .expect("add body was not JSON");

    assert_eq!(body[0]["quantity"], 1);
}

#[tokio::test]
async fn test_add_unknown_product_is_404() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    let response = client
        .post(format!("{base_url}/add_to_cart"))
        .json(&json!({"product_id": 99, "quantity": 1}))
        .send()
        .await
        .expect("add request failed");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("error body was not JSON");
    assert_eq!(body, json!({"error": "Product not found"}));
}

#[tokio::test]
async fn test_update_cart_sets_quantity_verbatim() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    client
        .post(format!("{base_url}/add_to_cart"))
        .json(&json!({"product_id": 2, "quantity": 1}))
        .send()
        .await
        .expect("add request failed");

    let body: Value = client
        .post(format!("{base_url}/update_cart"))
        .json(&json!({"product_id": 2, "quantity": 5}))
        .send()
        .await
        .expect("update request failed")
        .json()
        .await
        .expect("update body was not JSON");

    assert_eq!(body[0]["quantity"], 5);
}

#[tokio::test]
async fn test_update_to_zero_removes_line() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    client
        .post(format!("{base_url}/add_to_cart"))
        .json(&json!({"product_id": 1, "quantity": 1}))
        .send()
        .await
        .expect("add request failed");

    let body: Value = client
        .post(format!("{base_url}/update_cart"))
        .json(&json!({"product_id": 1, "quantity": 0}))
        .send()
        .await
        .expect("update request failed")
        .json()
        .await
        .expect("update body was not JSON");

    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_update_below_zero_also_removes_line() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    client
        .post(format!("{base_url}/add_to_cart"))
        .json(&json!({"product_id": 1, "quantity": 2}))
        .send()
        .await
        .expect("add request failed");

    // The storefront stepper sends current - 1 unclamped; from a ghost
    // double-click this can go negative. The shop floors it at removal.
    let body: Value = client
        .post(format!("{base_url}/update_cart"))
        .json(&json!({"product_id": 1, "quantity": -1}))
        .send()
        .await
        .expect("update request failed")
        .json()
        .await
        .expect("update body was not JSON");

    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_update_unknown_line_is_noop() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    client
        .post(format!("{base_url}/add_to_cart"))
        .json(&json!({"product_id": 1, "quantity": 1}))
        .send()
        .await
        .expect("add request failed");

    let body: Value = client
        .post(format!("{base_url}/update_cart"))
        .json(&json!({"product_id": 2, "quantity": 7}))
        .send()
        .await
        .expect("update request failed")
        .json()
        .await
        .expect("update body was not JSON");

    assert_eq!(
        body,
        json!([{"product_id": 1, "name": "Widget", "price": 9.99, "quantity": 1}])
    );
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let base_url = spawn_shop(demo_catalog()).await;
    let first = cookie_client();
    let second = cookie_client();

    first
        .post(format!("{base_url}/add_to_cart"))
        .json(&json!({"product_id": 1, "quantity": 3}))
        .send()
        .await
        .expect("add request failed");

    // The second session's cart is still empty: a no-op update returns it.
    let body: Value = second
        .post(format!("{base_url}/update_cart"))
        .json(&json!({"product_id": 1, "quantity": 1}))
        .send()
        .await
        .expect("update request failed")
        .json()
        .await
        .expect("update body was not JSON");

    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_checkout_confirms_and_clears_cart() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    client
        .post(format!("{base_url}/add_to_cart"))
        .json(&json!({"product_id": 1, "quantity": 2}))
        .send()
        .await
        .expect("add request failed");
    client
        .post(format!("{base_url}/add_to_cart"))
        .json(&json!({"product_id": 2, "quantity": 1}))
        .send()
        .await
        .expect("add request failed");

    let response = client
        .post(format!("{base_url}/checkout"))
        .send()
        .await
        .expect("checkout request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("checkout body was not JSON");
    assert_eq!(body["message"], "Order placed successfully");
    assert_eq!(body["order"]["total"], json!(24.48));
    assert_eq!(body["order"]["items"].as_array().map(Vec::len), Some(2));

    // The cart is gone: a second checkout finds nothing to buy.
    let response = client
        .post(format!("{base_url}/checkout"))
        .send()
        .await
        .expect("checkout request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_checkout_empty_cart_is_400() {
    let base_url = spawn_shop(demo_catalog()).await;
    let client = cookie_client();

    let response = client
        .post(format!("{base_url}/checkout"))
        .send()
        .await
        .expect("checkout request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("error body was not JSON");
    assert_eq!(body, json!({"error": "Cart is empty"}));
}

#[tokio::test]
async fn test_builtin_catalog_serves_search() {
    let base_url = spawn_shop(Catalog::builtin()).await;
    let client = cookie_client();

    let body: Value = client
        .get(format!("{base_url}/search"))
        .query(&[("q", "lap")])
        .send()
        .await
        .expect("search request failed")
        .json()
        .await
        .expect("search body was not JSON");

    assert_eq!(
        body,
        json!([{"id": 1, "name": "Laptop", "price": 999.99, "stock": 10}])
    );
}
