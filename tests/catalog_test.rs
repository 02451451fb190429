//! Catalog API integration tests
//!
//! Covers product listing filters, pagination, single-product lookup and
//! authenticated product creation.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use sqlx::SqlitePool;

use common::{create_test_pool, create_test_server, login_user, register_user};
use storefront::backend::catalog::products::insert_product;

async fn seed_catalog(pool: &SqlitePool) {
    for (name, description, price) in [
        ("Laptop", "Powerful laptop for work and play.", 1200.00),
        ("Headphones", "Noise-cancelling headphones.", 150.00),
        ("Keyboard", "Mechanical keyboard for gaming.", 100.00),
        ("Smartwatch", "Fitness tracking smartwatch.", 200.00),
    ] {
        insert_product(pool, name, description, price).await.unwrap();
    }
}

#[tokio::test]
async fn test_list_all_products() {
    let pool = create_test_pool().await;
    seed_catalog(&pool).await;
    let server = create_test_server(pool);

    let response = server.get("/products/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 4);
}

#[tokio::test]
async fn test_search_is_case_insensitive_over_name_and_description() {
    let pool = create_test_pool().await;
    seed_catalog(&pool).await;
    let server = create_test_server(pool);

    let response = server
        .get("/products/")
        .add_query_param("search", "laptop")
        .await;
    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Laptop");

    // Matches in the description too.
    let response = server
        .get("/products/")
        .add_query_param("search", "gaming")
        .await;
    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Keyboard");
}

#[tokio::test]
async fn test_price_filters() {
    let pool = create_test_pool().await;
    seed_catalog(&pool).await;
    let server = create_test_server(pool);

    let response = server
        .get("/products/")
        .add_query_param("min_price", 150)
        .add_query_param("max_price", 300)
        .await;
    let body: Vec<serde_json::Value> = response.json();

    let names: Vec<&str> = body.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Headphones", "Smartwatch"]);
}

#[tokio::test]
async fn test_pagination() {
    let pool = create_test_pool().await;
    seed_catalog(&pool).await;
    let server = create_test_server(pool);

    let response = server
        .get("/products/")
        .add_query_param("skip", 1)
        .add_query_param("limit", 2)
        .await;
    let body: Vec<serde_json::Value> = response.json();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["name"], "Headphones");
    assert_eq!(body[1]["name"], "Keyboard");
}

#[tokio::test]
async fn test_get_product_by_id() {
    let pool = create_test_pool().await;
    let product = insert_product(&pool, "Tablet", "10-inch tablet.", 250.00)
        .await
        .unwrap();
    let server = create_test_server(pool);

    let response = server.get(&format!("/products/{}", product.id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Tablet");
    assert_eq!(body["price"], 250.00);
}

#[tokio::test]
async fn test_get_missing_product_is_404() {
    let server = common::create_server().await;

    let response = server.get("/products/9999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_product_requires_auth() {
    let server = common::create_server().await;

    let response = server
        .post("/products/")
        .json(&serde_json::json!({
            "name": "Camera",
            "description": "Mirrorless digital camera.",
            "price": 700.00,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_product_authenticated() {
    let server = common::create_server().await;
    register_user(&server, "bob", "b@x.com", "password123").await;
    let token = login_user(&server, "bob", "password123").await;

    let response = server
        .post("/products/")
        .authorization_bearer(&token)
        .json(&serde_json::json!({
            "name": "Camera",
            "description": "Mirrorless digital camera.",
            "price": 700.00,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Camera");

    // Visible in the public listing afterwards.
    let listing = server.get("/products/").await;
    let products: Vec<serde_json::Value> = listing.json();
    assert_eq!(products.len(), 1);
}
