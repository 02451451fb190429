//! Orders API integration tests
//!
//! Covers transactional order creation, owner scoping, and the
//! rollback behavior when an item references a missing product.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use sqlx::SqlitePool;

use common::{create_test_pool, create_test_server, login_user, register_user};
use storefront::backend::catalog::products::insert_product;

async fn seed_two_products(pool: &SqlitePool) -> (i64, i64) {
    let laptop = insert_product(pool, "Laptop", "Powerful laptop.", 1200.00)
        .await
        .unwrap();
    let mouse = insert_product(pool, "Wireless Mouse", "Ergonomic wireless mouse.", 50.00)
        .await
        .unwrap();
    (laptop.id, mouse.id)
}

#[tokio::test]
async fn test_create_order_with_items() {
    let pool = create_test_pool().await;
    let (laptop_id, mouse_id) = seed_two_products(&pool).await;
    let server = create_test_server(pool);

    register_user(&server, "bob", "b@x.com", "password123").await;
    let token = login_user(&server, "bob", "password123").await;

    let response = server
        .post("/orders/")
        .authorization_bearer(&token)
        .json(&serde_json::json!({
            "total": 1300.00,
            "items": [
                {"product_id": laptop_id, "quantity": 1},
                {"product_id": mouse_id, "quantity": 2},
            ],
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 1300.00);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][1]["quantity"], 2);
}

#[tokio::test]
async fn test_orders_require_auth() {
    let server = common::create_server().await;

    let create = server
        .post("/orders/")
        .json(&serde_json::json!({"total": 1.0, "items": []}))
        .await;
    assert_eq!(create.status_code(), StatusCode::UNAUTHORIZED);

    let list = server.get("/orders/").await;
    assert_eq!(list.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_orders_are_scoped_to_their_owner() {
    let pool = create_test_pool().await;
    let (laptop_id, _) = seed_two_products(&pool).await;
    let server = create_test_server(pool);

    register_user(&server, "alice", "alice@example.com", "password123").await;
    register_user(&server, "bob", "bob@example.com", "password123").await;
    let alice_token = login_user(&server, "alice", "password123").await;
    let bob_token = login_user(&server, "bob", "password123").await;

    let created = server
        .post("/orders/")
        .authorization_bearer(&alice_token)
        .json(&serde_json::json!({
            "total": 1200.00,
            "items": [{"product_id": laptop_id, "quantity": 1}],
        }))
        .await;
    assert_eq!(created.status_code(), StatusCode::OK);

    let alice_orders = server
        .get("/orders/")
        .authorization_bearer(&alice_token)
        .await;
    let alice_body: Vec<serde_json::Value> = alice_orders.json();
    assert_eq!(alice_body.len(), 1);

    // Bob sees nothing of Alice's order.
    let bob_orders = server
        .get("/orders/")
        .authorization_bearer(&bob_token)
        .await;
    let bob_body: Vec<serde_json::Value> = bob_orders.json();
    assert_eq!(bob_body.len(), 0);
}

#[tokio::test]
async fn test_order_with_unknown_product_rolls_back() {
    let pool = create_test_pool().await;
    let (laptop_id, _) = seed_two_products(&pool).await;
    let server = create_test_server(pool.clone());

    register_user(&server, "bob", "b@x.com", "password123").await;
    let token = login_user(&server, "bob", "password123").await;

    let response = server
        .post("/orders/")
        .authorization_bearer(&token)
        .json(&serde_json::json!({
            "total": 1250.00,
            "items": [
                {"product_id": laptop_id, "quantity": 1},
                {"product_id": 9999, "quantity": 1},
            ],
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // The whole transaction rolled back: no order, no orphaned items.
    let (orders,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(&pool)
        .await
        .unwrap();
    let (items,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM order_items")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orders, 0);
    assert_eq!(items, 0);
}
