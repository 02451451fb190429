//! Shared test fixtures
//!
//! Spins the full router up against an in-memory SQLite database so tests
//! exercise the real HTTP surface: routing, extractors, error conversion
//! and storage together.

use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use storefront::backend::auth::sessions::{Clock, TokenCodec};
use storefront::backend::routes::router::create_router;
use storefront::backend::server::state::AppState;

/// Signing secret shared by every test server
pub const TEST_SECRET: &str = "test-secret";

/// Create an in-memory database with migrations applied
///
/// A single connection keeps the in-memory database alive for the whole
/// test; `sqlite::memory:` gives every connection its own database, so
/// the pool must never grow past one.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Start a test server over the given pool
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let state = AppState {
        pool,
        tokens: TokenCodec::new(TEST_SECRET, Clock::system()),
    };
    let app = create_router(state, "http://localhost:5173");
    TestServer::new(app).expect("Failed to start test server")
}

/// Start a test server on a fresh in-memory database
pub async fn create_server() -> TestServer {
    create_test_server(create_test_pool().await)
}

/// Register a user through the API
pub async fn register_user(server: &TestServer, username: &str, email: &str, password: &str) {
    let response = server
        .post("/users/")
        .json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .await;
    assert!(
        response.status_code().is_success(),
        "registration failed: {}",
        response.text()
    );
}

/// Log a user in through the API and return the bearer token
pub async fn login_user(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/token")
        .form(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .await;
    assert!(
        response.status_code().is_success(),
        "login failed: {}",
        response.text()
    );
    let body: serde_json::Value = response.json();
    body["access_token"].as_str().expect("missing token").to_string()
}
