/**
 * API Route Handlers
 *
 * Maps every HTTP endpoint to its handler.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /users/` - user registration
 * - `POST /token` - login, returns a bearer token (form-encoded body)
 * - `GET /users/me/` - current user (requires authentication)
 *
 * ## Catalog
 * - `GET /products/` - list products with optional filters
 * - `GET /products/{product_id}` - fetch one product
 * - `POST /products/` - create a product (requires authentication)
 *
 * ## Orders
 * - `POST /orders/` - create an order (requires authentication)
 * - `GET /orders/` - list own orders (requires authentication)
 */

use axum::{routing, Router};

use crate::backend::auth::{get_me, login, register};
use crate::backend::catalog::{create_product, get_product, list_products};
use crate::backend::orders::{create_order, list_orders};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Authentication is enforced per handler through the `CurrentUser`
/// extractor rather than a route layer, so public and protected routes
/// can share prefixes freely.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/users/", routing::post(register))
        .route("/token", routing::post(login))
        .route("/users/me/", routing::get(get_me))
        // Catalog endpoints
        .route(
            "/products/",
            routing::get(list_products).post(create_product),
        )
        .route("/products/{product_id}", routing::get(get_product))
        // Order endpoints
        .route("/orders/", routing::post(create_order).get(list_orders))
}
