/**
 * Catalog Handlers
 *
 * HTTP handlers for browsing and creating products.
 *
 * # Routes
 *
 * - `GET /products/` - list products with optional filters (public)
 * - `GET /products/{id}` - fetch one product (public)
 * - `POST /products/` - add a product to the catalog (authenticated)
 */

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::catalog::products::{
    find_product_by_id, insert_product, list_products as query_products, Product, ProductFilter,
};
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::CurrentUser;
use crate::backend::server::state::AppState;

/// Query parameters accepted by `GET /products/`
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    /// Rows to skip (default 0)
    pub skip: Option<i64>,
    /// Maximum rows to return (default 100)
    pub limit: Option<i64>,
    /// Case-insensitive substring match over name and description
    pub search: Option<String>,
    /// Minimum price, inclusive
    pub min_price: Option<f64>,
    /// Maximum price, inclusive
    pub max_price: Option<f64>,
}

/// Body of `POST /products/`
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// List products handler
///
/// Applies the optional search/price filters, then pagination.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let filter = ProductFilter {
        search: query.search,
        min_price: query.min_price,
        max_price: query.max_price,
    };

    let products = query_products(
        &state.pool,
        &filter,
        query.skip.unwrap_or(0),
        query.limit.unwrap_or(100),
    )
    .await?;

    Ok(Json(products))
}

/// Get a single product handler
///
/// # Errors
///
/// * `404 Not Found` - no product with this id
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = find_product_by_id(&state.pool, product_id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;

    Ok(Json(product))
}

/// Create product handler
///
/// Requires authentication; any registered user may add to the catalog.
pub async fn create_product(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    tracing::info!("User {} adding product: {}", user.username, request.name);

    let product =
        insert_product(&state.pool, &request.name, &request.description, request.price).await?;

    Ok(Json(product))
}
