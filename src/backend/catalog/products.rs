/**
 * Product Model and Database Operations
 *
 * This module handles catalog data and database operations.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Product struct representing a catalog entry in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Unique product ID
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
}

/// Filters for listing products
///
/// All fields are optional; an unset field does not constrain the query.
#[derive(Debug, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring match over name and description
    pub search: Option<String>,
    /// Minimum price, inclusive
    pub min_price: Option<f64>,
    /// Maximum price, inclusive
    pub max_price: Option<f64>,
}

/// List products matching a filter, with pagination
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `filter` - Search and price constraints
/// * `skip` - Number of rows to skip
/// * `limit` - Maximum number of rows to return
pub async fn list_products(
    pool: &SqlitePool,
    filter: &ProductFilter,
    skip: i64,
    limit: i64,
) -> Result<Vec<Product>, sqlx::Error> {
    let pattern = filter.search.as_ref().map(|s| format!("%{}%", s));

    sqlx::query_as::<_, Product>(
        r#"
        SELECT id, name, description, price
        FROM products
        WHERE (?1 IS NULL OR name LIKE ?1 OR description LIKE ?1)
          AND (?2 IS NULL OR price >= ?2)
          AND (?3 IS NULL OR price <= ?3)
        ORDER BY id
        LIMIT ?4 OFFSET ?5
        "#,
    )
    .bind(pattern)
    .bind(filter.min_price)
    .bind(filter.max_price)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

/// Get product by ID
///
/// # Returns
/// Product or None if not found
pub async fn find_product_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        r#"
        SELECT id, name, description, price
        FROM products
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a new product
pub async fn insert_product(
    pool: &SqlitePool,
    name: &str,
    description: &str,
    price: f64,
) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, description, price)
        VALUES (?, ?, ?)
        RETURNING id, name, description, price
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .fetch_one(pool)
    .await
}
