/**
 * Order Model and Database Operations
 *
 * Orders and their line items. Creation is transactional: the order row
 * and every item row commit together or not at all, so a failure midway
 * leaves storage unchanged.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::error::ApiError;

/// Order struct representing an order in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    /// Unique order ID
    pub id: i64,
    /// Owner of the order
    pub user_id: i64,
    /// Order total as submitted by the client
    pub total: f64,
}

/// A single line item of an order
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItem {
    /// Unique item ID
    pub id: i64,
    /// Order this item belongs to
    pub order_id: i64,
    /// Catalog product being ordered
    pub product_id: i64,
    /// Number of units
    pub quantity: i64,
}

/// A line item as submitted at order creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Create an order with its items in a single transaction
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user_id` - Owner of the new order
/// * `total` - Order total
/// * `items` - Line items
///
/// # Returns
/// The created order and its items. An item referencing an unknown
/// product aborts the whole transaction and surfaces as a validation
/// error; nothing is committed.
pub async fn create_order(
    pool: &SqlitePool,
    user_id: i64,
    total: f64,
    items: &[NewOrderItem],
) -> Result<(Order, Vec<OrderItem>), ApiError> {
    let mut tx = pool.begin().await?;

    let order = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (user_id, total)
        VALUES (?, ?)
        RETURNING id, user_id, total
        "#,
    )
    .bind(user_id)
    .bind(total)
    .fetch_one(&mut *tx)
    .await?;

    let mut saved_items = Vec::with_capacity(items.len());
    for item in items {
        let result = sqlx::query_as::<_, OrderItem>(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity)
            VALUES (?, ?, ?)
            RETURNING id, order_id, product_id, quantity
            "#,
        )
        .bind(order.id)
        .bind(item.product_id)
        .bind(item.quantity)
        .fetch_one(&mut *tx)
        .await;

        match result {
            Ok(saved) => saved_items.push(saved),
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => {
                // Transaction rolls back on drop.
                return Err(ApiError::Validation(format!(
                    "Product {} does not exist",
                    item.product_id
                )));
            }
            Err(err) => return Err(err.into()),
        }
    }

    tx.commit().await?;

    Ok((order, saved_items))
}

/// List all orders belonging to a user
pub async fn list_orders_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        r#"
        SELECT id, user_id, total
        FROM orders
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// List the items of one order
pub async fn list_items_for_order(
    pool: &SqlitePool,
    order_id: i64,
) -> Result<Vec<OrderItem>, sqlx::Error> {
    sqlx::query_as::<_, OrderItem>(
        r#"
        SELECT id, order_id, product_id, quantity
        FROM order_items
        WHERE order_id = ?
        ORDER BY id
        "#,
    )
    .bind(order_id)
    .fetch_all(pool)
    .await
}
