/**
 * Order Handlers
 *
 * HTTP handlers for creating and listing orders. Both routes require
 * authentication, and orders are always scoped to their owner: listing
 * never returns another user's orders.
 *
 * # Routes
 *
 * - `POST /orders/` - create an order with its line items
 * - `GET /orders/` - list the caller's orders
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::CurrentUser;
use crate::backend::orders::orders::{
    create_order as insert_order, list_items_for_order, list_orders_for_user, NewOrderItem, Order,
    OrderItem,
};
use crate::backend::server::state::AppState;

/// Body of `POST /orders/`
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateOrderRequest {
    pub total: f64,
    pub items: Vec<NewOrderItem>,
}

/// A line item in an order response
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

/// An order with its line items
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    pub total: f64,
    pub items: Vec<OrderItemResponse>,
}

impl OrderResponse {
    fn assemble(order: Order, items: Vec<OrderItem>) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            total: order.total,
            items: items
                .into_iter()
                .map(|item| OrderItemResponse {
                    id: item.id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

/// Create order handler
///
/// The order and its items are written in one transaction; a failure on
/// any item rolls everything back.
///
/// # Errors
///
/// * `400 Bad Request` - an item references an unknown product
/// * `401 Unauthorized` - missing or invalid token
pub async fn create_order(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    tracing::info!(
        "User {} creating order with {} items",
        user.username,
        request.items.len()
    );

    let (order, items) = insert_order(&state.pool, user.id, request.total, &request.items).await?;

    Ok(Json(OrderResponse::assemble(order, items)))
}

/// List orders handler
///
/// Returns only the orders owned by the authenticated caller.
pub async fn list_orders(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let orders = list_orders_for_user(&state.pool, user.id).await?;

    let mut responses = Vec::with_capacity(orders.len());
    for order in orders {
        let items = list_items_for_order(&state.pool, order.id).await?;
        responses.push(OrderResponse::assemble(order, items));
    }

    Ok(Json(responses))
}
