//! Orders Module
//!
//! Creation and owner-scoped listing of orders.
//!
//! # Module Structure
//!
//! ```text
//! orders/
//! ├── mod.rs      - Module exports
//! ├── orders.rs   - Order/item models and database operations
//! └── handlers.rs - HTTP handlers
//! ```

/// Order and line-item models and database operations
pub mod orders;

/// HTTP handlers for order endpoints
pub mod handlers;

pub use handlers::{create_order, list_orders};
pub use orders::{NewOrderItem, Order, OrderItem};
