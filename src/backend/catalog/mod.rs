//! Product Catalog Module
//!
//! Browsing and creation of catalog products.
//!
//! # Module Structure
//!
//! ```text
//! catalog/
//! ├── mod.rs      - Module exports
//! ├── products.rs - Product model and database operations
//! └── handlers.rs - HTTP handlers
//! ```

/// Product model and database operations
pub mod products;

/// HTTP handlers for catalog endpoints
pub mod handlers;

pub use handlers::{create_product, get_product, list_products};
pub use products::Product;
