//! Backend Module
//!
//! Server-side code for the storefront application: an Axum HTTP server
//! over a SQLite database, with stateless bearer-token authentication.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, password hashing, JWT sessions
//! - **`catalog`** - Product browsing and creation
//! - **`orders`** - Order creation and owner-scoped listing
//! - **`middleware`** - The `CurrentUser` authentication extractor
//! - **`error`** - API error taxonomy
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── catalog/        - Products
//! ├── orders/         - Orders
//! ├── middleware/     - Request authentication
//! └── error/          - Error types
//! ```
//!
//! # Concurrency
//!
//! Every request is an independent tokio task. Handlers share no mutable
//! in-process state; the database pool is the only shared resource, and
//! each request's connection is returned on every exit path. Uniqueness
//! races (concurrent registration of one username) are decided by the
//! database constraint and surfaced as client errors.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Product catalog
pub mod catalog;

/// Orders
pub mod orders;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState, ServerConfig};
