//! Storefront - Main Library
//!
//! A small e-commerce backend: user registration, password-based login
//! issuing bearer tokens, and browsing/creation of products and orders
//! over SQLite.
//!
//! # Overview
//!
//! The crate is a library plus a server binary (`storefront-server`).
//! All functionality lives under [`backend`]:
//!
//! - Axum HTTP server with JSON (and one form-encoded) endpoints
//! - bcrypt password hashing and stateless HS256 JWT sessions
//! - sqlx/SQLite storage with embedded migrations
//!
//! # Usage
//!
//! ```rust,no_run
//! use storefront::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! // Serve app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `Result`; HTTP handlers surface failures as
//! [`backend::error::ApiError`], which renders to a JSON error response.

/// Backend server-side code
pub mod backend;
