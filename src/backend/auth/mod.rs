//! Authentication Module
//!
//! This module handles user registration, password-based login and
//! stateless bearer-token sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt password hashing
//! ├── sessions.rs     - JWT issuance and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - Token endpoint handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: client submits username/email/password → user stored
//! 2. **Login**: credentials verified against the bcrypt hash → JWT issued
//! 3. **Authenticated requests**: client presents the JWT as a bearer
//!    token; the `CurrentUser` extractor re-validates it on every call
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are stateless, signed HS256 JWTs that expire after 30 minutes
//! - Invalid credentials return 401 with no information leakage

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token issuance and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{RegisterRequest, TokenRequest, TokenResponse, UserResponse};
pub use handlers::{get_me, login, register};
pub use sessions::{Claims, Clock, InvalidToken, TokenCodec};
