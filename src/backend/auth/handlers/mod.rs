/**
 * Authentication Handlers
 *
 * HTTP handlers for the authentication endpoints.
 */

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export handlers for route configuration
pub use login::login;
pub use me::get_me;
pub use register::register;
