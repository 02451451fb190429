/**
 * API Error Types
 *
 * This module defines the error taxonomy shared by all HTTP handlers.
 *
 * # Error Categories
 *
 * - `DuplicateUsername` / `DuplicateEmail` - registration conflicts
 * - `BadCredentials` - login mismatch; deliberately identical whether the
 *   username is unknown or the password is wrong
 * - `Unauthorized` - missing/invalid/expired token, or token subject gone
 * - `NotFound` - a referenced record does not exist
 * - `Validation` - malformed client input
 * - `Storage` - unexpected database failure, reported generically
 * - `Internal` - anything else that should never happen
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error type returned by every handler
///
/// Each variant maps to a fixed HTTP status code via [`ApiError::status_code`]
/// and a client-facing message via [`ApiError::message`]. Storage details are
/// kept in the variant for logging but never sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Username already taken at registration time
    #[error("Username already registered")]
    DuplicateUsername,

    /// Email already taken at registration time
    #[error("Email already registered")]
    DuplicateEmail,

    /// Login failed: unknown username or wrong password
    #[error("Incorrect username or password")]
    BadCredentials,

    /// Bearer token missing, invalid, expired, or subject no longer stored
    #[error("Could not validate credentials")]
    Unauthorized,

    /// A referenced record does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Malformed client input
    #[error("{0}")]
    Validation(String),

    /// Unexpected database failure
    #[error("Database error: {0}")]
    Storage(String),

    /// Internal failure (hashing, token signing)
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateUsername | Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::BadCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// `Storage` and `Internal` deliberately collapse to generic messages;
    /// the underlying detail is only logged server-side.
    pub fn message(&self) -> String {
        match self {
            Self::Storage(_) => "Database error".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}
