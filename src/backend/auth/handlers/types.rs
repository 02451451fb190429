/**
 * Authentication Handler Types
 *
 * Request and response types used by the registration, login and
 * current-user handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Registration request
///
/// Contains the username, email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request, submitted form-encoded to `POST /token`
#[derive(Deserialize, Serialize, Debug)]
pub struct TokenRequest {
    /// User's username
    pub username: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

/// Bearer token response returned by a successful login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed JWT, valid until its encoded expiry
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID
    pub id: i64,
    /// User's username
    pub username: String,
    /// User's email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
