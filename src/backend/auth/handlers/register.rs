/**
 * Registration Handler
 *
 * Implements user registration for POST /users/.
 *
 * # Registration Process
 *
 * 1. Validate username format, email format and password length
 * 2. Check whether the username or email is already taken
 * 3. Hash the password with bcrypt
 * 4. Insert the user
 * 5. Return the created user (no token; the client logs in separately)
 *
 * # Validation
 *
 * - Username must be 3-30 characters, start with a letter, and contain
 *   only letters, digits and underscores
 * - Email must contain an '@' character (basic validation)
 * - Password must be at least 8 characters long
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage and never returned
 * - The uniqueness pre-check is advisory; the database constraint is
 *   what decides a concurrent race, and its violation maps to the same
 *   conflict response
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{find_user_by_email, find_user_by_username, insert_user};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    // Rest can be alphanumeric or underscore
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid username, email or password format
/// * `409 Conflict` - username or email already registered
/// * `500 Internal Server Error` - hashing or database failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    tracing::info!(
        "Registration request for username: {}, email: {}",
        request.username,
        request.email
    );

    if !is_valid_username(&request.username) {
        tracing::warn!("Invalid username format: {}", request.username);
        return Err(ApiError::Validation(
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores".to_string(),
        ));
    }

    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }

    if request.password.len() < 8 {
        tracing::warn!("Password too short");
        return Err(ApiError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Advisory pre-checks; the unique constraints make the final call.
    if find_user_by_username(&state.pool, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(ApiError::DuplicateUsername);
    }

    if find_user_by_email(&state.pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = hash_password(&request.password).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::Internal("password hashing failed".to_string())
    })?;

    let user = insert_user(&state.pool, &request.username, &request.email, &password_hash).await?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok(Json(user.into()))
}
