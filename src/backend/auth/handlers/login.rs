/**
 * Login Handler
 *
 * Implements the token endpoint for POST /token.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password with bcrypt
 * 3. Issue a 30-minute JWT
 * 4. Return `{access_token, token_type: "bearer"}`
 *
 * # Security
 *
 * - Unknown username and wrong password produce byte-identical 401
 *   responses so callers cannot probe which usernames exist
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json, Form};
use chrono::Duration;

use crate::backend::auth::handlers::types::{TokenRequest, TokenResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::users::find_user_by_username;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Token lifetime granted by a successful login
const ACCESS_TOKEN_TTL_MINUTES: i64 = 30;

/// Login handler
///
/// Accepts a form-encoded body (`username`, `password`), matching the
/// OAuth2 password-flow token request shape.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown username or wrong password
/// * `500 Internal Server Error` - database or token-signing failure
pub async fn login(
    State(state): State<AppState>,
    Form(request): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.username);

    let user = find_user_by_username(&state.pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            ApiError::BadCredentials
        })?;

    if !verify_password(&request.password, &user.password_hash) {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(ApiError::BadCredentials);
    }

    let access_token = state
        .tokens
        .issue_with_ttl(&user.username, Duration::minutes(ACCESS_TOKEN_TTL_MINUTES))
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            ApiError::Internal("token signing failed".to_string())
        })?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
