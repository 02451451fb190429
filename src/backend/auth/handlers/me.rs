/**
 * Get Current User Handler
 *
 * Implements GET /users/me/, returning the currently authenticated user.
 *
 * Authentication happens in the `CurrentUser` extractor: the bearer token
 * is verified and the identity loaded before this handler runs, so the
 * body is a straight projection to the response type.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::middleware::auth::CurrentUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - token missing, invalid, expired, or its subject
///   no longer exists (rejected by the extractor)
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}
