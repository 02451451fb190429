/**
 * Authentication Extractor
 *
 * Resolves a presented bearer token to a stored identity. Handlers that
 * require authentication take a `CurrentUser` parameter; extraction
 * failing means the handler never runs and the client gets 401 with a
 * `WWW-Authenticate: Bearer` challenge.
 *
 * Resolution is stateless: every request re-validates its token and
 * performs exactly one storage lookup. Nothing is cached between calls.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::auth::users::{find_user_by_username, User};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Resolve a bearer token to the identity it was issued to
///
/// Decodes and verifies the token, then loads the user named by the `sub`
/// claim. Any token failure and a missing user both collapse to
/// `Unauthorized`; storage failures surface as `Storage`.
pub async fn resolve_identity(
    pool: &SqlitePool,
    tokens: &TokenCodec,
    token: &str,
) -> Result<User, ApiError> {
    let claims = tokens.decode(token).map_err(|_| {
        tracing::warn!("Token failed verification");
        ApiError::Unauthorized
    })?;

    find_user_by_username(pool, &claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject no longer exists: {}", claims.sub);
            ApiError::Unauthorized
        })
}

/// Authenticated user, extracted from the `Authorization` header
///
/// Usable as a handler parameter:
///
/// ```rust,no_run
/// use storefront::backend::middleware::auth::CurrentUser;
///
/// async fn handler(CurrentUser(user): CurrentUser) {
///     // user is the verified identity
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                ApiError::Unauthorized
            })?;

        // Expected format: "Bearer <token>"
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            ApiError::Unauthorized
        })?;

        let user = resolve_identity(&state.pool, &state.tokens, token).await?;

        Ok(CurrentUser(user))
    }
}
