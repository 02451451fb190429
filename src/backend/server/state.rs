/**
 * Application State Management
 *
 * Defines the application state shared by all handlers and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Thread Safety
 *
 * Both fields are cheap to clone and internally shared: `SqlitePool` is a
 * handle over a connection pool, and `TokenCodec` holds immutable keys.
 * There is no cross-request mutable in-process state; the database is the
 * only shared resource.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenCodec;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `pool` - database connection pool; per-request connections are
///   acquired from it and returned on every exit path
/// * `tokens` - token codec holding the process-wide signing secret
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Bearer token issuance and verification
    pub tokens: TokenCodec,
}

/// Allow handlers to extract `State<SqlitePool>` directly
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allow handlers to extract `State<TokenCodec>` directly
impl FromRef<AppState> for TokenCodec {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
