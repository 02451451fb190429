/**
 * Server Initialization
 *
 * Builds the Axum application: database pool, token codec, application
 * state and router.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Construct the token codec from the configured secret
 * 3. Assemble `AppState` and the router
 *
 * A database failure aborts startup; there is no degraded mode without
 * storage.
 */

use axum::Router;

use crate::backend::auth::sessions::{Clock, TokenCodec};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - configuration captured from the environment at startup
///
/// # Returns
///
/// Configured Axum Router ready to serve requests, or the database error
/// that prevented startup.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing storefront backend server");

    let pool = connect_database(&config.database_url).await?;

    let tokens = TokenCodec::new(&config.jwt_secret, Clock::system());

    let app_state = AppState { pool, tokens };

    let app = create_router(app_state, &config.cors_origin);

    tracing::info!("Router configured");

    Ok(app)
}
