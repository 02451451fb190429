/**
 * Router Configuration
 *
 * Combines the API routes with the CORS and tracing layers into the
 * final Axum router.
 *
 * # Layers
 *
 * - CORS: one configurable allowed browser origin, credentials allowed
 * - Trace: per-request tracing spans
 * - Fallback: plain 404 for unknown routes
 */

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - application state shared by all handlers
/// * `cors_origin` - the single origin browsers may call from
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, cors_origin: &str) -> Router<()> {
    let origin = cors_origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        tracing::warn!("Invalid CORS_ORIGIN {:?}, falling back to localhost", cors_origin);
        HeaderValue::from_static("http://localhost:5173")
    });

    // Credentialed CORS cannot use wildcards; list what the frontend uses.
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    let router = configure_api_routes(Router::new());

    router
        .fallback(|| async { "404 Not Found" })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
