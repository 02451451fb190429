/**
 * Error Conversion
 *
 * Converts `ApiError` values into HTTP responses so handlers can return
 * them directly with `?`.
 *
 * # Response Format
 *
 * Error responses are returned as JSON:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 401
 * }
 * ```
 *
 * `Unauthorized` responses additionally carry a `WWW-Authenticate: Bearer`
 * challenge header so clients know a bearer token is expected.
 */

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        // Storage and internal failures carry detail the client must not
        // see; log it here at the boundary instead.
        match &self {
            ApiError::Storage(detail) => tracing::error!("Storage error: {}", detail),
            ApiError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            other => tracing::warn!("Request failed: {}", other),
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        let mut builder = Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "application/json");

        if matches!(self, ApiError::Unauthorized) {
            builder = builder.header(header::WWW_AUTHENTICATE, "Bearer");
        }

        builder
            .body(Body::from(body.to_string()))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_carries_challenge_header() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_bad_credentials_has_no_challenge_header() {
        let response = ApiError::BadCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_response_is_json() {
        let response = ApiError::NotFound("Product").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
