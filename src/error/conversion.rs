/**
 * Error Conversion
 *
 * Converts `ApiError` into an HTTP response so handlers can return it
 * directly with `?`.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "username or email already exists",
 *   "kind": "conflict"
 * }
 * ```
 *
 * Server-side failures (`Store`, `Internal`) log their cause here and send
 * only the fixed public message.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            match &self {
                ApiError::Store(err) => tracing::error!("store failure: {err:?}"),
                ApiError::Internal(detail) => tracing::error!("internal failure: {detail}"),
                _ => {}
            }
        }

        let body = Json(serde_json::json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_status() {
        let response = ApiError::validation("name is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::invalid_credentials().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn response_is_json() {
        let response = ApiError::conflict("duplicate").into_response();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"));
    }
}
