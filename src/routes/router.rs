/**
 * Router Assembly
 *
 * Combines the public and protected route groups, the browser CORS policy,
 * and the 404 fallback into the final application router.
 */

use axum::http::{HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState, allowed_origin: &str) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .layer(cors_layer(allowed_origin))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}

/// Browser CORS policy: one allowed origin, the standard method list, any
/// request headers.
fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let origin = allowed_origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        tracing::warn!(allowed_origin, "unparseable allowed origin; using localhost default");
        HeaderValue::from_static("http://localhost:3000")
    });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
