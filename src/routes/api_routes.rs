/**
 * API Route Configuration
 *
 * Groups the HTTP surface into the public auth endpoints and the
 * token-gated record endpoints.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/register` - user registration
 * - `POST /api/auth/login` - user login
 *
 * ## Protected (auth gate applied as one layer over the group)
 * - `GET  /api/auth/me` - current user
 * - `GET  /api/swimmers`, `POST /api/swimmers`, `GET /api/swimmers/{id}`
 * - `GET  /api/times`, `POST /api/times`, `GET /api/times/{swimmer_id}`
 * - `GET  /api/strokes`, `GET /api/events`
 */

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::auth::handlers::{get_me, login, register};
use crate::events::handlers::{list_events, list_strokes};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;
use crate::swimmers::handlers::{create_swimmer, get_swimmer, list_swimmers};
use crate::times::handlers::{create_time, list_times, times_by_swimmer};

/// Routes reachable without a token.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Routes behind the auth gate.
///
/// The gate is a `route_layer` over the whole group, so adding a route here
/// is enough to protect it.
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/swimmers", get(list_swimmers).post(create_swimmer))
        .route("/api/swimmers/{id}", get(get_swimmer))
        .route("/api/times", get(list_times).post(create_time))
        .route("/api/times/{swimmer_id}", get(times_by_swimmer))
        .route("/api/strokes", get(list_strokes))
        .route("/api/events", get(list_events))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
