/**
 * Login Handler
 *
 * POST /api/auth/login. Verifies a username/password pair and returns a
 * fresh token with the public identity view.
 *
 * # Security Notes
 *
 * - Unknown usernames and wrong passwords produce byte-identical rejections,
 *   so account names cannot be enumerated through this endpoint
 * - Passwords are verified through bcrypt's own comparison
 * - Neither the password nor its digest appears in logs or responses
 */

use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::password::verify_password;
use crate::auth::tokens;
use crate::auth::users::find_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("username and password are required"));
    }

    tracing::info!(username = %request.username, "login attempt");

    let user = find_by_username(&state.db, &request.username)
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    if !verify_password(&user.password_hash, &request.password)? {
        tracing::warn!(username = %request.username, "login rejected");
        return Err(ApiError::invalid_credentials());
    }

    let token = tokens::issue(&state.jwt, user.id, &user.username)
        .map_err(|err| ApiError::internal(format!("token signing failed: {err}")))?;

    tracing::info!(user_id = user.id, username = %user.username, "user logged in");

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
