/**
 * Registration Handler
 *
 * POST /api/auth/register. Creates an identity, signs a token for it, and
 * returns both, so a new user is authenticated immediately.
 *
 * # Registration Process
 *
 * 1. Reject any empty field
 * 2. Probe for an existing identity by username or email
 * 3. Hash the password
 * 4. Insert the row
 * 5. Issue a token
 *
 * Duplicate usernames and duplicate emails are reported as a single
 * conflict without naming the colliding field.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::auth::password::hash_password;
use crate::auth::tokens;
use crate::auth::users::{create_user, find_by_username_or_email};
use crate::error::ApiError;
use crate::server::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation(
            "username, email, and password are required",
        ));
    }

    tracing::info!(username = %request.username, "registration attempt");

    let existing = find_by_username_or_email(&state.db, &request.username, &request.email).await?;
    if existing.is_some() {
        tracing::warn!(username = %request.username, "registration rejected: duplicate identity");
        return Err(ApiError::conflict("username or email already exists"));
    }

    let password_hash = hash_password(&request.password)?;

    // A concurrent registration can still win between the probe above and
    // this insert; create_user maps the store's constraint violation to the
    // same conflict the probe reports.
    let user = create_user(&state.db, &request.username, &request.email, &password_hash).await?;

    let token = tokens::issue(&state.jwt, user.id, &user.username)
        .map_err(|err| ApiError::internal(format!("token signing failed: {err}")))?;

    tracing::info!(user_id = user.id, username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}
