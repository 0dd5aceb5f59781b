/**
 * Current User Handler
 *
 * GET /api/auth/me. Runs behind the auth gate; the identity arrives through
 * the `AuthUser` extractor rather than another round of header parsing.
 */

use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::find_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let record = find_by_id(&state.db, claims.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    Ok(Json(record.into()))
}
