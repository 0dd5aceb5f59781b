/**
 * Swimmer Handlers
 *
 * CRUD endpoints for swimmer records. All of them sit behind the auth gate.
 */

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::swimmers::db::{self, Swimmer};

#[derive(Debug, Deserialize)]
pub struct CreateSwimmerRequest {
    pub name: String,
    pub email: Option<String>,
}

/// GET /api/swimmers
pub async fn list_swimmers(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Swimmer>>, ApiError> {
    Ok(Json(db::list_swimmers(&pool).await?))
}

/// GET /api/swimmers/{id}
pub async fn get_swimmer(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Swimmer>, ApiError> {
    let swimmer = db::find_swimmer(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("swimmer not found"))?;
    Ok(Json(swimmer))
}

/// POST /api/swimmers
pub async fn create_swimmer(
    State(pool): State<SqlitePool>,
    Json(request): Json<CreateSwimmerRequest>,
) -> Result<(StatusCode, Json<Swimmer>), ApiError> {
    if request.name.is_empty() {
        return Err(ApiError::validation("name is required"));
    }

    // An empty email string is stored as NULL so that swimmers without one
    // do not collide on the unique email column.
    let email = request.email.as_deref().filter(|email| !email.is_empty());

    let swimmer = db::create_swimmer(&pool, &request.name, email).await?;
    tracing::info!(swimmer_id = swimmer.id, name = %swimmer.name, "swimmer created");

    Ok((StatusCode::CREATED, Json(swimmer)))
}
