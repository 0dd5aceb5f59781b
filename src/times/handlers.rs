/**
 * Swim Time Handlers
 *
 * Endpoints for recording and listing times. All of them sit behind the
 * auth gate.
 */

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::times::db::{self, SwimTimeWithDetails};

#[derive(Debug, Deserialize)]
pub struct CreateTimeRequest {
    pub swimmer_id: i64,
    pub event_id: i64,
    /// Absent for practice times.
    pub meet_id: Option<i64>,
    pub time_ms: i64,
    pub notes: Option<String>,
}

/// POST /api/times
pub async fn create_time(
    State(pool): State<SqlitePool>,
    Json(request): Json<CreateTimeRequest>,
) -> Result<(StatusCode, Json<SwimTimeWithDetails>), ApiError> {
    if request.swimmer_id <= 0 || request.event_id <= 0 || request.time_ms <= 0 {
        return Err(ApiError::validation(
            "swimmer_id, event_id, and time_ms are required",
        ));
    }

    let id = db::insert_time(
        &pool,
        request.swimmer_id,
        request.event_id,
        request.meet_id,
        request.time_ms,
        request.notes.as_deref(),
    )
    .await?;

    let time = db::time_with_details(&pool, id)
        .await?
        .ok_or_else(|| ApiError::internal(format!("recorded time {id} has no detail row")))?;

    tracing::info!(
        time_id = time.id,
        swimmer_id = time.swimmer_id,
        event_id = time.event_id,
        "time recorded"
    );

    Ok((StatusCode::CREATED, Json(time)))
}

/// GET /api/times
pub async fn list_times(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<SwimTimeWithDetails>>, ApiError> {
    Ok(Json(db::all_times(&pool).await?))
}

/// GET /api/times/{swimmer_id}
pub async fn times_by_swimmer(
    State(pool): State<SqlitePool>,
    Path(swimmer_id): Path<i64>,
) -> Result<Json<Vec<SwimTimeWithDetails>>, ApiError> {
    Ok(Json(db::times_by_swimmer(&pool, swimmer_id).await?))
}
