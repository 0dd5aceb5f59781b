/**
 * Reference Data Handlers
 *
 * Read-only listings of strokes and events for populating client forms.
 */

use axum::extract::State;
use axum::response::Json;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::events::db::{self, EventWithDetails, Stroke};

/// GET /api/strokes
pub async fn list_strokes(State(pool): State<SqlitePool>) -> Result<Json<Vec<Stroke>>, ApiError> {
    Ok(Json(db::list_strokes(&pool).await?))
}

/// GET /api/events
pub async fn list_events(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<EventWithDetails>>, ApiError> {
    Ok(Json(db::list_events(&pool).await?))
}
