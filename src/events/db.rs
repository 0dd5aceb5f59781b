/**
 * Stroke and Event Reference Data
 *
 * Read-only lookups over the seeded strokes and events tables.
 */

use serde::Serialize;
use sqlx::SqlitePool;

/// A swimming stroke.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Stroke {
    pub id: i64,
    pub name: String,
}

/// An event (stroke + distance) joined with its stroke name.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EventWithDetails {
    pub id: i64,
    pub stroke_id: i64,
    pub distance: i64,
    pub name: String,
    pub stroke_name: String,
}

pub async fn list_strokes(pool: &SqlitePool) -> Result<Vec<Stroke>, sqlx::Error> {
    sqlx::query_as::<_, Stroke>("SELECT id, name FROM strokes ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn list_events(pool: &SqlitePool) -> Result<Vec<EventWithDetails>, sqlx::Error> {
    sqlx::query_as::<_, EventWithDetails>(
        r#"
        SELECT e.id, e.stroke_id, e.distance, e.name, s.name AS stroke_name
        FROM events e
        JOIN strokes s ON e.stroke_id = s.id
        ORDER BY s.id, e.distance
        "#,
    )
    .fetch_all(pool)
    .await
}
