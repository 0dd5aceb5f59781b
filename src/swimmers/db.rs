/**
 * Swimmer Records
 *
 * Swimmer rows and their database operations.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::ApiError;

/// A swimmer whose times are tracked.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Swimmer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub async fn list_swimmers(pool: &SqlitePool) -> Result<Vec<Swimmer>, sqlx::Error> {
    sqlx::query_as::<_, Swimmer>("SELECT id, name, email, created_at FROM swimmers ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn find_swimmer(pool: &SqlitePool, id: i64) -> Result<Option<Swimmer>, sqlx::Error> {
    sqlx::query_as::<_, Swimmer>("SELECT id, name, email, created_at FROM swimmers WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a swimmer. A duplicate email maps to `Conflict`.
pub async fn create_swimmer(
    pool: &SqlitePool,
    name: &str,
    email: Option<&str>,
) -> Result<Swimmer, ApiError> {
    let now = Utc::now();

    sqlx::query_as::<_, Swimmer>(
        r#"
        INSERT INTO swimmers (name, email, created_at)
        VALUES (?, ?, ?)
        RETURNING id, name, email, created_at
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            ApiError::conflict("a swimmer with this email already exists")
        }
        other => ApiError::Store(other),
    })
}
