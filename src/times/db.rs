/**
 * Swim Time Records
 *
 * Recorded times and the joined display view returned by the API. A time
 * without a meet is a practice time.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::ApiError;

/// A recorded time joined with swimmer, event, stroke, and meet names.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SwimTimeWithDetails {
    pub id: i64,
    pub swimmer_id: i64,
    pub event_id: i64,
    pub meet_id: Option<i64>,
    pub time_ms: i64,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
    pub swimmer_name: String,
    pub event_name: String,
    pub stroke_name: String,
    pub distance: i64,
    pub meet_name: Option<String>,
    /// Not a column; filled in after the row is fetched.
    #[sqlx(default)]
    pub formatted_time: String,
}

const DETAILS_SELECT: &str = r#"
    SELECT
        st.id, st.swimmer_id, st.event_id, st.meet_id, st.time_ms, st.notes, st.recorded_at,
        s.name AS swimmer_name,
        e.name AS event_name,
        str.name AS stroke_name,
        e.distance,
        m.name AS meet_name
    FROM swim_times st
    JOIN swimmers s ON st.swimmer_id = s.id
    JOIN events e ON st.event_id = e.id
    JOIN strokes str ON e.stroke_id = str.id
    LEFT JOIN meets m ON st.meet_id = m.id
"#;

/// Format milliseconds as `MM:SS.mmm`.
pub fn format_time_ms(time_ms: i64) -> String {
    let total_seconds = time_ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let millis = time_ms % 1000;
    format!("{minutes:02}:{seconds:02}.{millis:03}")
}

fn with_formatted_time(mut time: SwimTimeWithDetails) -> SwimTimeWithDetails {
    time.formatted_time = format_time_ms(time.time_ms);
    time
}

/// Insert a time row and return its id.
///
/// A reference to a swimmer, event, or meet that does not exist trips the
/// foreign key constraints and surfaces as `Validation`.
pub async fn insert_time(
    pool: &SqlitePool,
    swimmer_id: i64,
    event_id: i64,
    meet_id: Option<i64>,
    time_ms: i64,
    notes: Option<&str>,
) -> Result<i64, ApiError> {
    let result = sqlx::query(
        r#"
        INSERT INTO swim_times (swimmer_id, event_id, meet_id, time_ms, notes, recorded_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(swimmer_id)
    .bind(event_id)
    .bind(meet_id)
    .bind(time_ms)
    .bind(notes)
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
            ApiError::validation("unknown swimmer, event, or meet")
        }
        other => ApiError::Store(other),
    })?;

    Ok(result.last_insert_rowid())
}

/// Fetch one time with its joined display fields; `None` when the row does
/// not exist.
pub async fn time_with_details(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<SwimTimeWithDetails>, sqlx::Error> {
    let query = format!("{DETAILS_SELECT} WHERE st.id = ?");
    let time = sqlx::query_as::<_, SwimTimeWithDetails>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(time.map(with_formatted_time))
}

/// All of one swimmer's times, newest first.
pub async fn times_by_swimmer(
    pool: &SqlitePool,
    swimmer_id: i64,
) -> Result<Vec<SwimTimeWithDetails>, sqlx::Error> {
    let query = format!("{DETAILS_SELECT} WHERE st.swimmer_id = ? ORDER BY st.recorded_at DESC");
    let times = sqlx::query_as::<_, SwimTimeWithDetails>(&query)
        .bind(swimmer_id)
        .fetch_all(pool)
        .await?;
    Ok(times.into_iter().map(with_formatted_time).collect())
}

/// All recorded times, newest first.
pub async fn all_times(pool: &SqlitePool) -> Result<Vec<SwimTimeWithDetails>, sqlx::Error> {
    let query = format!("{DETAILS_SELECT} ORDER BY st.recorded_at DESC");
    let times = sqlx::query_as::<_, SwimTimeWithDetails>(&query)
        .fetch_all(pool)
        .await?;
    Ok(times.into_iter().map(with_formatted_time).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;
    use crate::swimmers::db::create_swimmer;
    use pretty_assertions::assert_eq;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    #[test]
    fn formats_minutes_seconds_millis() {
        assert_eq!(format_time_ms(62_340), "01:02.340");
        assert_eq!(format_time_ms(500), "00:00.500");
        assert_eq!(format_time_ms(600_000), "10:00.000");
        assert_eq!(format_time_ms(0), "00:00.000");
    }

    async fn pool() -> SqlitePool {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("options")
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("in-memory database");
        database::create_tables(&pool).await.expect("schema");
        database::seed_reference_data(&pool).await.expect("seed");
        pool
    }

    #[tokio::test]
    async fn insert_and_fetch_details() {
        let pool = pool().await;
        let swimmer = create_swimmer(&pool, "Anna", None).await.unwrap();

        let id = insert_time(&pool, swimmer.id, 1, None, 31_250, Some("morning set"))
            .await
            .unwrap();

        let time = time_with_details(&pool, id).await.unwrap().unwrap();
        assert_eq!(time.swimmer_name, "Anna");
        assert_eq!(time.stroke_name, "Freestyle");
        assert_eq!(time.event_name, "50m Freestyle");
        assert_eq!(time.distance, 50);
        assert_eq!(time.meet_name, None);
        assert_eq!(time.formatted_time, "00:31.250");
    }

    #[tokio::test]
    async fn unknown_swimmer_reference_is_rejected() {
        let pool = pool().await;
        let err = insert_time(&pool, 999, 1, None, 31_250, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let pool = pool().await;
        let swimmer = create_swimmer(&pool, "Anna", None).await.unwrap();

        let first = insert_time(&pool, swimmer.id, 1, None, 31_000, None)
            .await
            .unwrap();
        // Space the inserts past one second so the ordering holds even at
        // second-resolution timestamps.
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
        let second = insert_time(&pool, swimmer.id, 2, None, 65_000, None)
            .await
            .unwrap();

        let times = times_by_swimmer(&pool, swimmer.id).await.unwrap();
        assert_eq!(times.len(), 2);
        assert_eq!(times[0].id, second);
        assert_eq!(times[1].id, first);

        let all = all_times(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second);
    }
}
