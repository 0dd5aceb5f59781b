/**
 * Identity Records
 *
 * The durable user rows behind registration and login, and their database
 * operations. The password digest never leaves this type except through
 * `verify_password`; response types are built from the public fields only.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::ApiError;

/// A registered user row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    /// Unique, non-empty.
    pub username: String,
    /// Unique, non-empty.
    pub email: String,
    /// bcrypt digest of the password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert a new user row.
///
/// A uniqueness violation on username or email surfaces as `Conflict`. That
/// covers the case where a concurrent registration wins the race between the
/// caller's existence probe and this insert; the constraint, not a lock, is
/// what resolves it.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, ApiError> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, username, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            ApiError::conflict("username or email already exists")
        }
        other => ApiError::Store(other),
    })
}

/// Fetch one user by username.
pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Fetch one user matching either field. Registration uses this as its
/// uniqueness probe; callers must not report which field matched.
pub async fn find_by_username_or_email(
    pool: &SqlitePool,
    username: &str,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at
        FROM users
        WHERE username = ? OR email = ?
        "#,
    )
    .bind(username)
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Fetch one user by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory database");
        database::create_tables(&pool).await.expect("schema");
        pool
    }

    #[tokio::test]
    async fn insert_and_fetch_round_trip() {
        let pool = pool().await;

        let created = create_user(&pool, "alice", "alice@example.com", "digest")
            .await
            .unwrap();
        assert!(created.id > 0);

        let fetched = find_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.email, "alice@example.com");
        assert_eq!(fetched.password_hash, "digest");

        let by_id = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");
    }

    #[tokio::test]
    async fn missing_user_is_none() {
        let pool = pool().await;
        assert!(find_by_username(&pool, "nobody").await.unwrap().is_none());
        assert!(find_by_id(&pool, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_conflict() {
        let pool = pool().await;
        create_user(&pool, "alice", "alice@example.com", "digest")
            .await
            .unwrap();

        let err = create_user(&pool, "alice", "other@example.com", "digest")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let pool = pool().await;
        create_user(&pool, "alice", "alice@example.com", "digest")
            .await
            .unwrap();

        let err = create_user(&pool, "bob", "alice@example.com", "digest")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn probe_matches_either_field() {
        let pool = pool().await;
        create_user(&pool, "alice", "alice@example.com", "digest")
            .await
            .unwrap();

        let by_username = find_by_username_or_email(&pool, "alice", "new@example.com")
            .await
            .unwrap();
        assert!(by_username.is_some());

        let by_email = find_by_username_or_email(&pool, "newname", "alice@example.com")
            .await
            .unwrap();
        assert!(by_email.is_some());

        let neither = find_by_username_or_email(&pool, "newname", "new@example.com")
            .await
            .unwrap();
        assert!(neither.is_none());
    }
}
