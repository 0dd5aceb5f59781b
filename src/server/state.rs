/**
 * Application State
 *
 * One state value shared by every handler: the connection pool and the
 * token key pair. Both are cheap to clone and read-only after startup, so
 * they are shared across arbitrarily many concurrent requests without
 * synchronization.
 *
 * The `FromRef` impls let handlers and the auth middleware extract just the
 * piece they need instead of the whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::tokens::JwtKeys;

#[derive(Clone)]
pub struct AppState {
    /// Record and credential store.
    pub db: SqlitePool,
    /// Signing/verification keys, derived once from the configured secret.
    pub jwt: JwtKeys,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        state.jwt.clone()
    }
}
