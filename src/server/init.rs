/**
 * Server Initialization
 *
 * Builds the running application from resolved configuration: opens the
 * database, derives the signing keys, and assembles the router.
 */

use axum::Router;

use crate::auth::tokens::JwtKeys;
use crate::database;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create the Axum application from configuration.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("initializing laplogger backend");

    let db = database::init(&config.database_url).await?;
    tracing::info!(database_url = %config.database_url, "database ready");

    let state = AppState {
        db,
        jwt: JwtKeys::new(config.jwt_secret.as_bytes()),
    };

    Ok(create_router(state, &config.allowed_origin))
}
