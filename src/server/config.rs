/**
 * Server Configuration
 *
 * Environment-driven settings resolved once at startup.
 *
 * # Variables
 *
 * - `JWT_SECRET` - token signing secret; required when `APP_ENV=production`
 * - `APP_ENV` - `production` tightens the secret requirement
 * - `SERVER_PORT` - listen port, default 8080
 * - `DATABASE_URL` - SQLite database, default `sqlite:laplogger.db`
 * - `ALLOWED_ORIGIN` - browser origin allowed by CORS, default
 *   `http://localhost:3000`
 */

use thiserror::Error;

/// Development-only signing secret, substituted when `JWT_SECRET` is unset
/// outside production. Tokens signed with it are forgeable by anyone with
/// the source, which is why production startup refuses it.
const DEV_JWT_SECRET: &str = "laplogger-dev-secret-do-not-deploy";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set when APP_ENV=production")]
    MissingJwtSecret,
    #[error("invalid SERVER_PORT value: {0}")]
    InvalidPort(String),
}

/// Resolved server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub allowed_origin: String,
}

impl ServerConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let production = std::env::var("APP_ENV")
            .map(|value| value == "production")
            .unwrap_or(false);

        let jwt_secret = resolve_jwt_secret(std::env::var("JWT_SECRET").ok(), production)?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 8080,
        };

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:laplogger.db".to_string());

        let allowed_origin = std::env::var("ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            port,
            database_url,
            jwt_secret,
            allowed_origin,
        })
    }
}

/// Decide the signing secret. Production refuses to run without an explicit
/// one; development substitutes the built-in secret and says so loudly.
fn resolve_jwt_secret(explicit: Option<String>, production: bool) -> Result<String, ConfigError> {
    match explicit {
        Some(secret) if !secret.is_empty() => Ok(secret),
        _ if production => Err(ConfigError::MissingJwtSecret),
        _ => {
            tracing::warn!(
                "JWT_SECRET not set; using the built-in development secret. \
                 Set JWT_SECRET before deploying."
            );
            Ok(DEV_JWT_SECRET.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_secret_wins() {
        let secret = resolve_jwt_secret(Some("s3cret".to_string()), true).unwrap();
        assert_eq!(secret, "s3cret");
    }

    #[test]
    fn production_refuses_missing_secret() {
        assert!(matches!(
            resolve_jwt_secret(None, true),
            Err(ConfigError::MissingJwtSecret)
        ));
    }

    #[test]
    fn production_refuses_empty_secret() {
        assert!(matches!(
            resolve_jwt_secret(Some(String::new()), true),
            Err(ConfigError::MissingJwtSecret)
        ));
    }

    #[test]
    fn development_falls_back() {
        let secret = resolve_jwt_secret(None, false).unwrap();
        assert_eq!(secret, DEV_JWT_SECRET);
    }
}
