/**
 * API Error Types
 *
 * This module defines the error taxonomy shared by every handler in the
 * service. Each variant maps to one HTTP status code and one stable
 * machine-readable kind string that clients can switch on.
 *
 * # Error Categories
 *
 * - `Validation` - missing or empty required input (400)
 * - `Conflict` - a uniqueness constraint was violated (409)
 * - `Unauthorized` - bad credentials or a missing/invalid token (401)
 * - `NotFound` - a requested row does not exist (404)
 * - `Store` - the database failed; detail stays server-side (500)
 * - `Internal` - hashing or signing failed; detail stays server-side (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Service-wide error type returned by every handler.
///
/// The `Display` output is the client-facing message. For `Store` and
/// `Internal` it is a fixed phrase; the underlying cause is logged when the
/// response is built and never crosses the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required input.
    #[error("{0}")]
    Validation(String),

    /// Duplicate username, email, or other unique field.
    #[error("{0}")]
    Conflict(String),

    /// Bad credentials or a missing/malformed/expired token.
    #[error("{0}")]
    Unauthorized(String),

    /// The referenced row does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The credential store or record store failed.
    #[error("database error")]
    Store(#[from] sqlx::Error),

    /// Hashing, signing, or another internal operation failed.
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The single rejection used for both unknown-user and wrong-password,
    /// so account names cannot be probed through the login endpoint.
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("invalid credentials".to_string())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable kind string carried in the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Conflict(_) => "conflict",
            Self::Unauthorized(_) => "unauthorized",
            Self::NotFound(_) => "not_found",
            Self::Store(_) => "store",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Internal(format!("bcrypt failure: {err}"))
    }
}
