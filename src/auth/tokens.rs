/**
 * Token Issuance and Verification
 *
 * Stateless HS256 bearer credentials. A token is three dot-joined base64url
 * segments: header, claims, and an HMAC over both computed with the server
 * secret. The server keeps no record of live tokens; a token dies only by
 * expiry.
 *
 * The secret is loaded once at startup into a `JwtKeys` pair held in
 * application state. Nothing in this module reads the environment.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Issued tokens are valid for this many seconds past `iat`.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Claims carried by every issued token.
///
/// Immutable once signed; changing any field invalidates the signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity row id.
    pub user_id: i64,
    pub username: String,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, always `iat + TOKEN_TTL_SECS`.
    pub exp: i64,
}

/// Why a presented token was rejected.
///
/// The distinction is for logs; every variant is rejected the same way at
/// the HTTP boundary.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Encoding/decoding key pair derived from the server secret.
///
/// Built once at startup and shared read-only across all requests.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Sign a token for a verified identity.
pub fn issue(
    keys: &JwtKeys,
    user_id: i64,
    username: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    issue_at(keys, user_id, username, Utc::now().timestamp())
}

/// Sign a token with an explicit issued-at instant.
pub(crate) fn issue_at(
    keys: &JwtKeys,
    user_id: i64,
    username: &str,
    issued_at: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        user_id,
        username: username.to_owned(),
        iat: issued_at,
        exp: issued_at + TOKEN_TTL_SECS,
    };
    encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
}

/// Verify a presented token and extract its claims.
///
/// Rejects malformed tokens, any signing algorithm other than the issuing
/// HS256, bad signatures, and expired claims. Expiry is re-checked against
/// the current clock on top of the library's validation; the library's
/// default leeway does not apply to that check. A token that fails any
/// single check is rejected whole.
pub fn verify(keys: &JwtKeys, token: &str) -> Result<Claims, TokenError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(token, &keys.decoding, &validation)?;

    if data.claims.exp <= Utc::now().timestamp() {
        return Err(TokenError::Expired);
    }

    Ok(data.claims)
}
