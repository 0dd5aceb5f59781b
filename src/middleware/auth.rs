/**
 * Auth Gate
 *
 * Middleware wrapping every protected route. It pulls the bearer token out
 * of the Authorization header, verifies it, and attaches the verified
 * claims to the request for downstream handlers. Verification is purely
 * cryptographic and time-based; the gate never touches the database.
 *
 * Per-request state machine: no header → 401; malformed header → 401;
 * well-formed header → verify → attach claims and forward, or 401.
 */

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::tokens::{self, Claims, JwtKeys};
use crate::error::ApiError;

/// Authentication middleware.
///
/// Applied once as a `route_layer` over the protected router group, so no
/// protected route can be reached without passing it.
pub async fn auth_middleware(
    State(keys): State<JwtKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::unauthorized("authorization header required")
        })?;

    let token = bearer_token(header).ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        ApiError::unauthorized("invalid authorization header format")
    })?;

    let claims = tokens::verify(&keys, token).map_err(|err| {
        tracing::warn!("token rejected: {err}");
        ApiError::unauthorized("invalid token")
    })?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Split an Authorization header into its bearer token.
///
/// The header must be exactly two space-separated tokens, the first
/// literally `Bearer`; any other shape is malformed.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// Read the claims the gate attached to a request, if any.
///
/// Absence after the gate has run means a route was wired around the
/// middleware — a host-application bug, not a failed token.
pub fn authenticated_user(request: &Request) -> Option<Claims> {
    request.extensions().get::<Claims>().cloned()
}

/// Handler-side extractor for the claims attached by the gate.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("claims missing from request extensions");
                ApiError::unauthorized("authentication required")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use crate::auth::tokens::TOKEN_TTL_SECS;
    use chrono::Utc;

    #[test]
    fn bearer_token_accepts_well_formed_header() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn bearer_token_rejects_wrong_scheme() {
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("bearer abc"), None);
        assert_eq!(bearer_token("BEARER abc"), None);
    }

    #[test]
    fn bearer_token_rejects_wrong_shape() {
        assert_eq!(bearer_token(""), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer a b"), None);
        assert_eq!(bearer_token("Bearer  abc"), None);
        assert_eq!(bearer_token("abc"), None);
    }

    fn claims() -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            user_id: 7,
            username: "alice".to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        }
    }

    #[test]
    fn authenticated_user_present() {
        let claims = claims();
        let mut request = Request::builder()
            .uri("http://example.com/api/times")
            .body(Body::empty())
            .unwrap();
        request.extensions_mut().insert(claims.clone());

        assert_eq!(authenticated_user(&request), Some(claims));
    }

    #[test]
    fn authenticated_user_absent() {
        let request = Request::builder()
            .uri("http://example.com/api/times")
            .body(Body::empty())
            .unwrap();

        assert_eq!(authenticated_user(&request), None);
    }
}
