//! Middleware Module
//!
//! HTTP middleware applied in front of handlers. Currently only the auth
//! gate lives here.

pub mod auth;

pub use auth::{auth_middleware, authenticated_user, AuthUser};
