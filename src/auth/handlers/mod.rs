//! HTTP handlers for the authentication endpoints.
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`me`** - GET /api/auth/me (behind the auth gate)

pub mod login;
pub mod me;
pub mod register;
pub mod types;

pub use login::login;
pub use me::get_me;
pub use register::register;
pub use types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
