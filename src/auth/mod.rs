//! Authentication Module
//!
//! User registration, credential verification, and stateless token
//! management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports
//! ├── users.rs     - Identity rows and store operations
//! ├── password.rs  - bcrypt hashing and verification
//! ├── tokens.rs    - HS256 claims, issuance, verification
//! └── handlers/    - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username/email/password → identity created → token returned
//! 2. **Login**: username/password → credentials verified → token returned
//! 3. Every protected call resends the token; the middleware in
//!    `crate::middleware::auth` verifies it and attaches the identity
//!
//! # Security
//!
//! - Passwords are stored only as salted bcrypt digests
//! - Tokens are self-contained and expire 24 hours after issuance; the
//!   server keeps no session state
//! - Invalid credentials return one indistinguishable 401

pub mod handlers;
pub mod password;
pub mod tokens;
pub mod users;

pub use handlers::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use tokens::{Claims, JwtKeys};
