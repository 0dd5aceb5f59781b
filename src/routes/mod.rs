//! Routes Module
//!
//! Route registration and router assembly.
//!
//! - **`api_routes`** - the public and protected endpoint groups
//! - **`router`** - final assembly with CORS and fallback

pub mod api_routes;
pub mod router;

pub use router::create_router;
