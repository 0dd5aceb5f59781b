//! Error Module
//!
//! Defines the service-wide error taxonomy and its HTTP response conversion.
//!
//! - **`types`** - the `ApiError` enum, status codes, and kind strings
//! - **`conversion`** - `IntoResponse` so handlers can `?` their way out

pub mod conversion;
pub mod types;

pub use types::ApiError;
