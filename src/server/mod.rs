//! Server Module
//!
//! Configuration, shared state, and application assembly.
//!
//! - **`config`** - environment-driven settings, resolved once at startup
//! - **`state`** - the `AppState` handed to every handler
//! - **`init`** - database bootstrap plus router assembly

pub mod config;
pub mod init;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
