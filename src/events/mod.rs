//! Stroke and event reference data: models, lookups, and HTTP handlers.

pub mod db;
pub mod handlers;

pub use db::{EventWithDetails, Stroke};
