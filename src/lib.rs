//! laplogger - Swim Time Record Keeping
//!
//! A small HTTP service for logging swim practice and meet times, built on
//! Axum and SQLite.
//!
//! # Overview
//!
//! Registration and login issue stateless HS256 bearer tokens; every record
//! endpoint sits behind a verifying middleware that attaches the caller's
//! identity to the request. The rest of the service is CRUD over swimmers,
//! recorded times, and the seeded stroke/event reference tables.
//!
//! # Module Structure
//!
//! - **`auth`** - registration, login, password hashing, token management
//! - **`middleware`** - the auth gate applied to protected routes
//! - **`error`** - the service-wide error taxonomy and response shaping
//! - **`database`** - pool bootstrap, schema, seed data
//! - **`swimmers`**, **`times`**, **`events`** - record models and handlers
//! - **`routes`** - endpoint registration and router assembly
//! - **`server`** - configuration, shared state, application startup

pub mod auth;
pub mod database;
pub mod error;
pub mod events;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod swimmers;
pub mod times;
