//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod products;

pub use products::{lookup, preflight};
