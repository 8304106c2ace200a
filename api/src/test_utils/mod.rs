//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Manual mocks are more explicit and easier to debug
//! - They record the codes and queries they receive, which is what the
//!   cascade tests assert on

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
