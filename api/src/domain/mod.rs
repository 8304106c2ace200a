//! Domain layer
//!
//! Contains the product model with no knowledge of any particular provider.
//! - `entities`: Domain models representing core concepts
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
