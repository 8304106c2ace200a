//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod images;
pub mod lookup;
pub mod vision;

pub use images::{ImageSearch, ImageValidator};
pub use lookup::ProductLookup;
pub use vision::VisionModel;
