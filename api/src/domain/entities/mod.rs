//! Domain entities
//!
//! Pure domain models for products and scanned codes.

pub mod barcode;
pub mod product;

pub use barcode::Barcode;
pub use product::{known, ProductRecord, ProductSource, VisualAnalysis};
