//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{ProductRecord, ProductSource, VisualAnalysis};

/// A complete record with a brand and an image
pub fn test_record(source: ProductSource) -> ProductRecord {
    ProductRecord {
        name: "Widget".to_string(),
        brand: "Acme".to_string(),
        description: "A very useful widget.".to_string(),
        category: "Tools".to_string(),
        image: Some("https://img.example/widget.jpg".to_string()),
        source,
    }
}

/// What the vision model returns for a sneaker photo
pub fn test_analysis() -> VisualAnalysis {
    VisualAnalysis {
        name: "Chuck Taylor All Star".to_string(),
        brand: Some("Converse".to_string()),
        category: Some("Shoes".to_string()),
        description: Some("Classic canvas high-top sneaker.".to_string()),
        color: Some("black".to_string()),
        material: Some("canvas".to_string()),
        gender: Some("unisex".to_string()),
        season: None,
        reference_code: Some("M9160C".to_string()),
    }
}

/// A tiny valid PNG-ish data URL
pub fn test_data_url() -> String {
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==".to_string()
}
