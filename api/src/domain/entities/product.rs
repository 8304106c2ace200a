//! Product domain entity
//!
//! A displayable product record resolved from a barcode or a photo.
//! Records are built fresh per request and never stored.

use serde::{Deserialize, Serialize};

pub const UNKNOWN_BRAND: &str = "Unknown";
pub const DEFAULT_DESCRIPTION: &str = "No description available";
pub const DEFAULT_CATEGORY: &str = "General";

/// Where a product record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSource {
    Upcitemdb,
    Openfoodfacts,
    Openproductsfacts,
    GoogleSearch,
    Barcodelookup,
    AiGuess,
    AiVision,
}

impl std::fmt::Display for ProductSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductSource::Upcitemdb => write!(f, "upcitemdb"),
            ProductSource::Openfoodfacts => write!(f, "openfoodfacts"),
            ProductSource::Openproductsfacts => write!(f, "openproductsfacts"),
            ProductSource::GoogleSearch => write!(f, "google_search"),
            ProductSource::Barcodelookup => write!(f, "barcodelookup"),
            ProductSource::AiGuess => write!(f, "ai_guess"),
            ProductSource::AiVision => write!(f, "ai_vision"),
        }
    }
}

/// A product as returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub brand: String,
    pub description: String,
    pub category: String,
    pub image: Option<String>,
    pub source: ProductSource,
}

impl ProductRecord {
    /// Build a record from raw provider fields.
    ///
    /// Returns `None` when the provider gave no usable name. Missing or blank
    /// optional fields fall back to readable placeholders.
    pub fn from_parts(
        source: ProductSource,
        name: Option<String>,
        brand: Option<String>,
        description: Option<String>,
        category: Option<String>,
        image: Option<String>,
    ) -> Option<Self> {
        let name = non_blank(name)?;

        Some(Self {
            name,
            brand: non_blank(brand).unwrap_or_else(|| UNKNOWN_BRAND.to_string()),
            description: non_blank(description)
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            category: non_blank(category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            image: non_blank(image),
            source,
        })
    }

    /// Brand, unless it is the placeholder
    pub fn known_brand(&self) -> Option<&str> {
        known(&self.brand)
    }
}

/// Product attributes extracted from a photo by the vision model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualAnalysis {
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub gender: Option<String>,
    pub season: Option<String>,
    #[serde(alias = "referenceCode", alias = "reference")]
    pub reference_code: Option<String>,
}

impl VisualAnalysis {
    /// Convert into a displayable record (without image)
    pub fn to_record(&self) -> Option<ProductRecord> {
        ProductRecord::from_parts(
            ProductSource::AiVision,
            Some(self.name.clone()),
            self.brand.clone(),
            self.description.clone(),
            self.category.clone(),
            None,
        )
    }
}

/// Treat empty strings and the "Unknown" placeholder as absent
pub fn known(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNKNOWN_BRAND) {
        None
    } else {
        Some(trimmed)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
