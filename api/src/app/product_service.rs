//! Product service
//!
//! Resolves barcodes and photos into displayable product records:
//! variant expansion, the provider cascade, the AI fallback and the
//! post-processing every result goes through.

use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;

use crate::app::text::{normalize_name, search_query, truncate_description};
use crate::domain::entities::{known, Barcode, ProductRecord, VisualAnalysis};
use crate::domain::ports::{ImageSearch, ImageValidator, ProductLookup, VisionModel};
use crate::error::{AppError, VisionError};

/// A photo-analysis result: the product card plus the visual attributes
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedProduct {
    #[serde(flatten)]
    pub product: ProductRecord,
    pub color: Option<String>,
    pub material: Option<String>,
    pub gender: Option<String>,
    pub season: Option<String>,
    pub reference_code: Option<String>,
}

/// Service for resolving products
pub struct ProductService {
    providers: Vec<Arc<dyn ProductLookup>>,
    image_search: Arc<dyn ImageSearch>,
    image_validator: Arc<dyn ImageValidator>,
    vision: Arc<dyn VisionModel>,
}

impl ProductService {
    /// `providers` are consulted in the order given
    pub fn new(
        providers: Vec<Arc<dyn ProductLookup>>,
        image_search: Arc<dyn ImageSearch>,
        image_validator: Arc<dyn ImageValidator>,
        vision: Arc<dyn VisionModel>,
    ) -> Self {
        Self {
            providers,
            image_search,
            image_validator,
            vision,
        }
    }

    /// Names of the configured providers, in cascade order
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Resolve a scanned barcode
    ///
    /// Tries every provider for every barcode variant and stops at the first
    /// match. When nothing matches, the vision model is asked to guess from
    /// the digits alone.
    pub async fn resolve_barcode(&self, barcode: &Barcode) -> Result<ProductRecord, AppError> {
        let record = match self.run_cascade(barcode).await {
            Some(record) => record,
            None => self.guess_from_barcode(barcode).await.ok_or_else(|| {
                AppError::NotFound(format!("No product found for barcode {}", barcode))
            })?,
        };

        Ok(self.finalize(record).await)
    }

    /// Search a fresh photo for a product the client already knows
    pub async fn fix_image(
        &self,
        product_name: &str,
        brand: Option<&str>,
    ) -> Result<Option<String>, AppError> {
        let query = search_query([brand, Some(product_name)])
            .filter(|_| known(product_name).is_some())
            .ok_or_else(|| AppError::BadRequest("productName is required".to_string()))?;

        Ok(self.search_image(&query).await)
    }

    /// Identify the product in an uploaded photo
    pub async fn analyze_image(&self, data_url: &str) -> Result<AnalyzedProduct, AppError> {
        validate_data_url(data_url)?;

        let analysis = self.vision.analyze_image(data_url).await?;
        let mut product = analysis
            .to_record()
            .ok_or_else(|| VisionError::Parse("reply has no product name".to_string()))?;

        product.name = normalize_name(&product.name);
        product.description = truncate_description(&product.description);
        product.image = self.research_image(&analysis).await;

        tracing::info!(name = %product.name, has_image = product.image.is_some(), "Photo analyzed");

        Ok(AnalyzedProduct {
            product,
            color: analysis.color,
            material: analysis.material,
            gender: analysis.gender,
            season: analysis.season,
            reference_code: analysis.reference_code,
        })
    }

    async fn run_cascade(&self, barcode: &Barcode) -> Option<ProductRecord> {
        for variant in barcode.variants() {
            let is_original = variant == barcode.as_str();

            for provider in &self.providers {
                if provider.original_code_only() && !is_original {
                    continue;
                }

                tracing::debug!(provider = provider.name(), code = %variant, "Trying provider");
                match provider.lookup(&variant).await {
                    Ok(Some(record)) => {
                        tracing::info!(
                            provider = provider.name(),
                            code = %variant,
                            name = %record.name,
                            "Product found"
                        );
                        return Some(record);
                    }
                    Ok(None) => {
                        tracing::debug!(provider = provider.name(), code = %variant, "No match");
                    }
                    Err(e) => {
                        tracing::debug!(
                            provider = provider.name(),
                            code = %variant,
                            error = %e,
                            "Provider failed"
                        );
                    }
                }
            }
        }

        None
    }

    async fn guess_from_barcode(&self, barcode: &Barcode) -> Option<ProductRecord> {
        match self.vision.guess_from_barcode(barcode.as_str()).await {
            Ok(Some(record)) => {
                tracing::info!(code = %barcode, name = %record.name, "Product guessed by model");
                Some(record)
            }
            Ok(None) => {
                tracing::debug!(code = %barcode, "Model could not name the product");
                None
            }
            Err(e) => {
                tracing::debug!(code = %barcode, error = %e, "Model guess failed");
                None
            }
        }
    }

    /// Name cleanup, description truncation and image verification
    async fn finalize(&self, mut record: ProductRecord) -> ProductRecord {
        record.name = normalize_name(&record.name);
        record.description = truncate_description(&record.description);
        record.image = self.verified_image(&record).await;
        record
    }

    /// Keep the record's image if it loads, otherwise look for another one.
    /// Never returns a URL that failed the check.
    async fn verified_image(&self, record: &ProductRecord) -> Option<String> {
        if let Some(url) = &record.image {
            if self.image_validator.is_reachable(url).await {
                return Some(url.clone());
            }
            tracing::debug!(url = %url, "Image unreachable, searching for another");
        }

        let query = search_query([record.known_brand(), Some(record.name.as_str())])?;
        let found = self.search_image(&query).await?;

        if record.image.as_deref() == Some(found.as_str()) {
            None
        } else {
            Some(found)
        }
    }

    /// Precision search on the reference code first, then a broader
    /// description-based search
    async fn research_image(&self, analysis: &VisualAnalysis) -> Option<String> {
        let brand = analysis.brand.as_deref().and_then(known);

        if let Some(reference) = analysis.reference_code.as_deref().and_then(known) {
            let anchor = brand.unwrap_or(analysis.name.as_str());
            if let Some(query) = search_query([Some(reference), Some(anchor)]) {
                if let Some(url) = self.search_image(&query).await {
                    return Some(url);
                }
            }
        }

        let query = search_query([
            Some(analysis.name.as_str()),
            brand,
            analysis.color.as_deref(),
            analysis.gender.as_deref(),
        ])?;
        self.search_image(&query).await
    }

    async fn search_image(&self, query: &str) -> Option<String> {
        match self.image_search.search_image(query).await {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(query, error = %e, "Image search failed");
                None
            }
        }
    }
}

/// Accept only `data:image/<type>;base64,<payload>` with a decodable payload
fn validate_data_url(data_url: &str) -> Result<(), AppError> {
    let invalid = |reason: &str| AppError::BadRequest(format!("image must be a base64 data URL: {}", reason));

    let rest = data_url
        .trim()
        .strip_prefix("data:image/")
        .ok_or_else(|| invalid("expected data:image/ prefix"))?;
    let (_, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| invalid("expected ;base64, marker"))?;

    if payload.is_empty() {
        return Err(invalid("empty payload"));
    }
    general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| invalid(&e.to_string()))?;

    Ok(())
}
