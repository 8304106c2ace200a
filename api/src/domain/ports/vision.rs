//! Vision model port trait
//!
//! A hosted multimodal language model used as the last-resort barcode
//! resolver and for photo analysis.

use async_trait::async_trait;

use crate::domain::entities::{ProductRecord, VisualAnalysis};
use crate::error::VisionError;

#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Ask the model to guess a product from the bare barcode digits.
    ///
    /// Answers without a name are discarded and reported as `Ok(None)`.
    async fn guess_from_barcode(&self, code: &str) -> Result<Option<ProductRecord>, VisionError>;

    /// Describe the product in a `data:image/...;base64,` URL
    async fn analyze_image(&self, data_url: &str) -> Result<VisualAnalysis, VisionError>;
}
