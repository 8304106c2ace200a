//! Product lookup port trait
//!
//! One external data source that can turn a barcode into a product record.

use async_trait::async_trait;

use crate::domain::entities::ProductRecord;
use crate::error::ProviderError;

#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Whether this provider should only be asked about the code exactly as
    /// scanned, never about its 12/13 digit variants
    fn original_code_only(&self) -> bool {
        false
    }

    /// Look up a single code. `Ok(None)` means the provider answered but had
    /// no usable match.
    async fn lookup(&self, code: &str) -> Result<Option<ProductRecord>, ProviderError>;
}
