//! Image search and validation port traits

use async_trait::async_trait;

use crate::error::ProviderError;

/// Keyword image search
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Return the URL of the best matching product photo, if any
    async fn search_image(&self, query: &str) -> Result<Option<String>, ProviderError>;
}

/// Best-effort check that an image URL can actually be loaded
#[async_trait]
pub trait ImageValidator: Send + Sync {
    async fn is_reachable(&self, url: &str) -> bool;
}
