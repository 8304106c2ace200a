//! UPCitemdb client (free trial endpoint, no key)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::adapters::http::handle_response;
use crate::domain::entities::{ProductRecord, ProductSource};
use crate::domain::ports::ProductLookup;
use crate::error::ProviderError;

pub struct UpcItemDbClient {
    http: Client,
    base_url: String,
}

impl UpcItemDbClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    code: Option<String>,
    #[serde(default)]
    items: Vec<UpcItem>,
}

#[derive(Debug, Deserialize)]
struct UpcItem {
    title: Option<String>,
    brand: Option<String>,
    description: Option<String>,
    category: Option<String>,
    #[serde(default)]
    images: Vec<String>,
}

fn into_record(response: LookupResponse) -> Option<ProductRecord> {
    if response.code.as_deref() != Some("OK") {
        return None;
    }
    let item = response.items.into_iter().next()?;

    ProductRecord::from_parts(
        ProductSource::Upcitemdb,
        item.title,
        item.brand,
        item.description,
        item.category,
        item.images.into_iter().next(),
    )
}

#[async_trait]
impl ProductLookup for UpcItemDbClient {
    fn name(&self) -> &'static str {
        "upcitemdb"
    }

    async fn lookup(&self, code: &str) -> Result<Option<ProductRecord>, ProviderError> {
        let response = self
            .http
            .get(format!("{}/prod/trial/lookup", self.base_url))
            .query(&[("upc", code)])
            .send()
            .await?;

        let body: LookupResponse = handle_response(response).await?;
        Ok(into_record(body))
    }
}
