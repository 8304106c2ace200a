//! Barcode Lookup client (paid, keyed)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::adapters::http::handle_response;
use crate::domain::entities::{ProductRecord, ProductSource};
use crate::domain::ports::ProductLookup;
use crate::error::ProviderError;

pub struct BarcodeLookupClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl BarcodeLookupClient {
    pub fn new(http: Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProductsResponse {
    #[serde(default)]
    products: Vec<BarcodeProduct>,
}

#[derive(Debug, Deserialize)]
struct BarcodeProduct {
    title: Option<String>,
    brand: Option<String>,
    manufacturer: Option<String>,
    description: Option<String>,
    category: Option<String>,
    #[serde(default)]
    images: Vec<String>,
}

fn into_record(response: ProductsResponse) -> Option<ProductRecord> {
    let product = response.products.into_iter().next()?;
    let brand = product
        .brand
        .filter(|b| !b.trim().is_empty())
        .or(product.manufacturer);

    ProductRecord::from_parts(
        ProductSource::Barcodelookup,
        product.title,
        brand,
        product.description,
        product.category,
        product.images.into_iter().next(),
    )
}

#[async_trait]
impl ProductLookup for BarcodeLookupClient {
    fn name(&self) -> &'static str {
        "barcodelookup"
    }

    async fn lookup(&self, code: &str) -> Result<Option<ProductRecord>, ProviderError> {
        let response = self
            .http
            .get(format!("{}/v3/products", self.base_url))
            .query(&[
                ("barcode", code),
                ("formatted", "y"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        // Unknown barcodes come back as 404 rather than an empty list
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: ProductsResponse = handle_response(response).await?;
        Ok(into_record(body))
    }
}
