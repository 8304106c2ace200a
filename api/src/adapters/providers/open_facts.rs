//! Open Food Facts / Open Products Facts client
//!
//! Both databases share the same read API, so one client serves either,
//! parameterized by base URL and provenance tag.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::adapters::http::{first_non_empty, handle_response};
use crate::domain::entities::{ProductRecord, ProductSource};
use crate::domain::ports::ProductLookup;
use crate::error::ProviderError;

pub struct OpenFactsClient {
    http: Client,
    base_url: String,
    source: ProductSource,
    name: &'static str,
}

impl OpenFactsClient {
    /// Open Food Facts (groceries)
    pub fn food(http: Client, base_url: String) -> Self {
        Self::new(http, base_url, ProductSource::Openfoodfacts, "openfoodfacts")
    }

    /// Open Products Facts (non-food goods)
    pub fn products(http: Client, base_url: String) -> Self {
        Self::new(
            http,
            base_url,
            ProductSource::Openproductsfacts,
            "openproductsfacts",
        )
    }

    fn new(http: Client, base_url: String, source: ProductSource, name: &'static str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            source,
            name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: i64,
    product: Option<OpenFactsProduct>,
}

#[derive(Debug, Deserialize)]
struct OpenFactsProduct {
    product_name: Option<String>,
    product_name_en: Option<String>,
    generic_name: Option<String>,
    brands: Option<String>,
    categories: Option<String>,
    image_url: Option<String>,
    image_front_url: Option<String>,
}

fn into_record(response: ProductResponse, source: ProductSource) -> Option<ProductRecord> {
    if response.status != 1 {
        return None;
    }
    let product = response.product?;

    // "brands" and "categories" are comma separated, most specific category last
    let brand = product
        .brands
        .as_deref()
        .and_then(|b| b.split(',').next())
        .map(str::to_string);
    let category = product
        .categories
        .as_deref()
        .and_then(|c| c.split(',').map(str::trim).rfind(|c| !c.is_empty()))
        .map(str::to_string);

    ProductRecord::from_parts(
        source,
        first_non_empty([product.product_name, product.product_name_en]),
        brand,
        product.generic_name,
        category,
        first_non_empty([product.image_front_url, product.image_url]),
    )
}

#[async_trait]
impl ProductLookup for OpenFactsClient {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn lookup(&self, code: &str) -> Result<Option<ProductRecord>, ProviderError> {
        let response = self
            .http
            .get(format!("{}/api/v0/product/{}.json", self.base_url, encode(code)))
            .send()
            .await?;

        let body: ProductResponse = handle_response(response).await?;
        Ok(into_record(body, self.source))
    }
}
