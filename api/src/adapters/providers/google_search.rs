//! Google Custom Search client
//!
//! Used two ways: as a keyword lookup of the raw barcode (web results), and
//! as the image search behind every photo re-search.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::adapters::http::{first_non_empty, handle_response};
use crate::domain::entities::{ProductRecord, ProductSource};
use crate::domain::ports::{ImageSearch, ProductLookup};
use crate::error::ProviderError;

pub struct GoogleSearchClient {
    http: Client,
    base_url: String,
    api_key: String,
    cx: String,
}

impl GoogleSearchClient {
    pub fn new(http: Client, base_url: String, api_key: String, cx: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            cx,
        }
    }

    async fn search(&self, query: &str, image: bool) -> Result<SearchResponse, ProviderError> {
        let mut request = self
            .http
            .get(format!("{}/customsearch/v1", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cx.as_str()),
                ("q", query),
                ("num", "1"),
            ]);
        if image {
            request = request.query(&[("searchType", "image")]);
        }

        let response = request.send().await?;
        handle_response(response).await
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
    pagemap: Option<PageMap>,
}

#[derive(Debug, Deserialize)]
struct PageMap {
    #[serde(default)]
    cse_image: Vec<ImageRef>,
    #[serde(default)]
    cse_thumbnail: Vec<ImageRef>,
}

#[derive(Debug, Deserialize)]
struct ImageRef {
    src: Option<String>,
}

fn into_record(response: SearchResponse) -> Option<ProductRecord> {
    let item = response.items.into_iter().next()?;
    let image = item.pagemap.and_then(|p| {
        first_non_empty(
            p.cse_image
                .into_iter()
                .chain(p.cse_thumbnail)
                .map(|i| i.src),
        )
    });

    ProductRecord::from_parts(
        ProductSource::GoogleSearch,
        item.title,
        None,
        item.snippet,
        None,
        image,
    )
}

fn first_image_link(response: SearchResponse) -> Option<String> {
    first_non_empty(response.items.into_iter().map(|i| i.link))
}

#[async_trait]
impl ProductLookup for GoogleSearchClient {
    fn name(&self) -> &'static str {
        "google_search"
    }

    fn original_code_only(&self) -> bool {
        true
    }

    async fn lookup(&self, code: &str) -> Result<Option<ProductRecord>, ProviderError> {
        let response = self.search(code, false).await?;
        Ok(into_record(response))
    }
}

#[async_trait]
impl ImageSearch for GoogleSearchClient {
    async fn search_image(&self, query: &str) -> Result<Option<String>, ProviderError> {
        let response = self.search(query, true).await?;
        Ok(first_image_link(response))
    }
}

/// Image search used when no Google credentials are configured
pub struct NoopImageSearch;

#[async_trait]
impl ImageSearch for NoopImageSearch {
    async fn search_image(&self, _query: &str) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }
}
