//! HEAD-request image validator

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::ImageValidator;

pub struct HttpImageValidator {
    http: Client,
}

impl HttpImageValidator {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

fn is_http_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[async_trait]
impl ImageValidator for HttpImageValidator {
    async fn is_reachable(&self, url: &str) -> bool {
        if !is_http_url(url) {
            return false;
        }

        match self.http.head(url.trim()).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    tracing::debug!(url, status = %response.status(), "Image rejected");
                }
                ok
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "Image probe failed");
                false
            }
        }
    }
}
