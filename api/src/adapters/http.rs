//! Shared response handling for provider clients

use serde::Deserialize;

use crate::error::ProviderError;

pub const USER_AGENT: &str = concat!("ShelfScan/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by every adapter
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}

/// Decode a JSON body, mapping non-2xx statuses to `ProviderError::Api`
pub async fn handle_response<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ProviderError::Deserialization(e.to_string()))
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// First non-empty string in a list of candidates
pub fn first_non_empty<I, S>(values: I) -> Option<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .flatten()
        .map(|v| v.as_ref().trim().to_string())
        .find(|v| !v.is_empty())
}
