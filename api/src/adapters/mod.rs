//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;
pub mod image_probe;
pub mod openai;
pub mod providers;

pub use http::build_http_client;
pub use image_probe::HttpImageValidator;
pub use openai::{NoopVisionModel, OpenAiVisionClient};
pub use providers::{
    BarcodeLookupClient, GoogleSearchClient, NoopImageSearch, OpenFactsClient, UpcItemDbClient,
};
