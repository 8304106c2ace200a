//! Product data providers
//!
//! HTTP clients for the external product databases consulted by the cascade.

pub mod barcode_lookup;
pub mod google_search;
pub mod open_facts;
pub mod upcitemdb;

pub use barcode_lookup::BarcodeLookupClient;
pub use google_search::{GoogleSearchClient, NoopImageSearch};
pub use open_facts::OpenFactsClient;
pub use upcitemdb::UpcItemDbClient;
