//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record the calls they receive so tests can verify the cascade order.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{ProductRecord, VisualAnalysis};
use crate::domain::ports::{ImageSearch, ImageValidator, ProductLookup, VisionModel};
use crate::error::{ProviderError, VisionError};

// ============================================================================
// Mock Product Lookup
// ============================================================================

pub struct MockLookup {
    name: &'static str,
    original_only: bool,
    should_fail: bool,
    should_panic: bool,
    hits: HashMap<String, ProductRecord>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockLookup {
    /// A provider that knows no products
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            original_only: false,
            should_fail: false,
            should_panic: false,
            hits: HashMap::new(),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Answer `code` with `record`
    pub fn with_hit(mut self, code: &str, record: ProductRecord) -> Self {
        self.hits.insert(code.to_string(), record);
        self
    }

    /// Every lookup fails with an API error
    pub fn failing(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Every lookup panics, standing in for an unexpected bug
    pub fn panicking(mut self) -> Self {
        self.should_panic = true;
        self
    }

    pub fn original_code_only(mut self) -> Self {
        self.original_only = true;
        self
    }

    /// Codes looked up so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ProductLookup for MockLookup {
    fn name(&self) -> &'static str {
        self.name
    }

    fn original_code_only(&self) -> bool {
        self.original_only
    }

    async fn lookup(&self, code: &str) -> Result<Option<ProductRecord>, ProviderError> {
        self.calls.write().unwrap().push(code.to_string());

        if self.should_panic {
            panic!("lookup exploded for {}", code);
        }
        if self.should_fail {
            return Err(ProviderError::Api {
                status: 503,
                message: "Service unavailable".to_string(),
            });
        }
        Ok(self.hits.get(code).cloned())
    }
}

// ============================================================================
// Mock Image Search
// ============================================================================

#[derive(Default)]
pub struct MockImageSearch {
    results: HashMap<String, String>,
    default: Option<String>,
    queries: Arc<RwLock<Vec<String>>>,
}

impl MockImageSearch {
    /// A search that finds nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer an exact query with `url`
    pub fn with_result(mut self, query: &str, url: &str) -> Self {
        self.results.insert(query.to_string(), url.to_string());
        self
    }

    /// Answer every other query with `url`
    pub fn with_default(mut self, url: &str) -> Self {
        self.default = Some(url.to_string());
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.read().unwrap().clone()
    }
}

#[async_trait]
impl ImageSearch for MockImageSearch {
    async fn search_image(&self, query: &str) -> Result<Option<String>, ProviderError> {
        self.queries.write().unwrap().push(query.to_string());
        Ok(self
            .results
            .get(query)
            .cloned()
            .or_else(|| self.default.clone()))
    }
}

// ============================================================================
// Mock Image Validator
// ============================================================================

#[derive(Default)]
pub struct MockImageValidator {
    reachable: HashSet<String>,
    checked: Arc<RwLock<Vec<String>>>,
}

impl MockImageValidator {
    /// Every URL is unreachable
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reachable(mut self, url: &str) -> Self {
        self.reachable.insert(url.to_string());
        self
    }

    pub fn checked(&self) -> Vec<String> {
        self.checked.read().unwrap().clone()
    }
}

#[async_trait]
impl ImageValidator for MockImageValidator {
    async fn is_reachable(&self, url: &str) -> bool {
        self.checked.write().unwrap().push(url.to_string());
        self.reachable.contains(url)
    }
}

// ============================================================================
// Mock Vision Model
// ============================================================================

#[derive(Default)]
pub struct MockVisionModel {
    guess: Option<ProductRecord>,
    analysis: Option<VisualAnalysis>,
    guess_calls: Arc<RwLock<usize>>,
}

impl MockVisionModel {
    /// A model that never knows the answer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guess(mut self, record: ProductRecord) -> Self {
        self.guess = Some(record);
        self
    }

    pub fn with_analysis(mut self, analysis: VisualAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn guess_calls(&self) -> usize {
        *self.guess_calls.read().unwrap()
    }
}

#[async_trait]
impl VisionModel for MockVisionModel {
    async fn guess_from_barcode(&self, _code: &str) -> Result<Option<ProductRecord>, VisionError> {
        *self.guess_calls.write().unwrap() += 1;
        Ok(self.guess.clone())
    }

    async fn analyze_image(&self, _data_url: &str) -> Result<VisualAnalysis, VisionError> {
        self.analysis
            .clone()
            .ok_or_else(|| VisionError::Parse("expected value at line 1 column 1".to_string()))
    }
}
