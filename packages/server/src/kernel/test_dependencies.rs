// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseListingSearcher, ServerDeps};
use crate::domains::search::SearchOptions;

// =============================================================================
// Mock Listing Searcher
// =============================================================================

/// Arguments captured from a search call
#[derive(Debug, Clone)]
pub struct SearchCallArgs {
    pub url: String,
    pub options: SearchOptions,
}

enum MockResponse {
    Data(Value),
    Error(String),
}

pub struct MockListingSearcher {
    responses: Arc<Mutex<Vec<MockResponse>>>,
    calls: Arc<Mutex<Vec<SearchCallArgs>>>,
    delay: Option<Duration>,
}

impl MockListingSearcher {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Make every search take at least `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue raw backend output to be returned by the next search
    pub fn with_response(self, data: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockResponse::Data(data));
        self
    }

    /// Queue a failure for the next search
    pub fn with_error(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockResponse::Error(message.to_string()));
        self
    }

    /// Get all search calls with their arguments
    pub fn calls(&self) -> Vec<SearchCallArgs> {
        self.calls.lock().unwrap().clone()
    }

    /// Check if a URL was searched
    pub fn was_searched(&self, url: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c.url == url)
    }
}

impl Default for MockListingSearcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseListingSearcher for MockListingSearcher {
    async fn search(&self, url: &str, options: &SearchOptions) -> Result<Value> {
        // Record the call
        self.calls.lock().unwrap().push(SearchCallArgs {
            url: url.to_string(),
            options: options.clone(),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default: no listings found
            return Ok(Value::Array(Vec::new()));
        }

        match responses.remove(0) {
            MockResponse::Data(data) => Ok(data),
            MockResponse::Error(message) => Err(anyhow::anyhow!(message)),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub listing_searcher: Arc<MockListingSearcher>,
    pub default_options: SearchOptions,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            listing_searcher: Arc::new(MockListingSearcher::new()),
            default_options: SearchOptions::default(),
        }
    }

    /// Set a mock listing searcher
    pub fn mock_searcher(mut self, searcher: MockListingSearcher) -> Self {
        self.listing_searcher = Arc::new(searcher);
        self
    }

    /// Override the fallback search options
    pub fn default_options(mut self, options: SearchOptions) -> Self {
        self.default_options = options;
        self
    }

    /// Convert into ServerDeps for testing
    pub fn into_deps(self) -> Arc<ServerDeps> {
        Arc::new(ServerDeps::new(self.listing_searcher, self.default_options))
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
