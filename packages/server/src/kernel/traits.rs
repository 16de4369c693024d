// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Price extraction lives in domains/pricing and works on whatever these return.
//
// Naming convention: Base* for trait names (e.g., BaseListingSearcher)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::search::SearchOptions;

// =============================================================================
// Listing Searcher Trait (Infrastructure - external scraping backend)
// =============================================================================

#[async_trait]
pub trait BaseListingSearcher: Send + Sync {
    /// Run a listing search for a search-page URL.
    ///
    /// Returns the backend's raw output. Its shape is not guaranteed; callers
    /// classify it with `SearchResultSet::from_value`.
    async fn search(&self, url: &str, options: &SearchOptions) -> Result<serde_json::Value>;

    /// Short backend name for logs
    fn name(&self) -> &str;
}
