//! Server dependencies for request handlers (using traits for testability)
//!
//! This module provides the central dependency container used by domain actions.
//! All external services use trait abstractions to enable testing.

use std::sync::Arc;

use apify_client::ApifyClient;

use crate::config::Config;
use crate::domains::search::SearchOptions;
use crate::kernel::{ApifyListingSearcher, BaseListingSearcher};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to actions (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// Scraping backend for listing searches
    pub listing_searcher: Arc<dyn BaseListingSearcher>,
    /// Options used when a request leaves them out
    pub default_options: SearchOptions,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        listing_searcher: Arc<dyn BaseListingSearcher>,
        default_options: SearchOptions,
    ) -> Self {
        Self {
            listing_searcher,
            default_options,
        }
    }

    /// Production wiring: Apify-backed searcher plus configured defaults.
    pub fn from_config(config: &Config) -> Self {
        let apify = Arc::new(ApifyClient::new(config.apify_api_token.clone()));
        let searcher = ApifyListingSearcher::new(apify, config.apify_airbnb_actor.clone());

        Self::new(Arc::new(searcher), config.default_search_options())
    }
}
