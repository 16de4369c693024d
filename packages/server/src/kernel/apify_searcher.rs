use std::sync::Arc;

use anyhow::{Context, Result};
use apify_client::ApifyClient;
use async_trait::async_trait;

use super::BaseListingSearcher;
use crate::domains::search::SearchOptions;

/// Default actor for Airbnb search-result pages.
pub const DEFAULT_AIRBNB_ACTOR: &str = "tri_angle~airbnb-scraper";

/// Apify implementation of BaseListingSearcher
pub struct ApifyListingSearcher {
    apify: Arc<ApifyClient>,
    actor_id: String,
}

impl ApifyListingSearcher {
    pub fn new(apify: Arc<ApifyClient>, actor_id: String) -> Self {
        Self { apify, actor_id }
    }
}

#[async_trait]
impl BaseListingSearcher for ApifyListingSearcher {
    async fn search(&self, url: &str, options: &SearchOptions) -> Result<serde_json::Value> {
        let items = self
            .apify
            .search_airbnb_from_url(
                &self.actor_id,
                url,
                &options.currency,
                &options.language,
                &options.proxy_url,
            )
            .await
            .context("Apify search failed")?;

        Ok(serde_json::Value::Array(items))
    }

    fn name(&self) -> &str {
        "apify"
    }
}
