use anyhow::{Context, Result};

use crate::domains::pricing::{extract_lowest_price, SearchResultSet};
use crate::domains::search::models::{SearchOptions, SearchOutcome};
use crate::kernel::ServerDeps;

/// Run a listing search through the configured backend and summarize its prices.
pub async fn search_listings(
    url: &str,
    options: SearchOptions,
    deps: &ServerDeps,
) -> Result<SearchOutcome> {
    let searcher = &deps.listing_searcher;

    tracing::info!(
        url,
        backend = searcher.name(),
        currency = %options.currency,
        language = %options.language,
        "Searching listings"
    );

    let data = searcher
        .search(url, &options)
        .await
        .with_context(|| format!("Listing search via {} failed", searcher.name()))?;

    let summary = extract_lowest_price(&SearchResultSet::from_value(&data));

    tracing::info!(
        url,
        results_count = summary.results_count,
        prices_found = summary.prices_found,
        lowest_price = ?summary.lowest_price,
        "Listing search complete"
    );

    Ok(SearchOutcome {
        url: url.to_string(),
        options,
        summary,
        data,
    })
}
