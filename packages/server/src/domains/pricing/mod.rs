//! Lowest-price extraction over scraped search results.

pub mod extractor;
pub mod models;

pub use extractor::extract_lowest_price;
pub use models::{ListingRecord, PriceSummary, SearchResultSet};
