// Listing Price Search - API Core
//
// Forwards listing-search URLs to a scraping backend and reports the
// lowest nightly price found across the results.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
