pub mod actions;
pub mod models;

pub use actions::search_listings;
pub use models::{SearchOptions, SearchOutcome, SearchRequest};
