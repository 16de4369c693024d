mod search_listings;

pub use search_listings::search_listings;
