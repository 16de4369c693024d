//! Kernel module - server infrastructure and dependencies.

pub mod apify_searcher;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use apify_searcher::{ApifyListingSearcher, DEFAULT_AIRBNB_ACTOR};
pub use deps::ServerDeps;
pub use test_dependencies::{MockListingSearcher, TestDependencies};
pub use traits::*;
