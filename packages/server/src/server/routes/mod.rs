// HTTP routes
pub mod health;
pub mod index;
pub mod search;

pub use health::*;
pub use index::*;
pub use search::*;
