// Business domains
pub mod pricing;
pub mod search;
