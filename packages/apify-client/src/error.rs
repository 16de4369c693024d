//! Typed errors for the Apify client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApifyError>;

#[derive(Debug, Error)]
pub enum ApifyError {
    /// Transport-level failure (connect, TLS, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Apify answered with a non-success status
    #[error("Apify API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Run reached a terminal status other than SUCCEEDED
    #[error("actor run ended with status {0}")]
    RunFailed(String),
}
