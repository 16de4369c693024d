use axum::http::StatusCode;
use thiserror::Error;

/// Failures surfaced by the search endpoints
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("URL is required")]
    MissingUrl,

    #[error("{0:#}")]
    Backend(#[from] anyhow::Error),
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::MissingUrl => StatusCode::BAD_REQUEST,
            SearchError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
