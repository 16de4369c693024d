//! Listing search endpoints.
//!
//! POST /api/search         - full options, echoes request metadata
//! POST /api/search/simple  - URL only, configured defaults
//!
//! A body that is missing, unparsable, or has no `url` is a 400. Any backend
//! failure is a 500 carrying the error chain.

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::common::SearchError;
use crate::domains::search::{search_listings, SearchOutcome, SearchRequest};
use crate::server::app::AxumAppState;

const MISSING_URL_MESSAGE: &str = "Please provide an Airbnb URL in the request body";
const BACKEND_FAILURE_MESSAGE: &str = "An error occurred while fetching Airbnb data";

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub currency: String,
    pub language: String,
    pub results_count: usize,
    pub lowest_price: Option<f64>,
    pub lowest_price_currency: Option<String>,
    pub prices_found: usize,
    pub data: Value,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        let lowest_price_currency = outcome.lowest_price_currency().map(String::from);
        Self {
            success: true,
            timestamp: Utc::now(),
            url: outcome.url,
            currency: outcome.options.currency,
            language: outcome.options.language,
            results_count: outcome.summary.results_count,
            lowest_price: outcome.summary.lowest_price,
            lowest_price_currency,
            prices_found: outcome.summary.prices_found,
            data: outcome.data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SimpleSearchResponse {
    pub success: bool,
    pub lowest_price: Option<f64>,
    pub lowest_price_currency: Option<String>,
    pub prices_found: usize,
    pub results_count: usize,
    pub data: Value,
}

impl From<SearchOutcome> for SimpleSearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            success: true,
            lowest_price: outcome.summary.lowest_price,
            lowest_price_currency: outcome.lowest_price_currency().map(String::from),
            prices_found: outcome.summary.prices_found,
            results_count: outcome.summary.results_count,
            data: outcome.data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Search with caller-supplied currency, language and proxy
pub async fn search_handler(
    Extension(state): Extension<AxumAppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Response {
    let request = read_request(body);
    let Some(url) = request.search_url() else {
        return error_response(SearchError::MissingUrl, true);
    };

    let options = request.options(&state.server_deps.default_options);
    match search_listings(url, options, &state.server_deps).await {
        Ok(outcome) => {
            let body = SearchResponse::from(outcome);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(SearchError::from(e), true),
    }
}

/// Search with only a URL; everything else comes from configuration
pub async fn simple_search_handler(
    Extension(state): Extension<AxumAppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Response {
    let request = read_request(body);
    let Some(url) = request.search_url() else {
        return error_response(SearchError::MissingUrl, false);
    };

    let options = state.server_deps.default_options.clone();
    match search_listings(url, options, &state.server_deps).await {
        Ok(outcome) => {
            let body = SimpleSearchResponse::from(outcome);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(SearchError::from(e), false),
    }
}

fn read_request(body: Result<Json<SearchRequest>, JsonRejection>) -> SearchRequest {
    match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable search request body");
            SearchRequest::default()
        }
    }
}

/// `detailed` adds the human-readable `message` the full endpoint returns.
fn error_response(err: SearchError, detailed: bool) -> Response {
    let status = err.status_code();
    let body = match &err {
        SearchError::MissingUrl => ErrorResponse {
            success: None,
            error: err.to_string(),
            message: detailed.then_some(MISSING_URL_MESSAGE),
        },
        SearchError::Backend(_) => {
            tracing::error!(error = %err, "Listing search failed");
            ErrorResponse {
                success: Some(false),
                error: err.to_string(),
                message: detailed.then_some(BACKEND_FAILURE_MESSAGE),
            }
        }
    };

    (status, Json(body)).into_response()
}
