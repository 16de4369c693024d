use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::domains::search::{models::DEFAULT_CURRENCY, models::DEFAULT_LANGUAGE, SearchOptions};
use crate::kernel::DEFAULT_AIRBNB_ACTOR;

/// Upper bound on one request, backend run included.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub apify_api_token: String,
    pub apify_airbnb_actor: String,
    pub default_currency: String,
    pub default_language: String,
    /// Empty means any origin may call the API.
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            apify_api_token: env::var("APIFY_API_TOKEN").context("APIFY_API_TOKEN must be set")?,
            apify_airbnb_actor: env::var("APIFY_AIRBNB_ACTOR")
                .unwrap_or_else(|_| DEFAULT_AIRBNB_ACTOR.to_string()),
            default_currency: env::var("DEFAULT_CURRENCY")
                .unwrap_or_else(|_| DEFAULT_CURRENCY.to_string()),
            default_language: env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string()),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            request_timeout: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .map(Duration::from_secs)
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }

    /// Options applied when a request doesn't specify its own
    pub fn default_search_options(&self) -> SearchOptions {
        SearchOptions {
            currency: self.default_currency.clone(),
            language: self.default_language.clone(),
            proxy_url: String::new(),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
