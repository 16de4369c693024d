use serde::Deserialize;
use serde_json::Value;

use crate::domains::pricing::PriceSummary;

pub const DEFAULT_CURRENCY: &str = "GBP";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Options forwarded to the scraping backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub currency: String,
    pub language: String,
    /// Empty means "let the backend pick a proxy".
    pub proxy_url: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            proxy_url: String::new(),
        }
    }
}

/// JSON body of a search request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    pub url: Option<String>,
    pub currency: Option<String>,
    pub language: Option<String>,
    pub proxy_url: Option<String>,
}

impl SearchRequest {
    /// The search URL, unless missing or blank.
    pub fn search_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    /// Request options layered over `defaults`.
    pub fn options(&self, defaults: &SearchOptions) -> SearchOptions {
        SearchOptions {
            currency: self
                .currency
                .clone()
                .unwrap_or_else(|| defaults.currency.clone()),
            language: self
                .language
                .clone()
                .unwrap_or_else(|| defaults.language.clone()),
            proxy_url: self
                .proxy_url
                .clone()
                .unwrap_or_else(|| defaults.proxy_url.clone()),
        }
    }
}

/// Result of one search: what was asked, what came back, and its price summary.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub url: String,
    pub options: SearchOptions,
    pub summary: PriceSummary,
    /// Raw backend output, passed through untouched.
    pub data: Value,
}

impl SearchOutcome {
    /// Currency of `lowest_price`, present only when a price was found.
    pub fn lowest_price_currency(&self) -> Option<&str> {
        self.summary
            .lowest_price
            .map(|_| self.options.currency.as_str())
    }
}
