use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single start URL in actor input.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StartUrl {
    pub url: String,
}

/// Proxy settings understood by Apify actors.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ProxyConfiguration {
    Apify {
        #[serde(rename = "useApifyProxy")]
        use_apify_proxy: bool,
    },
    Custom {
        #[serde(rename = "proxyUrls")]
        proxy_urls: Vec<String>,
    },
}

impl ProxyConfiguration {
    /// An empty proxy URL falls back to the Apify proxy pool.
    pub fn from_proxy_url(proxy_url: &str) -> Self {
        let proxy_url = proxy_url.trim();
        if proxy_url.is_empty() {
            Self::Apify {
                use_apify_proxy: true,
            }
        } else {
            Self::Custom {
                proxy_urls: vec![proxy_url.to_string()],
            }
        }
    }
}

/// Input for an Airbnb search-results scraper actor.
#[derive(Debug, Clone, Serialize)]
pub struct AirbnbSearchInput {
    #[serde(rename = "startUrls")]
    pub start_urls: Vec<StartUrl>,
    pub currency: String,
    pub locale: String,
    #[serde(rename = "proxyConfiguration")]
    pub proxy_configuration: ProxyConfiguration,
}

impl AirbnbSearchInput {
    pub fn new(url: &str, currency: &str, language: &str, proxy_url: &str) -> Self {
        Self {
            start_urls: vec![StartUrl {
                url: url.to_string(),
            }],
            currency: currency.to_string(),
            locale: language.to_string(),
            proxy_configuration: ProxyConfiguration::from_proxy_url(proxy_url),
        }
    }
}

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: String,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}
