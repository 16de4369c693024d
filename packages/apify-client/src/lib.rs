//! Pure Apify REST API client.
//!
//! A minimal client for the Apify platform API. Supports starting actor runs,
//! polling for completion, and fetching dataset results.
//!
//! # Example
//!
//! ```rust,ignore
//! use apify_client::ApifyClient;
//!
//! let client = ApifyClient::new("your-api-token".into());
//!
//! let url = "https://www.airbnb.co.uk/s/London/homes";
//! let listings = client
//!     .search_airbnb_from_url("tri_angle~airbnb-scraper", url, "GBP", "en", "")
//!     .await?;
//! println!("{} listings", listings.len());
//! ```

pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{AirbnbSearchInput, ProxyConfiguration, RunData, StartUrl};

use serde::de::DeserializeOwned;
use serde::Serialize;
use types::ApiResponse;

const BASE_URL: &str = "https://api.apify.com/v2";

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, BASE_URL.to_string())
    }

    /// Point the client at a different API root (self-hosted proxy, test server).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Start an actor run. Returns immediately with run metadata.
    pub async fn start_run<I: Serialize + ?Sized>(
        &self,
        actor_id: &str,
        input: &I,
    ) -> Result<RunData> {
        let url = format!("{}/acts/{}/runs", self.base_url, actor_id);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let api_resp: ApiResponse<RunData> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Poll until a run completes. Uses `waitForFinish=60` for efficient long-polling.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData> {
        loop {
            let url = format!("{}/actor-runs/{}?waitForFinish=60", self.base_url, run_id);
            let resp = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .send()
                .await?;

            let resp = check_status(resp).await?;
            let api_resp: ApiResponse<RunData> = resp.json().await?;
            match api_resp.data.status.as_str() {
                "SUCCEEDED" => return Ok(api_resp.data),
                "FAILED" | "ABORTED" | "TIMED-OUT" => {
                    return Err(ApifyError::RunFailed(api_resp.data.status));
                }
                _ => {
                    tracing::debug!(
                        run_id,
                        status = %api_resp.data.status,
                        "Run still in progress"
                    );
                    continue;
                }
            }
        }
    }

    /// Fetch dataset items from a completed run.
    pub async fn get_dataset_items<T: DeserializeOwned>(
        &self,
        dataset_id: &str,
    ) -> Result<Vec<T>> {
        let url = format!(
            "{}/datasets/{}/items?format=json",
            self.base_url, dataset_id
        );
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let items: Vec<T> = resp.json().await?;
        Ok(items)
    }

    /// Run an Airbnb search scrape end-to-end: start run, poll, fetch results.
    ///
    /// Items are returned as raw JSON; listing shapes differ between actor
    /// versions and callers only read a handful of fields.
    pub async fn search_airbnb_from_url(
        &self,
        actor_id: &str,
        search_url: &str,
        currency: &str,
        language: &str,
        proxy_url: &str,
    ) -> Result<Vec<serde_json::Value>> {
        tracing::info!(
            actor_id,
            search_url,
            currency,
            language,
            "Starting Airbnb search scrape"
        );

        let input = AirbnbSearchInput::new(search_url, currency, language, proxy_url);
        let run = self.start_run(actor_id, &input).await?;
        tracing::info!(run_id = %run.id, "Apify run started, polling for completion");

        let completed = self.wait_for_run(&run.id).await?;
        tracing::info!(
            run_id = %completed.id,
            dataset_id = %completed.default_dataset_id,
            "Run completed, fetching results"
        );

        let dataset_id = &completed.default_dataset_id;
        let items: Vec<serde_json::Value> = self.get_dataset_items(dataset_id).await?;
        tracing::info!(count = items.len(), "Fetched Airbnb listings");

        Ok(items)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ApifyError::Api {
        status: status.as_u16(),
        message: body,
    })
}
