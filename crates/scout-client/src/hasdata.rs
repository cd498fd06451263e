use std::time::Duration;

use reqwest::{Client, Response};
use scout_core::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ScoutConfig};
use scout_core::error::AppError;
use scout_core::models::SearchQuery;
use scout_core::traits::JobApi;
use url::Url;

const LISTING_PATH: &str = "/scrape/indeed/listing";
const JOB_PATH: &str = "/scrape/indeed/job";

/// Client for the HasData Indeed scraping endpoints.
///
/// Every request carries the `x-api-key` header and is bounded by a single
/// timeout (30 seconds unless configured otherwise).
#[derive(Clone)]
pub struct HasDataClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl HasDataClient {
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, AppError> {
        Self::build(api_key, base_url, DEFAULT_TIMEOUT)
    }

    pub fn from_config(config: &ScoutConfig) -> Result<Self, AppError> {
        Self::build(&config.api_key, &config.base_url, config.timeout)
    }

    pub fn with_timeout(self, timeout: Duration) -> Result<Self, AppError> {
        Self::build(&self.api_key, &self.base_url, timeout)
    }

    fn build(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent("indeed-scout/0.1")
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout_secs: timeout.as_secs(),
        })
    }

    /// Build the listing search URL for one page.
    fn listing_url(&self, query: &SearchQuery, start: usize) -> Result<Url, AppError> {
        let start = start.to_string();
        Url::parse_with_params(
            &format!("{}{LISTING_PATH}", self.base_url),
            [
                ("keyword", query.job_title.as_str()),
                ("location", query.location.as_str()),
                ("domain", query.domain.as_str()),
                ("start", start.as_str()),
            ],
        )
        .map_err(|e| AppError::HttpError(format!("Invalid listing URL: {e}")))
    }

    /// Build the detail URL for an already-normalized job URL.
    fn job_url(&self, job_url: &str) -> Result<Url, AppError> {
        Url::parse_with_params(
            &format!("{}{JOB_PATH}", self.base_url),
            [("url", job_url)],
        )
        .map_err(|e| AppError::HttpError(format!("Invalid job URL: {e}")))
    }

    async fn get_json(&self, url: Url) -> Result<serde_json::Value, AppError> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header("x-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    AppError::NetworkError(format!("Connection failed: {e}"))
                } else {
                    AppError::HttpError(e.to_string())
                }
            })?;

        decode(response, self.timeout_secs).await
    }
}

async fn decode(response: Response, timeout_secs: u64) -> Result<serde_json::Value, AppError> {
    let status = response.status();
    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            AppError::Timeout(timeout_secs)
        } else {
            AppError::HttpError(format!("Failed to read response body: {e}"))
        }
    })?;

    if !status.is_success() {
        return Err(AppError::ApiError {
            status_code: status.as_u16(),
            body,
        });
    }

    let value: serde_json::Value = serde_json::from_str(&body)?;
    if value.is_null() {
        return Ok(serde_json::Value::Object(Default::default()));
    }
    Ok(value)
}

impl JobApi for HasDataClient {
    async fn listing_page(
        &self,
        query: &SearchQuery,
        start: usize,
    ) -> Result<serde_json::Value, AppError> {
        let url = self.listing_url(query, start)?;
        self.get_json(url).await
    }

    async fn job_detail(&self, job_url: &str) -> Result<serde_json::Value, AppError> {
        let url = self.job_url(job_url)?;
        self.get_json(url).await
    }
}
