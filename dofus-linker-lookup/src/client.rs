use std::sync::Arc;

use dofus_linker_core::settings::ApiSettings;
use dofus_linker_core::{CandidateRecord, ContentCategory};
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

use crate::error::LookupError;
use crate::types::SearchResponse;

pub const DEFAULT_API_URL: &str = dofus_linker_core::settings::DEFAULT_API_URL;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(50);
const USER_AGENT: &str = concat!("dofus-linker/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the DofusDB search endpoints, with light request spacing.
#[derive(Debug, Clone)]
pub struct DofusDbClient {
    http: reqwest::Client,
    base_url: String,
    min_interval: Duration,
    last_request: Arc<Mutex<Instant>>,
}

impl DofusDbClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(LookupError::Config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url,
            min_interval: DEFAULT_MIN_INTERVAL,
            last_request: Arc::new(Mutex::new(Instant::now() - DEFAULT_MIN_INTERVAL)),
        })
    }

    /// Client for the public API with default timeout.
    pub fn with_defaults() -> Result<Self, LookupError> {
        Self::new(DEFAULT_API_URL, DEFAULT_TIMEOUT)
    }

    pub fn from_settings(api: &ApiSettings) -> Result<Self, LookupError> {
        Self::new(api.base_url.clone(), Duration::from_secs(api.timeout_secs))
    }

    /// Minimum spacing between two requests. Zero disables spacing.
    pub fn with_min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = interval;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search one category by English name.
    pub async fn search(
        &self,
        category: ContentCategory,
        english_name: &str,
    ) -> Result<Vec<CandidateRecord>, LookupError> {
        let url = format!("{}/{}", self.base_url, category.api_path());

        self.rate_limit().await;

        let resp = self
            .http
            .get(&url)
            .query(&[("name.en", english_name)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let text = resp.text().await?;
        let response: SearchResponse = serde_json::from_str(&text)?;
        log::debug!(
            "{}: {} result(s) for '{}'",
            category,
            response.data.len(),
            english_name
        );
        Ok(response.into_candidates())
    }

    /// Wait until at least `min_interval` has passed since the last request.
    async fn rate_limit(&self) {
        if self.min_interval.is_zero() {
            return;
        }
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < self.min_interval {
            tokio::time::sleep(self.min_interval - elapsed).await;
        }
        *last = Instant::now();
    }
}
