//! HTTP fetcher for master descriptors

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::version::error::FetchError;
use crate::version::fetcher::DescriptorFetcher;

/// Fetcher that GETs descriptors over HTTP(S)
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds the HTTP client; fails when the configured user agent is not a
    /// valid header value
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl DescriptorFetcher for HttpFetcher {
    async fn fetch_descriptor(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching descriptor from {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            warn!("Descriptor host returned status {}: {}", status, url);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        Ok(response.text().await?)
    }
}
