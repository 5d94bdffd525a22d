//! Fetcher trait for retrieving master descriptors

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;

/// Trait for fetching descriptor text from wherever it is hosted
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DescriptorFetcher: Send + Sync {
    /// Fetches the raw descriptor published at `url`
    ///
    /// # Returns
    /// * `Ok(String)` - Undecoded descriptor text
    /// * `Err(FetchError)` - If the request fails or the server rejects it
    async fn fetch_descriptor(&self, url: &str) -> Result<String, FetchError>;
}
