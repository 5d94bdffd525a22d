//! Fetcher test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use mod_version_checker::version::error::FetchError;
use mod_version_checker::version::fetcher::DescriptorFetcher;

/// Fetcher serving descriptors from memory; unknown URLs are not found
#[derive(Default)]
pub struct StubFetcher {
    descriptors: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptor(mut self, url: &str, text: &str) -> Self {
        self.descriptors.insert(url.to_string(), text.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        let mut urls = self.requested.lock().unwrap().clone();
        urls.sort();
        urls
    }
}

#[async_trait]
impl DescriptorFetcher for StubFetcher {
    async fn fetch_descriptor(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.descriptors
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}
