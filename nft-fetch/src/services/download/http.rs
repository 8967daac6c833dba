use super::ImageFetcher;
use crate::interfaces::error::DownloadError;

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches images over HTTP, each request bounded by `timeout`.
pub struct HttpImageFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpImageFetcher {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, uri: &str) -> Result<Vec<u8>, DownloadError> {
        // The timeout covers connecting, headers and the whole body.
        let response = self.client.get(uri).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
