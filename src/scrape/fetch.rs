// src/scrape/fetch.rs
// =============================================================================
// This module downloads the pages we scrape.
//
// Key functionality:
// - PageFetcher: the seam the pipeline depends on (one method: fetch)
// - HttpFetcher: the real implementation on top of reqwest
// - Non-2xx responses and transport failures become ScrapeError values
//
// There is no retry: the first failure is returned as-is and the pipeline
// aborts the run with it.
// =============================================================================

use crate::error::ScrapeError;
use reqwest::Client;
use std::time::Duration;

/// Something that can turn a URL into page text
///
/// The pipeline only talks to this trait, so tests can swap in an
/// in-memory implementation.
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Settings for the HTTP client
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-request timeout (connect + headers + body)
    pub timeout: Duration,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("link-harvest/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetches pages over HTTP(S)
///
/// Holds one reqwest Client so all requests share its connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        // A reset while streaming the body is still a network failure
        let text = response.text().await.map_err(|source| ScrapeError::Network {
            url: url.to_string(),
            source,
        })?;

        log::debug!("{} returned {} bytes", url, text.len());
        Ok(text)
    }
}
