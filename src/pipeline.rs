// src/pipeline.rs
// =============================================================================
// The merge pipeline: validate the input, scrape every page, merge with the
// stored history, write the result back.
//
// How a run works:
// 1. ScrapeRequest::new checks the URL list (no I/O happens before this)
// 2. The history read and one fetch+extract per URL run concurrently
// 3. Every link list is unioned into one sorted set
// 4. The set replaces the file content
//
// Failure policy: the fetches are joined with try_join_all, which returns on
// the first error and drops the fetches still in flight. Nothing is written
// unless every page was scraped.
// =============================================================================

use crate::error::ScrapeError;
use crate::scrape::{self, PageFetcher};
use crate::store;
use futures::future::try_join_all;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A validated scrape request: where the history lives and what to scrape
///
/// Can only be built through `ScrapeRequest::new`, so a value of this type
/// always holds at least one valid URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    data_source: PathBuf,
    urls: Vec<String>,
}

impl ScrapeRequest {
    pub fn new(data_source: impl Into<PathBuf>, urls: Vec<String>) -> Result<Self, ScrapeError> {
        if urls.is_empty() {
            return Err(ScrapeError::NoUrls);
        }

        if let Some(bad) = urls.iter().find(|url| !scrape::is_valid_url(url)) {
            return Err(ScrapeError::InvalidUrl(bad.clone()));
        }

        Ok(Self {
            data_source: data_source.into(),
            urls,
        })
    }

    pub fn data_source(&self) -> &Path {
        &self.data_source
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }
}

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// The file that was written
    pub data_source: PathBuf,
    /// Number of links in the file now
    pub link_count: usize,
    /// Links that were not in the history before this run
    pub new_links: usize,
}

/// Scrapes every page of `request`, merges with the history and persists it
pub async fn run<F: PageFetcher>(
    request: &ScrapeRequest,
    fetcher: &F,
) -> Result<RunSummary, ScrapeError> {
    let path = request.data_source();

    log::info!("Scraping {} page(s)", request.urls().len());

    let history = store::read_links(path);
    let scrapes = try_join_all(
        request
            .urls()
            .iter()
            .map(|url| scrape_page(fetcher, url)),
    );

    let (history, scraped) = tokio::join!(history, scrapes);
    let scraped = scraped?;

    let known = history.iter().collect::<BTreeSet<_>>().len();
    let links: Vec<String> = merge_links(history, scraped).into_iter().collect();

    store::write_links(path, &links)
        .await
        .map_err(|source| ScrapeError::StoreWrite {
            path: path.to_path_buf(),
            source,
        })?;

    let summary = RunSummary {
        data_source: path.to_path_buf(),
        link_count: links.len(),
        new_links: links.len() - known,
    };
    log::info!(
        "{} link(s) stored, {} new",
        summary.link_count,
        summary.new_links
    );

    Ok(summary)
}

/// Unions the history with every page's links
///
/// Links are compared as exact strings, so `http://a.com` and
/// `http://a.com/` are both kept. Iterating the result yields them sorted.
pub fn merge_links<I>(history: Vec<String>, scraped: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    history
        .into_iter()
        .chain(scraped.into_iter().flatten())
        .collect()
}

// Fetches one page and extracts its links
async fn scrape_page<F: PageFetcher>(fetcher: &F, url: &str) -> Result<Vec<String>, ScrapeError> {
    let html = fetcher.fetch(url).await?;

    let links = scrape::extract_links(&html).map_err(|reason| ScrapeError::Parse {
        url: url.to_string(),
        reason,
    })?;

    log::info!("{} link(s) found on {}", links.len(), url);
    Ok(links)
}
