// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage: link-harvest [OPTIONS] <DATA_SOURCE> [URLS]...
//
// The URL list is deliberately optional as far as clap is concerned: an
// empty list is rejected by ScrapeRequest::new, so every kind of bad input
// produces the same one-line error.
// =============================================================================

use crate::scrape::FetchConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "link-harvest",
    version,
    about = "Scrapes absolute links from web pages into a JSON file",
    long_about = "link-harvest fetches the given pages, extracts every absolute http(s) link, \
                  merges them with the links already stored in the JSON file, and writes the \
                  sorted, deduplicated result back."
)]
pub struct Cli {
    /// JSON file holding the links collected so far (created if missing)
    pub data_source: PathBuf,

    /// Pages to scrape links from (at least one)
    pub urls: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// HTTP client settings derived from the flags
    pub fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig {
            timeout: Duration::from_secs(self.timeout),
            ..FetchConfig::default()
        };
        if let Some(ua) = &self.user_agent {
            config.user_agent = ua.clone();
        }
        config
    }

    /// Log level derived from the number of -v flags
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
