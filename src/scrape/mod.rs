// src/scrape/mod.rs
// =============================================================================
// This module contains everything needed to scrape one page:
//
// - validate: decides whether an input string is a URL we can fetch
// - fetch: downloads a page (PageFetcher trait + reqwest implementation)
// - html: pulls the absolute http(s) links out of the page
//
// This file re-exports the pieces the pipeline uses, so callers write
// `scrape::extract_links()` instead of `scrape::html::extract_links()`.
// =============================================================================

mod fetch;
mod html;
mod validate;

pub use fetch::{FetchConfig, HttpFetcher, PageFetcher};
pub use html::extract_links;
pub use validate::is_valid_url;
