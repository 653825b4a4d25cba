// src/scrape/html.rs
// =============================================================================
// Pulls the outbound links out of a scraped page.
//
// The page is parsed once with `scraper` and a single prefix selector picks
// the anchors whose href already starts with http:// or https://. The href
// text is kept verbatim: relative paths, fragments and mailto: targets never
// match the selector, and nothing is joined with the page URL.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::BTreeSet;

/// Anchors whose href already is an absolute HTTP(S) URL
const LINK_SELECTOR: &str = r#"a[href^="http://"], a[href^="https://"]"#;

// Returns every absolute http(s) href on the page, each once, in ascending
// string order. Err only carries a reason when the selector fails to compile.
//
// Example:
//   html = "<a href='https://b.com'>B</a><a href='http://a.com'>A</a><a href='/x'>X</a>"
//   result = ["http://a.com", "https://b.com"]
pub fn extract_links(html: &str) -> Result<Vec<String>, String> {
    let selector = Selector::parse(LINK_SELECTOR)
        .map_err(|e| format!("invalid link selector: {}", e))?;

    let document = Html::parse_document(html);

    // html5ever recovers from malformed markup and always gives us a tree,
    // the errors it reports are informational
    if !document.errors.is_empty() {
        log::debug!("HTML parser recovered from {} error(s)", document.errors.len());
    }

    // A BTreeSet both removes duplicates and keeps the links sorted
    let links: BTreeSet<String> = document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect();

    Ok(links.into_iter().collect())
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why the CSS prefix selector instead of filtering in Rust?
//    - [href^="http://"] matches attributes starting with that string
//    - Anchors without href never match, so no Option juggling for them
//    - The comparison is case-sensitive, so HTTP://X is not picked up
//
// 2. Why keep the raw href?
//    - Deduplication is exact string equality
//    - "http://a.com" and "http://a.com/" stay two different links
// -----------------------------------------------------------------------------
