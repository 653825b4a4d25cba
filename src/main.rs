// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, level from -v flags)
// 3. Build a validated ScrapeRequest, then run the pipeline
// 4. Print exactly one line: where the links went, or what went wrong
//
// Everything is I/O-bound, so a single-threaded tokio runtime is enough:
// all fetches and the file read are interleaved on one thread.
// =============================================================================

mod cli;
mod error;
mod pipeline;
mod scrape;
mod store;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::Cli;
use pipeline::ScrapeRequest;
use scrape::HttpFetcher;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    match run(cli).await {
        Ok(message) => println!("{}", message),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

// Returns the success line to print
async fn run(cli: Cli) -> Result<String> {
    // Anchor the data source at the working directory so the message names
    // the exact file we wrote
    let data_source = std::path::absolute(&cli.data_source).map_err(|e| {
        anyhow!(
            "Invalid data source '{}': {}",
            cli.data_source.display(),
            e
        )
    })?;

    let fetch_config = cli.fetch_config();
    let request = ScrapeRequest::new(data_source, cli.urls)?;

    let fetcher = HttpFetcher::new(&fetch_config)
        .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

    let summary = pipeline::run(&request, &fetcher).await?;

    Ok(format!(
        "Done writing links to '{}'.",
        summary.data_source.display()
    ))
}
