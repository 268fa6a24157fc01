// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Validate the configuration and build the HTTP client
// 4. Crawl the site
// 5. Export the records (CSV always, JSON and table on request)
// 6. Exit with proper code (0 = completed, 2 = fatal error)
//
// A crawl that finds nothing, or where every page fails, still completes
// and exits 0: per-page failures are logged, not fatal.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod export;
mod fetch;
mod parse;
mod record;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, LogLevel};
use config::CrawlerConfig;
use crawl::Crawler;
use fetch::HttpFetcher;
use tracing_subscriber::EnvFilter;

// A single-threaded runtime: the crawl is sequential by design
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let result = run(Cli::parse()).await;

    if let Err(e) = &result {
        // {:#} prints the whole context chain on one line
        eprintln!("Error: {:#}", e);
    }

    std::process::exit(exit_code_for(&result));
}

// 0 = the crawl ran to completion, 2 = something fatal stopped it
fn exit_code_for(result: &Result<i32>) -> i32 {
    match result {
        Ok(code) => *code,
        Err(_) => 2,
    }
}

async fn run(cli: Cli) -> Result<i32> {
    init_logging(cli.log_level);

    let mut builder = CrawlerConfig::builder()
        .base_url(cli.base_url.as_str())
        .max_pages(cli.max_pages)
        .delay_secs(cli.delay)
        .timeout_secs(cli.timeout);
    if let Some(user_agent) = &cli.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    let config = builder.build().context("invalid configuration")?;

    let fetcher = HttpFetcher::new(&config).context("failed to set up the HTTP client")?;

    tracing::info!(
        "Starting crawl of {} (max_pages={})",
        config.base_url,
        config.max_pages
    );

    let mut crawler = Crawler::new(config, fetcher);
    let records = crawler.crawl().await;

    export::write_csv(&cli.output, &records)
        .with_context(|| format!("failed to write CSV to {}", cli.output.display()))?;

    if let Some(json_path) = &cli.json {
        export::write_json(json_path, &records)
            .with_context(|| format!("failed to write JSON to {}", json_path.display()))?;
    }

    if cli.table {
        export::print_table(&records);
    }

    tracing::info!(
        "Scraping complete. {} resource(s) captured from {} page(s), {} URL(s) seen.",
        records.len(),
        crawler.stats().pages_visited,
        crawler.visited().len()
    );

    Ok(0)
}

// Logs go to stderr so `--table` output on stdout stays clean.
// Dependencies only log warnings unless RUST_LOG says otherwise.
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,free_resource_crawler={}",
            level.as_directive()
        ))
    });

    // try_init: a subscriber may already be installed (tests call run() repeatedly)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
