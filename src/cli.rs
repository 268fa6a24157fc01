// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use clap's "derive" API: the Cli struct below *is* the interface. Each
// field becomes a flag, doc comments become --help text, and clap rejects
// malformed values (e.g. --max-pages abc) before our code runs, exiting
// with status 2.
//
// Range checks that clap can't express (negative delay, zero pages) happen
// in CrawlerConfigBuilder::build.
// =============================================================================

use crate::config::DEFAULT_BASE_URL;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "free-resource-crawler",
    version,
    about = "Crawl a website and collect links to free resources",
    long_about = "free-resource-crawler walks a single website breadth-first from its home page \
                  and records links to freely downloadable material (PDFs, audio, video, documents) \
                  and pages that advertise free content. Results are written as CSV, and \
                  optionally as JSON and a terminal table."
)]
pub struct Cli {
    /// URL the crawl starts from; only pages on this host are followed
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Maximum number of pages to fetch (failed fetches count too)
    #[arg(long, default_value_t = 200)]
    pub max_pages: usize,

    /// Delay between requests in seconds
    #[arg(long, default_value_t = 0.5)]
    pub delay: f64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30.0)]
    pub timeout: f64,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Path to the output CSV file
    #[arg(long, default_value = "data/free_resources.csv")]
    pub output: PathBuf,

    /// Optional path to also export the data as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Also print the results as a table on stdout
    #[arg(long)]
    pub table: bool,

    /// Logging level (RUST_LOG overrides this)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by tracing_subscriber::EnvFilter
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["free-resource-crawler"]).unwrap();
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.max_pages, 200);
        assert_eq!(cli.delay, 0.5);
        assert_eq!(cli.output, PathBuf::from("data/free_resources.csv"));
        assert_eq!(cli.json, None);
        assert!(!cli.table);
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "free-resource-crawler",
            "--base-url",
            "https://example.org/",
            "--max-pages",
            "10",
            "--delay",
            "1.5",
            "--output",
            "out.csv",
            "--json",
            "out.json",
            "--table",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "https://example.org/");
        assert_eq!(cli.max_pages, 10);
        assert_eq!(cli.delay, 1.5);
        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert_eq!(cli.json, Some(PathBuf::from("out.json")));
        assert!(cli.table);
        assert_eq!(cli.log_level.as_directive(), "debug");
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        assert!(Cli::try_parse_from(["free-resource-crawler", "--max-pages", "many"]).is_err());
        assert!(Cli::try_parse_from(["free-resource-crawler", "--max-pages", "-3"]).is_err());
        assert!(Cli::try_parse_from(["free-resource-crawler", "--delay", "soon"]).is_err());
    }
}
