// src/crawl/error.rs
// =============================================================================
// Errors that stop the program: bad configuration, an HTTP client that can't
// be built, or an export that can't be written.
//
// A page that fails to load is NOT one of these. That's a FetchError, it
// gets logged, and the crawl moves on.
// =============================================================================

use thiserror::Error;

/// Fatal errors: bad configuration, a client we can't build, or output we
/// can't write. Per-page failures are [`crate::fetch::FetchError`] and never
/// abort a crawl.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The start URL can't be crawled
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Writing an export file failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CrawlError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        CrawlError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
