// src/fetch/mod.rs
// =============================================================================
// The transport seam between the crawler and the network.
//
// The crawler only knows about the Fetcher trait: "give me this URL, get back
// a page or an error". Production code uses HttpFetcher (reqwest); tests plug
// in an in-memory site so crawl order can be checked without a network.
//
// Submodules:
// - http: the reqwest-backed implementation
// =============================================================================

mod http;

pub use http::HttpFetcher;

use futures::future::BoxFuture;
use thiserror::Error;
use url::Url;

/// A successfully fetched document
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    /// Where we ended up after redirects
    pub url: Url,
    /// Raw Content-Type header, if the server sent one
    pub content_type: Option<String>,
    pub body: String,
}

impl FetchedPage {
    /// True when the body should be parsed as HTML.
    ///
    /// A missing Content-Type is treated as HTML.
    pub fn is_html(&self) -> bool {
        match &self.content_type {
            Some(content_type) => content_type.to_ascii_lowercase().contains("html"),
            None => true,
        }
    }
}

/// Why a single page could not be fetched. Never fatal to a crawl.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    /// Redirect loop or redirect chain over the limit
    #[error("too many redirects")]
    TooManyRedirects,

    /// DNS failure, refused connection, TLS handshake problems
    #[error("connection failed: {0}")]
    Connect(String),

    /// Anything else, including bodies we couldn't decode
    #[error("{0}")]
    Other(String),
}

/// Fetch a URL and return its body, or an error
pub trait Fetcher {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<FetchedPage, FetchError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(content_type: Option<&str>) -> FetchedPage {
        FetchedPage {
            url: Url::parse("https://example.com/").unwrap(),
            content_type: content_type.map(str::to_string),
            body: String::new(),
        }
    }

    #[test]
    fn test_is_html() {
        assert!(page(Some("text/html; charset=utf-8")).is_html());
        assert!(page(Some("application/xhtml+xml")).is_html());
        assert!(page(Some("Text/HTML")).is_html());
        assert!(page(None).is_html());
        assert!(!page(Some("application/pdf")).is_html());
        assert!(!page(Some("image/png")).is_html());
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP 404");
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
    }
}
