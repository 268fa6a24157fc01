// src/config.rs
// =============================================================================
// Crawler configuration.
//
// The CLI builds a CrawlerConfig through CrawlerConfigBuilder, which checks
// every value before a single request is sent. A bad value here is a fatal
// startup error; everything that goes wrong later is per-page and non-fatal.
//
// Defaults are polite: 200 pages at most, half a second between requests,
// a 30 second timeout and a User-Agent that names this tool.
// =============================================================================

use crate::crawl::{normalize_url, CrawlError};
use std::time::Duration;
use url::Url;

/// Where crawls start when no --base-url is given
pub const DEFAULT_BASE_URL: &str = "https://www.bfskinner.org/";

/// Configuration for a single crawl
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Normalized start URL; also defines which host counts as "the site"
    pub base_url: Url,

    /// Maximum number of pages to fetch (failed fetches count too)
    pub max_pages: usize,

    /// Pause between consecutive requests
    pub delay: Duration,

    /// Per-request timeout
    pub timeout: Duration,

    /// User agent sent with every request
    pub user_agent: String,
}

pub fn default_user_agent() -> String {
    format!("free-resource-crawler/{}", env!("CARGO_PKG_VERSION"))
}

impl CrawlerConfig {
    /// Create a new builder
    pub fn builder() -> CrawlerConfigBuilder {
        CrawlerConfigBuilder::default()
    }
}

/// Builder for CrawlerConfig
///
/// Values are stored raw and validated in [`CrawlerConfigBuilder::build`], so
/// the builder can be fed straight from CLI flags.
#[derive(Debug)]
pub struct CrawlerConfigBuilder {
    base_url: String,
    max_pages: usize,
    delay_secs: f64,
    timeout_secs: f64,
    user_agent: Option<String>,
}

impl Default for CrawlerConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_pages: 200,
            delay_secs: 0.5,
            timeout_secs: 30.0,
            user_agent: None,
        }
    }
}

impl CrawlerConfigBuilder {
    /// Set the URL the crawl starts from
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the maximum number of pages to fetch
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the delay between requests, in seconds
    pub fn delay_secs(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    /// Set the per-request timeout, in seconds
    pub fn timeout_secs(mut self, timeout_secs: f64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the user agent sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate everything and build the configuration
    pub fn build(self) -> Result<CrawlerConfig, CrawlError> {
        let base_url = parse_base_url(&self.base_url)?;

        if self.max_pages == 0 {
            return Err(CrawlError::InvalidConfig(
                "max-pages must be at least 1".to_string(),
            ));
        }

        if !self.delay_secs.is_finite() || self.delay_secs < 0.0 {
            return Err(CrawlError::InvalidConfig(format!(
                "delay must be a non-negative number of seconds, got {}",
                self.delay_secs
            )));
        }

        if !self.timeout_secs.is_finite() || self.timeout_secs <= 0.0 {
            return Err(CrawlError::InvalidConfig(format!(
                "timeout must be a positive number of seconds, got {}",
                self.timeout_secs
            )));
        }

        let user_agent = match self.user_agent {
            Some(ua) if ua.trim().is_empty() => {
                return Err(CrawlError::InvalidConfig(
                    "user agent must not be empty".to_string(),
                ))
            }
            Some(ua) => ua,
            None => default_user_agent(),
        };

        // Finite values can still overflow a Duration
        let delay = Duration::try_from_secs_f64(self.delay_secs).map_err(|e| {
            CrawlError::InvalidConfig(format!("delay of {} seconds: {}", self.delay_secs, e))
        })?;
        let timeout = Duration::try_from_secs_f64(self.timeout_secs).map_err(|e| {
            CrawlError::InvalidConfig(format!("timeout of {} seconds: {}", self.timeout_secs, e))
        })?;

        Ok(CrawlerConfig {
            base_url,
            max_pages: self.max_pages,
            delay,
            timeout,
            user_agent,
        })
    }
}

// The base URL must be an absolute http(s) URL with a host
fn parse_base_url(raw: &str) -> Result<Url, CrawlError> {
    let invalid = |reason: &str| CrawlError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid("only http and https URLs can be crawled"));
    }
    if url.host_str().is_none() {
        return Err(invalid("URL has no host"));
    }

    Ok(normalize_url(url))
}
