// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP using reqwest.
//
// Key functionality:
// - One shared Client for the whole crawl (connection pooling)
// - Per-request timeout and a User-Agent that identifies the crawler
// - Follows up to 5 redirects and reports where we ended up
// - Sorts failures into timeout / redirect / connection / status buckets
//   so the crawl log says *why* a page was skipped
// =============================================================================

use super::{FetchError, FetchedPage, Fetcher};
use crate::config::CrawlerConfig;
use crate::crawl::CrawlError;
use futures::future::{BoxFuture, FutureExt};
use reqwest::header::CONTENT_TYPE;
use reqwest::{redirect, Client};
use url::Url;

/// Maximum redirect hops before a fetch fails
const MAX_REDIRECTS: usize = 5;

/// reqwest-backed [`Fetcher`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client with the timeout and user agent from `config`
    pub fn new(config: &CrawlerConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }

    async fn get(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let mut page = FetchedPage {
            url: final_url,
            content_type,
            body: String::new(),
        };

        // Don't download PDFs and media just to throw them away
        if page.is_html() {
            page.body = response.text().await.map_err(categorize_error)?;
        }

        Ok(page)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<FetchedPage, FetchError>> {
        self.get(url).boxed()
    }
}

// Turns a reqwest error into the bucket we log
fn categorize_error(error: reqwest::Error) -> FetchError {
    let error_string = error.to_string();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_connect() {
        FetchError::Connect(error_string)
    } else {
        FetchError::Other(error_string)
    }
}
