// src/crawl/crawler.rs
// =============================================================================
// The crawl loop.
//
// How it works:
// 1. Start with the base URL in the frontier (and in the visited set)
// 2. Pop the oldest URL, wait out the politeness delay, fetch it
// 3. Parse the page and classify every link on it
// 4. Record resources (once per URL), enqueue unvisited internal pages
// 5. Repeat until the frontier is empty or max_pages fetches were made
//
// Failures never stop the crawl: a page that can't be fetched is logged,
// counted, and skipped. It still counts toward max_pages, so the cap is a
// hard limit on how many requests we send.
// =============================================================================

use super::classify::{classify_link, normalize_url, SiteScope};
use super::queue::{Frontier, VisitedSet};
use crate::config::CrawlerConfig;
use crate::fetch::{FetchedPage, Fetcher};
use crate::parse::parse_page;
use crate::record::{ResourceRecord, ResourceType};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use url::Url;

/// Counters for one crawl
#[derive(Debug, Default, Clone)]
pub struct CrawlStats {
    pub start_time: Option<Instant>,
    pub end_time: Option<Instant>,
    /// Fetch attempts, successful or not. Never exceeds max_pages.
    pub pages_visited: usize,
    pub pages_parsed: usize,
    pub pages_failed: usize,
    /// Fetched but not parsed (non-HTML, or a redirect off-site or to a page we already had)
    pub pages_skipped: usize,
    pub links_discovered: usize,
    pub records_found: usize,
}

impl CrawlStats {
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            Some(end.duration_since(start))
        } else {
            None
        }
    }

    pub fn log_summary(&self) {
        tracing::info!(
            pages_visited = self.pages_visited,
            pages_parsed = self.pages_parsed,
            pages_failed = self.pages_failed,
            pages_skipped = self.pages_skipped,
            links_discovered = self.links_discovered,
            records_found = self.records_found,
            duration_secs = self.duration().map(|d| d.as_secs_f64()).unwrap_or_default(),
            "Crawl statistics"
        );
    }
}

/// Breadth-first crawler over a single site
pub struct Crawler<F: Fetcher> {
    config: CrawlerConfig,
    fetcher: F,
    scope: SiteScope,
    frontier: Frontier,
    visited: VisitedSet,
    records: Vec<ResourceRecord>,
    record_urls: HashSet<String>,
    stats: CrawlStats,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(config: CrawlerConfig, fetcher: F) -> Self {
        let scope = SiteScope::new(&config.base_url);
        let start = normalize_url(config.base_url.clone());

        let mut frontier = Frontier::new();
        let mut visited = VisitedSet::new();
        visited.insert(&start);
        frontier.push(start);

        Self {
            config,
            fetcher,
            scope,
            frontier,
            visited,
            records: Vec::new(),
            record_urls: HashSet::new(),
            stats: CrawlStats::default(),
        }
    }

    /// Runs until the frontier is empty or the page cap is hit, and returns
    /// every record discovered, in discovery order.
    pub async fn crawl(&mut self) -> Vec<ResourceRecord> {
        self.stats.start_time = Some(Instant::now());

        tracing::info!(
            base_url = %self.config.base_url,
            max_pages = self.config.max_pages,
            delay_ms = self.config.delay.as_millis() as u64,
            user_agent = %self.config.user_agent,
            "Starting crawl"
        );

        while self.stats.pages_visited < self.config.max_pages {
            let Some(url) = self.frontier.pop() else {
                break;
            };

            // Politeness: pause between requests, not before the first one
            if self.stats.pages_visited > 0 && !self.config.delay.is_zero() {
                tokio::time::sleep(self.config.delay).await;
            }

            self.stats.pages_visited += 1;
            tracing::info!(
                "Crawling [{}/{}]: {}",
                self.stats.pages_visited,
                self.config.max_pages,
                url
            );

            match self.fetcher.fetch(&url).await {
                Ok(page) => self.process_page(&url, page),
                Err(e) => {
                    tracing::warn!("Failed to fetch {}: {}", url, e);
                    self.stats.pages_failed += 1;
                }
            }
        }

        if !self.frontier.is_empty() {
            tracing::info!(
                "Page limit of {} reached with {} URL(s) still queued",
                self.config.max_pages,
                self.frontier.len()
            );
        }

        self.stats.end_time = Some(Instant::now());
        self.stats.records_found = self.records.len();
        self.stats.log_summary();

        self.records.clone()
    }

    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    fn process_page(&mut self, requested: &Url, page: FetchedPage) {
        if !page.is_html() {
            tracing::debug!(
                "Skipping non-HTML content at {} ({})",
                requested,
                page.content_type.as_deref().unwrap_or("unknown")
            );
            self.stats.pages_skipped += 1;
            return;
        }

        // After a redirect, links resolve against where we actually landed
        let page_url = normalize_url(page.url);
        if !self.scope.contains(&page_url) {
            tracing::debug!(
                "{} redirected off-site to {}, skipping",
                requested,
                page_url
            );
            self.stats.pages_skipped += 1;
            return;
        }
        if page_url != *requested && !self.visited.insert(&page_url) {
            tracing::debug!(
                "{} redirected to already seen {}, skipping",
                requested,
                page_url
            );
            self.stats.pages_skipped += 1;
            return;
        }

        let parsed = parse_page(&page.body, &page_url);
        self.stats.pages_parsed += 1;
        self.stats.links_discovered += parsed.anchors.len();
        tracing::debug!("{} link(s) found on {}", parsed.anchors.len(), page_url);

        for anchor in &parsed.anchors {
            let kind = classify_link(&anchor.url, &anchor.text, &self.scope);
            tracing::trace!("{} -> {:?}", anchor.url, kind);

            if let Some(resource_type) = kind.resource_type() {
                self.add_record(
                    ResourceRecord::new(
                        &anchor.url,
                        &anchor.text,
                        resource_type,
                        &page_url,
                        parsed.title.as_deref(),
                        anchor.description.as_deref(),
                    ),
                );
            }

            if kind.should_follow() {
                self.enqueue(&anchor.url);
            }
        }
    }

    fn enqueue(&mut self, url: &Url) {
        if self.visited.insert(url) {
            self.frontier.push(url.clone());
        }
    }

    fn add_record(&mut self, record: ResourceRecord) {
        // First sighting wins
        if !self.record_urls.insert(record.url.clone()) {
            return;
        }

        if record.resource_type == ResourceType::Page {
            tracing::debug!("Free-content page: {}", record.url);
        } else {
            tracing::info!("Found {} resource: {}", record.resource_type, record.url);
        }
        self.records.push(record);
    }
}
