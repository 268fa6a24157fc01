// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Features:
// - Breadth-first crawling starting from the site's home page
// - Same-site restriction (external links can be recorded, never followed)
// - Page-count cap and polite delays between requests
// - Link classification into resources, free-content pages and plain pages
// - Records deduplicated by URL
//
// Submodules:
// - crawler:  the crawl loop and its statistics
// - queue:    Frontier (FIFO) and VisitedSet
// - classify: URL normalization, site scope and link classification rules
// - error:    fatal error type
// =============================================================================

mod classify;
mod crawler;
mod error;
mod queue;

pub use classify::normalize_url;
pub use crawler::Crawler;
pub use error::CrawlError;
