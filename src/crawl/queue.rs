// src/crawl/queue.rs
// =============================================================================
// The two collections that drive a breadth-first crawl.
//
// Frontier:   URLs waiting to be fetched, oldest first (FIFO = breadth-first)
// VisitedSet: every URL that has ever been enqueued or fetched
//
// A URL goes into the VisitedSet at the moment it is enqueued, not when it
// is fetched. That way a page linked from ten places is queued once, and a
// page that failed to load is never tried again.
//
// Rust concepts:
// - VecDeque: push_back() adds to the end, pop_front() takes from the start
// - HashSet::insert returns false when the value was already there
// =============================================================================

use std::collections::{HashSet, VecDeque};
use url::Url;

/// Queue of URLs pending visit, in discovery order
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Url>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, url: Url) {
        self.queue.push_back(url);
    }

    pub fn pop(&mut self) -> Option<Url> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Normalized URLs that have been fetched or enqueued
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as seen. Returns false if it already was.
    pub fn insert(&mut self, url: &Url) -> bool {
        self.seen.insert(url.as_str().to_owned())
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.seen.contains(url.as_str())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_frontier_is_fifo() {
        let mut frontier = Frontier::new();
        frontier.push(url("https://example.com/a"));
        frontier.push(url("https://example.com/b"));
        frontier.push(url("https://example.com/c"));

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some(url("https://example.com/a")));
        assert_eq!(frontier.pop(), Some(url("https://example.com/b")));
        assert_eq!(frontier.pop(), Some(url("https://example.com/c")));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_visited_set_rejects_duplicates() {
        let mut visited = VisitedSet::new();
        assert!(visited.is_empty());
        assert!(visited.insert(&url("https://example.com/a")));
        assert!(!visited.insert(&url("https://example.com/a")));
        assert!(visited.insert(&url("https://example.com/b")));

        assert_eq!(visited.len(), 2);
        assert!(visited.contains(&url("https://example.com/a")));
        assert!(!visited.contains(&url("https://example.com/c")));
    }
}
