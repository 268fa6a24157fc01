// src/crawl/classify.rs
// =============================================================================
// Link classification: decides, for every link found on a page, whether it
// is a free resource, a page we should crawl next, or something to ignore.
//
// Rules, first match wins:
// 1. Only http/https links are considered at all
// 2. A resource file extension (.pdf, .mp3, ...) on any host -> Download
// 3. A free-content keyword in the link text or URL path -> FreeContent
//    (followed only when it is on our site)
// 4. Any other page on our site that isn't a static asset -> Internal
// 5. Everything else -> Ignored
// =============================================================================

use crate::record::ResourceType;
use url::Url;

/// Words in link text or URL paths that suggest free material.
pub const KEYWORD_HINTS: [&str; 11] = [
    "download",
    "free",
    "resource",
    "handout",
    "worksheet",
    "guide",
    "ebook",
    "podcast",
    "video",
    "audio",
    "pdf",
];

// Same-site files that are neither pages nor resources
const ASSET_EXTENSIONS: [&str; 14] = [
    "png", "jpg", "jpeg", "gif", "svg", "webp", "ico", "bmp", "css", "js", "woff", "woff2",
    "ttf", "eot",
];

/// What the crawler should do with a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// A downloadable file: record it, never fetch it
    Download(ResourceType),
    /// Text or URL mentions free content. Internal ones are recorded as
    /// pages and crawled; external ones are recorded and left alone.
    FreeContent { internal: bool },
    /// An ordinary page on our site: crawl it
    Internal,
    /// Off-site, non-http, or a static asset
    Ignored,
}

impl LinkKind {
    /// The record type this link produces, if any
    pub fn resource_type(&self) -> Option<ResourceType> {
        match self {
            LinkKind::Download(kind) => Some(*kind),
            LinkKind::FreeContent { internal: true } => Some(ResourceType::Page),
            LinkKind::FreeContent { internal: false } => Some(ResourceType::Other),
            LinkKind::Internal | LinkKind::Ignored => None,
        }
    }

    /// Whether the link goes into the frontier
    pub fn should_follow(&self) -> bool {
        matches!(
            self,
            LinkKind::Internal | LinkKind::FreeContent { internal: true }
        )
    }
}

/// The site being crawled: same host and explicit port as the base URL.
///
/// The scheme is ignored, so http and https links to the same host both
/// count as internal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteScope {
    host: String,
    port: Option<u16>,
}

impl SiteScope {
    pub fn new(base_url: &Url) -> Self {
        Self {
            host: base_url.host_str().unwrap_or_default().to_string(),
            port: base_url.port(),
        }
    }

    pub fn contains(&self, url: &Url) -> bool {
        is_http(url) && url.host_str() == Some(self.host.as_str()) && url.port() == self.port
    }
}

/// Canonical form used for the visited set and record URLs.
///
/// The `url` crate already lowercases scheme and host and turns an empty
/// path into `/`; on top of that we drop fragments and empty queries.
pub fn normalize_url(mut url: Url) -> Url {
    url.set_fragment(None);
    if url.query() == Some("") {
        url.set_query(None);
    }
    url
}

/// Classify one link found on a page.
pub fn classify_link(url: &Url, link_text: &str, scope: &SiteScope) -> LinkKind {
    if !is_http(url) {
        return LinkKind::Ignored;
    }

    let extension = path_extension(url);
    if let Some(kind) = extension.as_deref().and_then(ResourceType::from_extension) {
        return LinkKind::Download(kind);
    }

    let internal = scope.contains(url);
    if has_keyword(link_text) || has_keyword(url.path()) {
        return LinkKind::FreeContent { internal };
    }

    let is_asset = extension
        .as_deref()
        .is_some_and(|ext| ASSET_EXTENSIONS.contains(&ext));
    if internal && !is_asset {
        LinkKind::Internal
    } else {
        LinkKind::Ignored
    }
}

fn is_http(url: &Url) -> bool {
    url.scheme() == "http" || url.scheme() == "https"
}

fn has_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    KEYWORD_HINTS.iter().any(|keyword| lower.contains(keyword))
}

// Lowercased extension of the last path segment, e.g. "PDF" in /a/Notes.PDF
fn path_extension(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.next_back()?;
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_ascii_lowercase())
    }
}
