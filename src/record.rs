// src/record.rs
// =============================================================================
// The data we collect: one ResourceRecord per free resource we discover.
//
// A record is created once, when the crawler first sees a link worth keeping,
// and never changed afterwards. Records are unique by URL; the crawler keeps
// the first discovery and ignores later sightings of the same link.
//
// Rust concepts:
// - Enums with serde attributes: serialize as plain lowercase strings
// - chrono::DateTime<Utc>: timezone-aware timestamps that serialize as RFC 3339
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// What kind of resource a link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// A `.pdf` file
    Pdf,
    /// Audio files (`.mp3`, `.wav`, ...)
    Audio,
    /// Video files (`.mp4`, `.webm`, ...)
    Video,
    /// Office documents and e-books (`.docx`, `.pptx`, `.epub`, ...)
    Document,
    /// Archives (`.zip`)
    Archive,
    /// A page on the crawled site whose link suggests free content
    Page,
    /// An off-site link that suggests free content
    Other,
}

impl ResourceType {
    /// Every variant, in the order we print summaries.
    pub const ALL: [ResourceType; 7] = [
        ResourceType::Pdf,
        ResourceType::Audio,
        ResourceType::Video,
        ResourceType::Document,
        ResourceType::Archive,
        ResourceType::Page,
        ResourceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Pdf => "pdf",
            ResourceType::Audio => "audio",
            ResourceType::Video => "video",
            ResourceType::Document => "document",
            ResourceType::Archive => "archive",
            ResourceType::Page => "page",
            ResourceType::Other => "other",
        }
    }

    /// Maps a lowercase file extension (without the dot) to a resource type.
    ///
    /// Returns None for extensions we don't treat as downloadable resources.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(ResourceType::Pdf),
            "mp3" | "wav" | "m4a" | "ogg" | "flac" | "aac" => Some(ResourceType::Audio),
            "mp4" | "mov" | "webm" | "avi" => Some(ResourceType::Video),
            "doc" | "docx" | "ppt" | "pptx" | "xls" | "xlsx" | "epub" | "rtf" => {
                Some(ResourceType::Document)
            }
            "zip" => Some(ResourceType::Archive),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discovered downloadable or free-content link.
///
/// Field order is the column order of the CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Normalized absolute URL of the resource
    pub url: String,
    /// Anchor text, or the source page's title when the anchor had none
    pub link_text: String,
    pub resource_type: ResourceType,
    /// The page the link was found on
    pub source_page: String,
    /// `<title>` of the source page, if it had one
    pub page_title: Option<String>,
    /// Text around the link (its enclosing paragraph, list item or div)
    pub description: Option<String>,
    pub discovered_at: DateTime<Utc>,
}

impl ResourceRecord {
    pub fn new(
        url: &Url,
        link_text: &str,
        resource_type: ResourceType,
        source_page: &Url,
        page_title: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        // Fall back to the page title so the text column is rarely blank
        let link_text = if link_text.is_empty() {
            page_title.unwrap_or_default().to_string()
        } else {
            link_text.to_string()
        };

        Self {
            url: url.to_string(),
            link_text,
            resource_type,
            source_page: source_page.to_string(),
            page_title: page_title.map(str::to_string),
            description: description.map(str::to_string),
            discovered_at: Utc::now(),
        }
    }
}
