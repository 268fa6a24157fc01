// src/parse/html.rs
// =============================================================================
// This module pulls what the crawler needs out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model), tolerating broken markup
// - Supports CSS selectors for finding elements
//
// For every <a href> we keep:
// - the absolute, normalized URL (relative links resolved against the page)
// - the visible link text, whitespace collapsed
// - a short description: the text of the nearest <p>, <li> or <div> around it
// =============================================================================

use crate::crawl::normalize_url;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Descriptions longer than this are cut (in characters)
const MAX_DESCRIPTION_CHARS: usize = 300;

/// Everything the crawler uses from one page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedPage {
    /// Contents of <title>, trimmed
    pub title: Option<String>,
    /// Every usable link, in document order
    pub anchors: Vec<Anchor>,
}

/// One link found on a page
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub url: Url,
    pub text: String,
    pub description: Option<String>,
}

/// Parses `html` fetched from `page_url`.
///
/// Links that can't be resolved, and non-http links (mailto:, tel:,
/// javascript:, fragment-only), are dropped.
pub fn parse_page(html: &str, page_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    // Both selectors are constants, so parse failures would be programmer errors
    let title_selector = Selector::parse("title").expect("valid 'title' selector");
    let link_selector = Selector::parse("a[href]").expect("valid 'a[href]' selector");

    let title = document
        .select(&title_selector)
        .next()
        .map(|el| collapse_whitespace(el.text()))
        .filter(|t| !t.is_empty());

    let mut anchors = Vec::new();
    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(url) = resolve_link(page_url, href) else {
            tracing::trace!("Dropping link '{}' on {}", href, page_url);
            continue;
        };

        let text = collapse_whitespace(element.text());
        let description = derive_description(element)
            .or_else(|| (!text.is_empty()).then(|| text.clone()))
            .map(|d| truncate_chars(&d, MAX_DESCRIPTION_CHARS));

        anchors.push(Anchor {
            url,
            text,
            description,
        });
    }

    ParsedPage { title, anchors }
}

// Resolves a possibly-relative href into a normalized absolute http(s) URL
fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    // Skip anchors and special protocols
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
        || href.starts_with("data:")
    {
        return None;
    }

    let url = base.join(href).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    Some(normalize_url(url))
}

// Text of the closest enclosing paragraph, list item or div
fn derive_description(anchor: ElementRef<'_>) -> Option<String> {
    anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| matches!(el.value().name(), "p" | "li" | "div"))
        .map(|el| collapse_whitespace(el.text()))
        .filter(|text| !text.is_empty())
}

fn collapse_whitespace<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/library/").unwrap()
    }

    #[test]
    fn test_extracts_title_and_links() {
        let html = r#"
            <html>
              <head><title>  Free   Library </title></head>
              <body>
                <a href="https://www.rust-lang.org">Rust</a>
                <a href="/docs#intro">Docs</a>
                <a href="papers/one.pdf">Paper one</a>
              </body>
            </html>
        "#;
        let page = parse_page(html, &base());

        assert_eq!(page.title.as_deref(), Some("Free Library"));
        let urls: Vec<&str> = page.anchors.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://www.rust-lang.org/",
                "https://example.com/docs",
                "https://example.com/library/papers/one.pdf",
            ]
        );
        assert_eq!(page.anchors[2].text, "Paper one");
    }

    #[test]
    fn test_skips_special_links() {
        let html = r##"
            <a href="mailto:test@example.com">Email</a>
            <a href="tel:+123">Call</a>
            <a href="javascript:void(0)">Click</a>
            <a href="#top">Top</a>
            <a href="">Empty</a>
            <a href="ftp://example.com/file.pdf">FTP</a>
        "##;
        let page = parse_page(html, &base());
        assert!(page.anchors.is_empty(), "got {:?}", page.anchors);
    }

    #[test]
    fn test_description_from_enclosing_block() {
        let html = r#"
            <ul>
              <li>Chapter 1 notes: <a href="/c1.pdf">PDF</a>  (2 pages)</li>
            </ul>
            <a href="/bare">Bare link</a>
            <a href="/icon"><img src="x.png"></a>
        "#;
        let page = parse_page(html, &base());

        assert_eq!(
            page.anchors[0].description.as_deref(),
            Some("Chapter 1 notes: PDF (2 pages)")
        );
        // No block ancestor: the link text stands in
        assert_eq!(page.anchors[1].description.as_deref(), Some("Bare link"));
        // No text at all
        assert_eq!(page.anchors[2].text, "");
        assert_eq!(page.anchors[2].description, None);
    }

    #[test]
    fn test_long_descriptions_are_truncated() {
        let long = "word ".repeat(200);
        let html = format!(r#"<p>{long}<a href="/x">x</a></p>"#);
        let page = parse_page(&html, &base());

        let description = page.anchors[0].description.as_deref().unwrap();
        assert_eq!(description.chars().count(), MAX_DESCRIPTION_CHARS + 3);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_missing_title() {
        let page = parse_page("<p>no head</p>", &base());
        assert_eq!(page.title, None);
        assert!(page.anchors.is_empty());
    }
}
