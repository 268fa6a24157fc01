// src/parse/mod.rs
// =============================================================================
// HTML parsing: turns a page body into a title plus a list of links.
//
// The crawler never touches the DOM directly; it only sees ParsedPage.
// =============================================================================

mod html;

pub use html::parse_page;
