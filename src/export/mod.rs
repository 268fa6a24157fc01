// src/export/mod.rs
// =============================================================================
// Output writers. Records are held in memory for the whole crawl and written
// once at the end:
// - csv_writer:  the main dataset (always written)
// - json_writer: optional pretty-printed JSON copy
// - table:       optional human-readable table on stdout
// =============================================================================

mod csv_writer;
mod json_writer;
mod table;

pub use csv_writer::write_csv;
pub use json_writer::write_json;
pub use table::print_table;

use crate::crawl::CrawlError;
use std::fs;
use std::path::Path;

// Creates the directory an output file will live in, if it has one
fn ensure_parent_dir(path: &Path) -> Result<(), CrawlError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| CrawlError::io(parent, e))
        }
        _ => Ok(()),
    }
}
