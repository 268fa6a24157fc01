// src/export/json_writer.rs
// =============================================================================
// Writes records to a pretty-printed JSON array with the same fields as
// the CSV export.
// =============================================================================

use super::ensure_parent_dir;
use crate::crawl::CrawlError;
use crate::record::ResourceRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `records` to `path` as a pretty-printed JSON array.
pub fn write_json(path: &Path, records: &[ResourceRecord]) -> Result<(), CrawlError> {
    ensure_parent_dir(path)?;

    let file = File::create(path).map_err(|e| CrawlError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush().map_err(|e| CrawlError::io(path, e))?;

    tracing::info!("Wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}
