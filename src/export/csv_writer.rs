// src/export/csv_writer.rs
// =============================================================================
// Writes records to a CSV file, one row per record, in the column order
// given by CSV_COLUMNS. Missing parent directories are created first.
// =============================================================================

use super::ensure_parent_dir;
use crate::crawl::CrawlError;
use crate::record::ResourceRecord;
use csv::WriterBuilder;
use std::fs::File;
use std::path::Path;

/// Column order of the CSV export; matches the ResourceRecord fields.
pub const CSV_COLUMNS: [&str; 7] = [
    "url",
    "link_text",
    "resource_type",
    "source_page",
    "page_title",
    "description",
    "discovered_at",
];

/// Writes `records` to `path` as CSV.
///
/// The header row is always written, so an empty crawl still produces a
/// valid (empty) dataset.
pub fn write_csv(path: &Path, records: &[ResourceRecord]) -> Result<(), CrawlError> {
    ensure_parent_dir(path)?;

    if records.is_empty() {
        tracing::warn!("No resources found; writing empty CSV to {}", path.display());
    }

    let file = File::create(path).map_err(|e| CrawlError::io(path, e))?;
    // Headers are written by hand: serde-driven headers only appear with the first row
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(CSV_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| CrawlError::io(path, e))?;

    tracing::info!("Wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ResourceType;
    use url::Url;

    fn record(url: &str, text: &str, kind: ResourceType) -> ResourceRecord {
        ResourceRecord::new(
            &Url::parse(url).unwrap(),
            text,
            kind,
            &Url::parse("https://example.com/library").unwrap(),
            Some("Library"),
            Some("Notes, with a comma"),
        )
    }

    #[test]
    fn test_write_csv_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/free_resources.csv");
        let records = vec![
            record("https://example.com/a.pdf", "Paper A", ResourceType::Pdf),
            record("https://example.com/free", "Free page", ResourceType::Page),
        ];

        write_csv(&path, &records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
        assert_eq!(headers, CSV_COLUMNS);

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "https://example.com/a.pdf");
        assert_eq!(&rows[0][1], "Paper A");
        assert_eq!(&rows[0][2], "pdf");
        assert_eq!(&rows[0][3], "https://example.com/library");
        assert_eq!(&rows[0][4], "Library");
        assert_eq!(&rows[0][5], "Notes, with a comma");
        assert!(!rows[0][6].is_empty());
        assert_eq!(&rows[1][2], "page");
    }

    #[test]
    fn test_write_csv_empty_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), CSV_COLUMNS.join(","));
    }
}
