// src/export/table.rs
// =============================================================================
// Prints records as a human-readable table in the terminal, followed by a
// per-type summary. Logs go to stderr, so this is the only thing on stdout.
// =============================================================================

use crate::record::{ResourceRecord, ResourceType};

const URL_WIDTH: usize = 60;
const TEXT_WIDTH: usize = 40;

/// Prints `records` to stdout
pub fn print_table(records: &[ResourceRecord]) {
    print!("{}", render_table(records));
}

fn render_table(records: &[ResourceRecord]) -> String {
    let mut out = String::new();

    // Table header
    out.push_str(&format!(
        "{:<10} {:<uw$} {:<tw$}\n",
        "TYPE",
        "URL",
        "TEXT",
        uw = URL_WIDTH,
        tw = TEXT_WIDTH
    ));
    out.push_str(&"=".repeat(10 + 1 + URL_WIDTH + 1 + TEXT_WIDTH));
    out.push('\n');

    for record in records {
        out.push_str(&format!(
            "{:<10} {:<uw$} {:<tw$}\n",
            record.resource_type.as_str(),
            truncate(&record.url, URL_WIDTH),
            truncate(&record.link_text, TEXT_WIDTH),
            uw = URL_WIDTH,
            tw = TEXT_WIDTH
        ));
    }

    out.push('\n');
    out.push_str("Summary:\n");
    for kind in ResourceType::ALL {
        let count = records.iter().filter(|r| r.resource_type == kind).count();
        if count > 0 {
            out.push_str(&format!("   {:<10} {}\n", kind.as_str(), count));
        }
    }
    out.push_str(&format!("   {:<10} {}\n", "total", records.len()));

    out
}

// Cuts long values to fit a column, on a char boundary
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let mut cut: String = value.chars().take(width - 3).collect();
        cut.push_str("...");
        cut
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_render_table_with_summary() {
        let page = Url::parse("https://example.com/").unwrap();
        let long_url = format!("https://example.com/{}.pdf", "a".repeat(100));
        let records = vec![
            ResourceRecord::new(
                &Url::parse(&long_url).unwrap(),
                "Long paper",
                ResourceType::Pdf,
                &page,
                None,
                None,
            ),
            ResourceRecord::new(
                &Url::parse("https://example.com/b.pdf").unwrap(),
                "Écrits libres",
                ResourceType::Pdf,
                &page,
                None,
                None,
            ),
            ResourceRecord::new(
                &Url::parse("https://example.com/free").unwrap(),
                "Free",
                ResourceType::Page,
                &page,
                None,
                None,
            ),
        ];

        let table = render_table(&records);

        assert!(table.starts_with("TYPE"));
        assert!(!table.contains(&long_url));
        assert!(table.contains("..."));
        assert!(table.contains("Écrits libres"));
        assert!(table.contains("   pdf        2\n"));
        assert!(table.contains("   page       1\n"));
        assert!(table.contains("   total      3\n"));
        assert!(!table.contains("audio"));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééééééééé", 6), "ééé...");
    }
}
