//! Reads CSV sources into a single ordered list of [`Record`]s.

use crate::error::{ReportError, Result};
use crate::record::Record;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads every source in order and concatenates their rows.
///
/// Stops at the first source that cannot be opened or read; rows already
/// collected from earlier sources are discarded with it.
///
/// # Errors
///
/// Returns [`ReportError::SourceUnreadable`] naming the failing path.
#[tracing::instrument(skip_all, fields(sources = paths.len()))]
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let rows = read_source(path).map_err(|source| ReportError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), rows = rows.len(), "Source loaded");
        records.extend(rows);
    }

    Ok(records)
}

fn read_source(path: &Path) -> csv::Result<Vec<Record>> {
    let file = std::fs::File::open(path)?;
    read_records(file)
}

/// Parses CSV text with a header row into records.
///
/// An empty input or a header with no rows yields an empty list. Rows may be
/// shorter or longer than the header.
pub fn read_records<R: Read>(reader: R) -> csv::Result<Vec<Record>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let row = result?;
        rows.push(Record::from_row(&headers, &row));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_records_empty_input() {
        let rows = read_records("".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_records_header_only() {
        let rows = read_records("name,position,performance\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_records_keeps_row_order() {
        let data = "position,performance\nA,1\nB,2\nC,3\n";
        let rows = read_records(data.as_bytes()).unwrap();

        let positions: Vec<_> = rows.iter().map(|r| r.get_or("position", "")).collect();
        assert_eq!(positions, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_read_records_short_row_is_skipped_by_aggregation() {
        let data = "position,performance\nA,10\nA\nB,2,extra\n";
        let rows = read_records(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].value_or("performance", "0"), None);
        assert_eq!(rows[2].get("performance"), Some("2"));

        let report = crate::analyzers::aggregate::aggregate_performance(&rows);
        assert_eq!(report[0].position, "A");
        assert_eq!(report[0].performance, 10.0);
        assert_eq!(report[0].count, 1);
    }

    #[test]
    fn test_read_records_rejects_invalid_utf8() {
        let data: &[u8] = b"position,performance\n\xff\xfe,1\n";
        assert!(read_records(data).is_err());
    }

    #[test]
    fn test_load_sources_concatenates_in_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        fs::write(&first, "position,performance\nA,1\nB,2\n").unwrap();
        fs::write(&second, "performance,position\n3,C\n").unwrap();

        let rows = load_sources(&[&first, &second]).unwrap();

        let positions: Vec<_> = rows.iter().map(|r| r.get_or("position", "")).collect();
        assert_eq!(positions, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_load_sources_fails_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("present.csv");
        let missing = dir.path().join("missing.csv");
        fs::write(&present, "position,performance\nA,1\n").unwrap();

        let err = load_sources(&[&present, &missing]).unwrap_err();

        match err {
            ReportError::SourceUnreadable { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_sources_no_paths() {
        let paths: [&Path; 0] = [];
        assert!(load_sources(&paths).unwrap().is_empty());
    }
}
