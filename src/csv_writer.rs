//! CSV serialization of generated records
//!
//! Headers come from the record's field order; values are quoted by the
//! `csv` crate whenever they contain the delimiter, a quote or a line break.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::Result;

/// What a call to [`write_csv`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvOutcome {
    /// File written with a header and `rows` data rows
    Written { path: PathBuf, rows: usize },
    /// Nothing to write; no file or directory was touched
    Skipped,
}

impl CsvOutcome {
    /// Number of data rows written
    #[must_use]
    pub fn rows(&self) -> usize {
        match self {
            CsvOutcome::Written { rows, .. } => *rows,
            CsvOutcome::Skipped => 0,
        }
    }

    /// Path written, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            CsvOutcome::Written { path, .. } => Some(path),
            CsvOutcome::Skipped => None,
        }
    }
}

/// Write `records` to `path` as UTF-8 CSV, creating missing parent directories.
///
/// An empty slice is a no-op and returns [`CsvOutcome::Skipped`].
pub fn write_csv<T: Serialize>(records: &[T], path: impl AsRef<Path>) -> Result<CsvOutcome> {
    let path = path.as_ref();
    if records.is_empty() {
        warn!("No data to save for {}", path.display());
        return Ok(CsvOutcome::Skipped);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
        debug!("Ensured output directory {}", parent.display());
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("Generated {} records and saved to {}", records.len(), path.display());
    Ok(CsvOutcome::Written {
        path: path.to_path_buf(),
        rows: records.len(),
    })
}

/// Read a file produced by [`write_csv`] back into records
pub fn read_csv<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        city: String,
        stars: u8,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Grand Nîmes Hotel".to_string(),
                city: "Nîmes".to_string(),
                stars: 4,
            },
            Row {
                name: "Inn \"Chalet\", Düsseldorf".to_string(),
                city: "Düsseldorf".to_string(),
                stars: 2,
            },
            Row {
                name: "Lodge\nwith a line break".to_string(),
                city: "Saint-Étienne".to_string(),
                stars: 5,
            },
        ]
    }

    #[test]
    fn test_write_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("database").join("generated_data").join("rows.csv");

        let outcome = write_csv(&rows(), &path).unwrap();
        assert_eq!(outcome.rows(), 3);
        assert_eq!(outcome.path(), Some(path.as_path()));
        assert!(path.exists());
    }

    #[test]
    fn test_header_and_quoting() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        write_csv(&rows(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("name,city,stars"));
        assert_eq!(lines.next(), Some("Grand Nîmes Hotel,Nîmes,4"));
        assert!(contents.contains("\"Inn \"\"Chalet\"\", Düsseldorf\",Düsseldorf,2"));
        assert!(contents.contains("\"Lodge\nwith a line break\""));
    }

    #[test]
    fn test_roundtrip_preserves_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        write_csv(&rows(), &path).unwrap();

        let back: Vec<Row> = read_csv(&path).unwrap();
        assert_eq!(back, rows());
    }

    #[test]
    fn test_empty_input_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("rows.csv");

        let outcome = write_csv::<Row>(&[], &path).unwrap();
        assert_eq!(outcome, CsvOutcome::Skipped);
        assert_eq!(outcome.rows(), 0);
        assert!(!path.exists());
        assert!(!temp_dir.path().join("missing").exists());
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        fs::write(&blocker, "plain file").unwrap();

        let result = write_csv(&rows(), blocker.join("rows.csv"));
        assert!(result.is_err());
    }
}
