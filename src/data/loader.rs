//! CSV Data Loader Module
//! Parses uploaded CSV files into a [`LabelTable`] using Polars.

use crate::data::table::{LabelTable, TableError};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Rows scanned for schema inference.
const INFER_SCHEMA_ROWS: usize = 10_000;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Uploaded file is empty")]
    Empty,
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Loads CSV input into a label table. Holds no state between loads.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file from disk.
    pub fn load_csv(path: &Path) -> Result<LabelTable, LoaderError> {
        debug!(path = %path.display(), "reading csv");
        let bytes = std::fs::read(path)?;
        Self::load_csv_bytes(bytes)
    }

    /// Parse the bytes of an uploaded CSV file.
    pub fn load_csv_bytes(bytes: Vec<u8>) -> Result<LabelTable, LoaderError> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(LoaderError::Empty);
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        let table = LabelTable::from_frame(df)?;
        info!(
            rows = table.height(),
            columns = table.column_names().len(),
            "loaded csv"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::{TableError, LABELER_COLUMN, SCORE_COLUMN};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_csv_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.csv");
        fs::write(&path, "col1,col2\n1,3\n2,4\n").unwrap();

        let table = DataLoader::load_csv(&path).unwrap();
        assert_eq!(table.height(), 2);
        let columns = table.column_names();
        assert!(columns.contains(&"col1".to_string()));
        assert!(columns.contains(&SCORE_COLUMN.to_string()));
        assert!(columns.contains(&LABELER_COLUMN.to_string()));
    }

    #[test]
    fn test_load_uploaded_bytes_with_existing_labels() {
        let csv = "id,ERI_Score,Labeler\n1,5,alice\n2,,\n";
        let table = DataLoader::load_csv_bytes(csv.as_bytes().to_vec()).unwrap();
        assert_eq!(table.column_names(), vec!["id", SCORE_COLUMN, LABELER_COLUMN]);
        assert_eq!(table.score_at(0), Some(5));
        assert_eq!(table.labeler_at(0).as_deref(), Some("alice"));
        assert_eq!(table.first_unlabeled(), Some(1));
    }

    #[test]
    fn test_empty_label_columns_are_usable() {
        let csv = "id,ERI_Score,Labeler\n1,,\n2,,\n";
        let table = DataLoader::load_csv_bytes(csv.as_bytes().to_vec()).unwrap();
        assert_eq!(table.labeled_count(), 0);
        assert_eq!(table.first_unlabeled(), Some(0));
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let table = DataLoader::load_csv_bytes(b"a,b\n".to_vec()).unwrap();
        assert_eq!(table.height(), 0);
    }

    #[test]
    fn test_empty_upload_rejected() {
        assert!(matches!(
            DataLoader::load_csv_bytes(Vec::new()),
            Err(LoaderError::Empty)
        ));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let result = DataLoader::load_csv_bytes(b"a,b\n1,2,3\n".to_vec());
        assert!(matches!(result, Err(LoaderError::CsvError(_))));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let result = DataLoader::load_csv_bytes(b"a\n\xff\xfe\n".to_vec());
        assert!(matches!(result, Err(LoaderError::CsvError(_))));
    }

    #[test]
    fn test_fractional_scores_in_upload_rejected() {
        let result = DataLoader::load_csv_bytes(b"id,ERI_Score\n1,4.5\n".to_vec());
        assert!(matches!(
            result,
            Err(LoaderError::Table(TableError::ColumnType { .. }))
        ));
    }

    #[test]
    fn test_whole_float_scores_in_upload_kept() {
        let csv = b"id,ERI_Score\n1,5.0\n2,\n".to_vec();
        let table = DataLoader::load_csv_bytes(csv).unwrap();
        assert_eq!(table.score_at(0), Some(5));
        assert_eq!(table.first_unlabeled(), Some(1));
    }

    #[test]
    fn test_missing_file_reports_error() {
        let dir = tempdir().unwrap();
        let result = DataLoader::load_csv(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(LoaderError::Io(_))));
    }
}
