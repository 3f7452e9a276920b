//! CSV Persister Module
//! Writes the label table back to CSV, for the output file and the download.

use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to serialize CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Overwrite `path` with the full table: header row, no index column.
pub fn save_csv(df: &mut DataFrame, path: &Path) -> Result<(), PersistError> {
    let mut file = File::create(path).map_err(|source| PersistError::Io {
        path: path.display().to_string(),
        source,
    })?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    info!(path = %path.display(), rows = df.height(), "saved labels");
    Ok(())
}

/// Serialize the table to UTF-8 CSV bytes.
pub fn to_csv_bytes(df: &mut DataFrame) -> Result<Vec<u8>, PersistError> {
    let mut buf = Vec::new();
    CsvWriter::new(&mut buf).include_header(true).finish(df)?;
    Ok(buf)
}

/// Write the downloadable copy to a user-chosen path.
pub fn export_csv(df: &mut DataFrame, path: &Path) -> Result<(), PersistError> {
    let bytes = to_csv_bytes(df)?;
    std::fs::write(path, bytes).map_err(|source| PersistError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), "exported labeled csv");
    Ok(())
}
