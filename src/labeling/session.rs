//! Labeling Session Module
//! Ties the label table, the row cursor and the output file together.

use crate::data::{persister, LabelTable, PersistError, TableError};
use crate::labeling::{EriScore, RowCursor};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No more rows to label")]
    NoCurrentRow,
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Result of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Labels saved, cursor moved to `row`.
    Advanced { row: usize },
    /// The last row was labeled; the cursor stays on it.
    Completed,
}

/// One uploaded file under review.
pub struct LabelingSession {
    table: LabelTable,
    cursor: RowCursor,
    output_path: PathBuf,
}

impl LabelingSession {
    pub fn new(table: LabelTable, output_path: PathBuf) -> Self {
        let cursor = RowCursor::new(table.height());
        Self {
            table,
            cursor,
            output_path,
        }
    }

    /// Label the current row, rewrite the output file, then advance.
    ///
    /// If the write fails the label stays in memory and the cursor does not
    /// move, so the same submission can be retried.
    pub fn submit(
        &mut self,
        score: EriScore,
        labeler: &str,
    ) -> Result<SubmitOutcome, SessionError> {
        let row = self.cursor.current().ok_or(SessionError::NoCurrentRow)?;
        self.table.set_label(row, score, labeler)?;
        persister::save_csv(self.table.frame_mut(), &self.output_path)?;
        info!(row, score = score.value(), labeler, "row labeled");

        if self.cursor.advance() {
            Ok(SubmitOutcome::Advanced { row: row + 1 })
        } else {
            info!(rows = self.table.height(), "labeling complete");
            Ok(SubmitOutcome::Completed)
        }
    }

    pub fn previous(&mut self) -> bool {
        let moved = self.cursor.retreat();
        debug!(row = ?self.cursor.current(), moved, "previous");
        moved
    }

    pub fn skip(&mut self) -> bool {
        let moved = self.cursor.skip();
        debug!(row = ?self.cursor.current(), moved, "skip");
        moved
    }

    pub fn restart(&mut self) {
        self.cursor.restart();
        debug!("restart");
    }

    /// Jump to the first row without a score. Returns the row, if any.
    pub fn resume(&mut self) -> Option<usize> {
        let row = self.table.first_unlabeled()?;
        self.cursor.jump_to(row);
        debug!(row, "resume at first unlabeled row");
        Some(row)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor.current()
    }

    /// Field/value pairs of the current row.
    pub fn current_row(&self) -> Option<Vec<(String, String)>> {
        let row = self.cursor.current()?;
        self.table.row(row).ok()
    }

    pub fn is_last_row(&self) -> bool {
        self.cursor.is_last()
    }

    /// (labeled rows, total rows)
    pub fn progress(&self) -> (usize, usize) {
        (self.table.labeled_count(), self.table.height())
    }

    pub fn table(&self) -> &LabelTable {
        &self.table
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write the downloadable copy of the labeled table.
    pub fn export(&mut self, path: &Path) -> Result<(), SessionError> {
        persister::export_csv(self.table.frame_mut(), path)?;
        Ok(())
    }
}
