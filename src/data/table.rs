//! Label Table Module
//! In-memory table under review, augmented with the label columns.

use crate::labeling::EriScore;
use polars::prelude::*;
use thiserror::Error;

/// Column holding the assigned score.
pub const SCORE_COLUMN: &str = "ERI_Score";
/// Column holding the labeler identity.
pub const LABELER_COLUMN: &str = "Labeler";

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Row {row} is out of range (table has {height} rows)")]
    RowOutOfRange { row: usize, height: usize },
    #[error("Column '{column}' could not be read as {expected}: {source}")]
    ColumnType {
        column: String,
        expected: &'static str,
        source: PolarsError,
    },
}

/// A loaded CSV plus the `ERI_Score` and `Labeler` columns.
///
/// `ERI_Score` is always `Int64` and `Labeler` always `String`; unlabeled
/// rows hold nulls in both.
#[derive(Debug, Clone)]
pub struct LabelTable {
    df: DataFrame,
}

impl LabelTable {
    /// Wrap a freshly parsed frame, adding or coercing the label columns.
    pub fn from_frame(mut df: DataFrame) -> Result<Self, TableError> {
        Self::ensure_column(&mut df, SCORE_COLUMN, DataType::Int64, "integers")?;
        Self::ensure_column(&mut df, LABELER_COLUMN, DataType::String, "text")?;
        Ok(Self { df })
    }

    fn ensure_column(
        df: &mut DataFrame,
        name: &str,
        dtype: DataType,
        expected: &'static str,
    ) -> Result<(), TableError> {
        let height = df.height();
        let column = match df.column(name) {
            Ok(existing) if existing.dtype() == &dtype => return Ok(()),
            Ok(existing) => {
                if dtype.is_integer() && existing.dtype().is_float() {
                    Self::check_integral(existing, name, expected)?;
                }
                existing
                    .strict_cast(&dtype)
                    .map_err(|source| TableError::ColumnType {
                        column: name.to_string(),
                        expected,
                        source,
                    })?
            }
            Err(_) => Column::full_null(name.into(), height, &dtype),
        };
        df.with_column(column)?;
        Ok(())
    }

    /// Float to int casts truncate, so reject any value with a fractional part.
    fn check_integral(
        column: &Column,
        name: &str,
        expected: &'static str,
    ) -> Result<(), TableError> {
        let floats = column.cast(&DataType::Float64)?;
        let fractional = floats
            .f64()?
            .into_iter()
            .enumerate()
            .find_map(|(i, v)| v.filter(|v| v.fract() != 0.0).map(|v| (i, v)));

        if let Some((row, value)) = fractional {
            return Err(TableError::ColumnType {
                column: name.to_string(),
                expected,
                source: PolarsError::ComputeError(
                    format!("row {row} holds non-integer value {value}").into(),
                ),
            });
        }
        Ok(())
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Ordered (field, value) pairs of one row, formatted for display.
    pub fn row(&self, row: usize) -> Result<Vec<(String, String)>, TableError> {
        self.check_row(row)?;
        Ok(self
            .df
            .get_columns()
            .iter()
            .map(|col| {
                let value = col
                    .get(row)
                    .map(|v| display_value(&v))
                    .unwrap_or_default();
                (col.name().to_string(), value)
            })
            .collect())
    }

    /// Display value of a single cell. `None` for an unknown column or a row
    /// past the end of the table.
    pub fn cell(&self, row: usize, column: &str) -> Option<String> {
        let value = self.df.column(column).ok()?.get(row).ok()?;
        Some(display_value(&value))
    }

    /// Write the score/labeler pair of one row. No other cell changes.
    pub fn set_label(
        &mut self,
        row: usize,
        score: EriScore,
        labeler: &str,
    ) -> Result<(), TableError> {
        self.check_row(row)?;

        let scores: Int64Chunked = self
            .df
            .column(SCORE_COLUMN)?
            .i64()?
            .into_iter()
            .enumerate()
            .map(|(i, v)| if i == row { Some(score.value()) } else { v })
            .collect();
        let labelers: StringChunked = self
            .df
            .column(LABELER_COLUMN)?
            .str()?
            .into_iter()
            .enumerate()
            .map(|(i, v)| if i == row { Some(labeler) } else { v })
            .collect();

        self.df
            .with_column(scores.with_name(SCORE_COLUMN.into()).into_series())?;
        self.df
            .with_column(labelers.with_name(LABELER_COLUMN.into()).into_series())?;
        Ok(())
    }

    /// Score of a row. `None` when unlabeled or out of range.
    pub fn score_at(&self, row: usize) -> Option<i64> {
        self.df.column(SCORE_COLUMN).ok()?.i64().ok()?.get(row)
    }

    /// Labeler of a row. `None` when unlabeled or out of range.
    pub fn labeler_at(&self, row: usize) -> Option<String> {
        self.df
            .column(LABELER_COLUMN)
            .ok()?
            .str()
            .ok()?
            .get(row)
            .map(str::to_string)
    }

    /// Number of rows with a score.
    pub fn labeled_count(&self) -> usize {
        self.df
            .column(SCORE_COLUMN)
            .map(|col| col.len() - col.null_count())
            .unwrap_or(0)
    }

    pub fn first_unlabeled(&self) -> Option<usize> {
        self.df
            .column(SCORE_COLUMN)
            .ok()?
            .i64()
            .ok()?
            .into_iter()
            .position(|v| v.is_none())
    }

    pub fn frame_mut(&mut self) -> &mut DataFrame {
        &mut self.df
    }

    fn check_row(&self, row: usize) -> Result<(), TableError> {
        let height = self.df.height();
        if row >= height {
            return Err(TableError::RowOutOfRange { row, height });
        }
        Ok(())
    }
}

fn display_value(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeling::ScoreRange;

    fn sample_table() -> LabelTable {
        let df = df!(
            "col1" => [1i64, 2, 3],
            "text" => ["a", "b", "c"]
        )
        .unwrap();
        LabelTable::from_frame(df).unwrap()
    }

    #[test]
    fn test_label_columns_added() {
        let table = sample_table();
        assert_eq!(
            table.column_names(),
            vec!["col1", "text", SCORE_COLUMN, LABELER_COLUMN]
        );
        assert_eq!(table.labeled_count(), 0);
        assert_eq!(table.first_unlabeled(), Some(0));
    }

    #[test]
    fn test_set_label_touches_one_row() {
        let mut table = sample_table();
        let score = ScoreRange::default().score(5).unwrap();
        table.set_label(1, score, "alice").unwrap();

        assert_eq!(table.score_at(1), Some(5));
        assert_eq!(table.labeler_at(1).as_deref(), Some("alice"));
        assert_eq!(table.score_at(0), None);
        assert_eq!(table.labeler_at(2), None);
        assert_eq!(table.cell(1, "text").as_deref(), Some("b"));
        assert_eq!(table.labeled_count(), 1);
        assert_eq!(table.height(), 3);
    }

    #[test]
    fn test_set_label_out_of_range() {
        let mut table = sample_table();
        let score = ScoreRange::default().score(3).unwrap();
        assert!(matches!(
            table.set_label(3, score, "bob"),
            Err(TableError::RowOutOfRange { row: 3, height: 3 })
        ));
    }

    #[test]
    fn test_first_unlabeled_skips_labeled_rows() {
        let mut table = sample_table();
        let range = ScoreRange::default();
        table.set_label(0, range.score(1).unwrap(), "a").unwrap();
        table.set_label(1, range.score(2).unwrap(), "a").unwrap();
        assert_eq!(table.first_unlabeled(), Some(2));
        table.set_label(2, range.score(3).unwrap(), "a").unwrap();
        assert_eq!(table.first_unlabeled(), None);
    }

    #[test]
    fn test_row_display_pairs() {
        let mut table = sample_table();
        table
            .set_label(0, ScoreRange::default().score(6).unwrap(), "carol")
            .unwrap();
        let row = table.row(0).unwrap();
        assert_eq!(row[0], ("col1".to_string(), "1".to_string()));
        assert_eq!(row[1], ("text".to_string(), "a".to_string()));
        assert_eq!(row[2], (SCORE_COLUMN.to_string(), "6".to_string()));
        assert_eq!(row[3], (LABELER_COLUMN.to_string(), "carol".to_string()));

        let unlabeled = table.row(1).unwrap();
        assert_eq!(unlabeled[2].1, "");
        assert!(table.row(3).is_err());
    }

    #[test]
    fn test_existing_score_column_is_kept() {
        let df = df!(
            "col1" => [1i64, 2],
            SCORE_COLUMN => [Some(4i64), None]
        )
        .unwrap();
        let table = LabelTable::from_frame(df).unwrap();
        assert_eq!(table.column_names().len(), 3);
        assert_eq!(table.score_at(0), Some(4));
        assert_eq!(table.first_unlabeled(), Some(1));
    }

    #[test]
    fn test_fractional_score_column_rejected() {
        let df = df!(
            "id" => [1i64, 2],
            SCORE_COLUMN => [Some(4.5f64), None]
        )
        .unwrap();
        assert!(matches!(
            LabelTable::from_frame(df),
            Err(TableError::ColumnType { .. })
        ));
    }

    #[test]
    fn test_whole_float_scores_become_integers() {
        let df = df!(
            "id" => [1i64, 2],
            SCORE_COLUMN => [Some(5.0f64), None]
        )
        .unwrap();
        let table = LabelTable::from_frame(df).unwrap();
        assert_eq!(table.score_at(0), Some(5));
        assert_eq!(table.score_at(1), None);
    }

    #[test]
    fn test_accessors_past_end_return_none() {
        let mut table = sample_table();
        table
            .set_label(2, ScoreRange::default().score(2).unwrap(), "gina")
            .unwrap();
        assert_eq!(table.score_at(3), None);
        assert_eq!(table.labeler_at(3), None);
        assert_eq!(table.cell(3, "text"), None);
        assert_eq!(table.cell(0, "missing"), None);
    }

    #[test]
    fn test_quoted_text_displayed_verbatim() {
        let df = df!("text" => ["\"quoted\"", "plain"]).unwrap();
        let table = LabelTable::from_frame(df).unwrap();
        assert_eq!(table.cell(0, "text").as_deref(), Some("\"quoted\""));
        assert_eq!(table.cell(1, "text").as_deref(), Some("plain"));
    }

    #[test]
    fn test_non_integer_score_column_rejected() {
        let df = df!(
            "col1" => [1i64, 2],
            SCORE_COLUMN => ["high", "low"]
        )
        .unwrap();
        assert!(matches!(
            LabelTable::from_frame(df),
            Err(TableError::ColumnType { .. })
        ));
    }
}
