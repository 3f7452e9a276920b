//! Row Cursor Module
//! Tracks the row currently presented for labeling.

/// Index of the current row, bounded to `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowCursor {
    position: usize,
    len: usize,
}

impl RowCursor {
    pub fn new(len: usize) -> Self {
        Self { position: 0, len }
    }

    /// Current row, or `None` when there are no rows.
    pub fn current(&self) -> Option<usize> {
        (self.position < self.len).then_some(self.position)
    }

    pub fn is_last(&self) -> bool {
        self.len > 0 && self.position == self.len - 1
    }

    /// Move to the next row. Returns false on the last row.
    pub fn advance(&mut self) -> bool {
        if self.position + 1 < self.len {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous row. Returns false on the first row.
    pub fn retreat(&mut self) -> bool {
        if self.position > 0 && self.len > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Move forward without a submission.
    pub fn skip(&mut self) -> bool {
        self.advance()
    }

    pub fn restart(&mut self) {
        self.position = 0;
    }

    pub fn jump_to(&mut self, row: usize) -> bool {
        if row < self.len {
            self.position = row;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cursor_has_no_row() {
        let mut cursor = RowCursor::new(0);
        assert_eq!(cursor.current(), None);
        assert!(!cursor.advance());
        assert!(!cursor.retreat());
        assert!(!cursor.is_last());
    }

    #[test]
    fn test_advance_stops_at_last_row() {
        let mut cursor = RowCursor::new(3);
        assert!(cursor.advance());
        assert!(cursor.advance());
        assert!(cursor.is_last());
        assert!(!cursor.advance());
        assert_eq!(cursor.current(), Some(2));
    }

    #[test]
    fn test_retreat_stops_at_first_row() {
        let mut cursor = RowCursor::new(3);
        assert!(!cursor.retreat());
        cursor.skip();
        assert!(cursor.retreat());
        assert_eq!(cursor.current(), Some(0));
    }

    #[test]
    fn test_restart_and_jump() {
        let mut cursor = RowCursor::new(5);
        assert!(cursor.jump_to(4));
        assert!(!cursor.jump_to(5));
        assert_eq!(cursor.current(), Some(4));
        cursor.restart();
        assert_eq!(cursor.current(), Some(0));
    }
}
