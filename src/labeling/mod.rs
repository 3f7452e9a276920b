//! Labeling module - score domain, row cursor and the labeling session

mod cursor;
mod score;
mod session;

pub use cursor::RowCursor;
pub use score::{EriScore, ScoreError, ScoreRange};
pub use session::{LabelingSession, SessionError, SubmitOutcome};
