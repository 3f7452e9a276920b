//! Data module - CSV loading, label table and persistence

mod loader;
pub mod persister;
mod table;

pub use loader::{DataLoader, LoaderError};
pub use persister::PersistError;
pub use table::{LabelTable, TableError, LABELER_COLUMN, SCORE_COLUMN};
