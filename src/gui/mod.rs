//! GUI module - User interface components

mod app;
mod control_panel;
mod row_viewer;
mod table_preview;

pub use app::LabelerApp;
pub use control_panel::{ControlPanel, ControlPanelAction, StatusKind};
pub use row_viewer::{RowViewer, RowViewerAction};
