//! ERI Labeling Tool Main Application
//! Main window with control panel, labeling form and data preview.

use crate::config::LabelerConfig;
use crate::data::{DataLoader, LabelTable};
use crate::gui::{
    table_preview, ControlPanel, ControlPanelAction, RowViewer, RowViewerAction, StatusKind,
};
use crate::labeling::{LabelingSession, ScoreRange, SubmitOutcome};
use egui::{RichText, SidePanel};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{error, info, warn};

/// Where an upload comes from.
enum UploadSource {
    Path(PathBuf),
    Bytes { name: String, bytes: Vec<u8> },
}

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete { table: LabelTable, source: String },
    Error(String),
}

/// Main application window.
pub struct LabelerApp {
    config: LabelerConfig,
    config_path: Option<PathBuf>,
    session: Option<LabelingSession>,
    control_panel: ControlPanel,
    row_viewer: RowViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl LabelerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: LabelerConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        let range = config.score_range().unwrap_or_else(|e| {
            warn!(error = %e, "invalid score range, using default");
            ScoreRange::default()
        });
        Self {
            control_panel: ControlPanel::new(
                config.labeler_name.clone(),
                config.output_path.clone(),
            ),
            row_viewer: RowViewer::new(range, config.default_score),
            config,
            config_path,
            session: None,
            load_rx: None,
            is_loading: false,
        }
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_load(UploadSource::Path(path));
        }
    }

    /// Pick up a .csv dropped onto the window
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().find(|f| {
            let name = f
                .path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| f.name.clone());
            name.to_ascii_lowercase().ends_with(".csv")
        }) else {
            return;
        };

        match (file.path, file.bytes) {
            (Some(path), _) => self.start_load(UploadSource::Path(path)),
            (None, Some(bytes)) => self.start_load(UploadSource::Bytes {
                name: file.name,
                bytes: bytes.to_vec(),
            }),
            (None, None) => {
                self.control_panel.set_status(
                    StatusKind::Error,
                    "Error loading CSV: dropped file has no data",
                );
            }
        }
    }

    /// Parse the upload on a background thread
    fn start_load(&mut self, source: UploadSource) {
        if self.is_loading {
            return; // Already loading
        }

        self.is_loading = true;
        self.control_panel.is_loading = true;
        self.control_panel
            .set_status(StatusKind::Info, "Loading CSV file...");

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress("Parsing CSV file...".to_string()));

            let (name, result) = match source {
                UploadSource::Path(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| path.display().to_string());
                    (name, DataLoader::load_csv(&path))
                }
                UploadSource::Bytes { name, bytes } => (name, DataLoader::load_csv_bytes(bytes)),
            };

            let message = match result {
                Ok(table) => LoadResult::Complete { table, source: name },
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(message);
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_status(StatusKind::Info, &status);
                    }
                    LoadResult::Complete { table, source } => {
                        let status = format!(
                            "Loaded {} rows, {} columns",
                            table.height(),
                            table.column_names().len()
                        );
                        info!(source = %source, rows = table.height(), "upload ready");
                        self.session = Some(LabelingSession::new(
                            table,
                            self.config.output_path.clone(),
                        ));
                        self.row_viewer.reset_score();
                        self.control_panel.source_name = Some(source);
                        self.control_panel.download_enabled = true;
                        self.control_panel.set_status(StatusKind::Success, &status);
                        self.finish_loading();
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(e) => {
                        error!(error = %e, "failed to load csv");
                        self.control_panel
                            .set_status(StatusKind::Error, &format!("Error loading CSV: {e}"));
                        self.finish_loading();
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    fn finish_loading(&mut self) {
        self.is_loading = false;
        self.control_panel.is_loading = false;
    }

    /// Label the current row with the slider value
    fn handle_submit(&mut self, value: i64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let score = match self.row_viewer.range().score(value) {
            Ok(score) => score,
            Err(e) => {
                self.control_panel.set_status(StatusKind::Error, &e.to_string());
                return;
            }
        };

        let labeler = self.control_panel.labeler_name.clone();
        let saved_to = session.output_path().display().to_string();
        match session.submit(score, &labeler) {
            Ok(SubmitOutcome::Advanced { row }) => {
                self.row_viewer.reset_score();
                self.control_panel.set_status(
                    StatusKind::Success,
                    &format!("Saved results to {saved_to}, now on row {}", row + 1),
                );
            }
            Ok(SubmitOutcome::Completed) => {
                self.row_viewer.reset_score();
                self.control_panel.set_status(
                    StatusKind::Success,
                    &format!("Saved results to {saved_to}. Labeling Complete!"),
                );
            }
            Err(e) => {
                error!(error = %e, "failed to save labels");
                self.control_panel
                    .set_status(StatusKind::Error, &format!("Error saving data: {e}"));
            }
        }
    }

    fn handle_row_action(&mut self, action: RowViewerAction) {
        if let RowViewerAction::Submit(value) = action {
            self.handle_submit(value);
            return;
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        match action {
            RowViewerAction::Previous => {
                session.previous();
            }
            RowViewerAction::Skip => {
                session.skip();
            }
            RowViewerAction::Restart => session.restart(),
            RowViewerAction::Resume => {
                if session.resume().is_none() {
                    self.control_panel
                        .set_status(StatusKind::Info, "All rows are labeled");
                }
            }
            RowViewerAction::Submit(_) | RowViewerAction::None => {}
        }
    }

    /// Save the labeled table to a location chosen by the user
    fn handle_download(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(self.config.download_file_name.clone())
            .save_file()
        else {
            return; // User cancelled
        };

        match session.export(&path) {
            Ok(()) => self.control_panel.set_status(
                StatusKind::Success,
                &format!("Downloaded labeled CSV to {}", path.display()),
            ),
            Err(e) => {
                error!(error = %e, "download failed");
                self.control_panel
                    .set_status(StatusKind::Error, &format!("Error saving data: {e}"));
            }
        }
    }

    /// Remember the labeler name across runs
    fn handle_labeler_changed(&mut self) {
        self.config.labeler_name = self.control_panel.labeler_name.clone();
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = self.config.save(path) {
            warn!(path = %path.display(), error = %e, "failed to save config");
        }
    }
}

impl eframe::App for LabelerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();
        self.handle_dropped_files(ctx);

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui);

                match action {
                    ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                    ControlPanelAction::Download => self.handle_download(),
                    ControlPanelAction::LabelerChanged => self.handle_labeler_changed(),
                    ControlPanelAction::None => {}
                }
            });

        // Central panel - labeling form and preview
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("main_scroll")
                    .show(ui, |ui| {
                        ui.heading("ERI Labeling Tool");
                        ui.add_space(10.0);

                        let Some(session) = &self.session else {
                            ui.label(
                                RichText::new("Upload a CSV file to start labeling.").size(16.0),
                            );
                            return RowViewerAction::None;
                        };

                        let action = self.row_viewer.show(ui, session);

                        ui.add_space(15.0);
                        ui.separator();
                        ui.label(RichText::new("Labeled Data Preview").size(16.0).strong());
                        ui.add_space(5.0);
                        table_preview::show(ui, session.table(), session.current_index());

                        action
                    })
                    .inner
            })
            .inner;

        self.handle_row_action(action);
    }
}
