//! Control Panel Widget
//! Left side panel with labeler identity, upload and download controls.

use egui::{Color32, RichText};
use std::path::PathBuf;

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Success,
    Error,
}

/// Left side control panel with configuration and file controls.
pub struct ControlPanel {
    pub labeler_name: String,
    pub source_name: Option<String>,
    pub output_path: PathBuf,
    pub status: String,
    pub status_kind: StatusKind,
    pub download_enabled: bool,
    pub is_loading: bool,
    name_dirty: bool,
}

impl ControlPanel {
    pub fn new(labeler_name: String, output_path: PathBuf) -> Self {
        Self {
            labeler_name,
            source_name: None,
            output_path,
            status: "Upload a CSV file to start labeling".to_string(),
            status_kind: StatusKind::Info,
            download_enabled: false,
            is_loading: false,
            name_dirty: false,
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.add_space(5.0);
        ui.label(RichText::new("Configuration").size(18.0).strong());
        ui.add_space(10.0);

        // ===== Labeler =====
        ui.label("Labeler Name");
        let response = ui.text_edit_singleline(&mut self.labeler_name);
        if response.changed() {
            self.name_dirty = true;
        }
        if response.lost_focus() && self.name_dirty {
            self.name_dirty = false;
            action = ControlPanelAction::LabelerChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Upload =====
        ui.label(RichText::new("📁 Upload CSV file").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let name = self
                        .source_name
                        .clone()
                        .unwrap_or_else(|| "No file selected".to_string());
                    ui.label(RichText::new(name).size(12.0).color(
                        if self.source_name.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled_ui(!self.is_loading, |ui| {
                            if ui.button("📂 Browse").clicked() {
                                action = ControlPanelAction::BrowseCsv;
                            }
                        });
                    });
                });
            });
        ui.label(
            RichText::new("or drop a .csv file onto the window")
                .size(11.0)
                .color(Color32::GRAY),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Output =====
        ui.label(RichText::new("💾 Output").size(14.0).strong());
        ui.add_space(5.0);
        ui.label(
            RichText::new(format!("Saving to {}", self.output_path.display()))
                .size(11.0)
                .color(Color32::GRAY),
        );
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.download_enabled, |ui| {
                let button = egui::Button::new(RichText::new("⬇ Download Labeled CSV").size(14.0))
                    .min_size(egui::vec2(200.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Download;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status =====
        if self.is_loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }

        let status_color = match self.status_kind {
            StatusKind::Error => Color32::from_rgb(220, 53, 69),
            StatusKind::Success => Color32::from_rgb(40, 167, 69),
            StatusKind::Info => Color32::GRAY,
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set status line
    pub fn set_status(&mut self, kind: StatusKind, status: &str) {
        self.status_kind = kind;
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    Download,
    LabelerChanged,
}
