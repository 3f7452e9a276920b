//! Labeled Data Preview
//! Whole-table view with the current row highlighted. Only visible rows are drawn.

use crate::data::LabelTable;
use egui::{Color32, Grid, RichText, ScrollArea};

const ROW_HEIGHT: f32 = 18.0;
const CELL_WIDTH: f32 = 120.0;
const INDEX_WIDTH: f32 = 48.0;
const PREVIEW_HEIGHT: f32 = 320.0;

pub fn show(ui: &mut egui::Ui, table: &LabelTable, current: Option<usize>) {
    let columns = table.column_names();
    let highlight = Color32::from_rgb(100, 149, 237);

    ScrollArea::horizontal()
        .id_salt("preview_horizontal")
        .show(ui, |ui| {
            ui.vertical(|ui| {
                Grid::new("preview_header")
                    .spacing([4.0, 0.0])
                    .show(ui, |ui| {
                        ui.add_sized([INDEX_WIDTH, ROW_HEIGHT], egui::Label::new(""));
                        for name in &columns {
                            ui.add_sized(
                                [CELL_WIDTH, ROW_HEIGHT],
                                egui::Label::new(RichText::new(name).strong()).truncate(),
                            );
                        }
                        ui.end_row();
                    });
                ui.separator();

                ScrollArea::vertical()
                    .id_salt("preview_rows")
                    .max_height(PREVIEW_HEIGHT)
                    .show_rows(ui, ROW_HEIGHT, table.height(), |ui, rows| {
                        Grid::new("preview_body")
                            .spacing([4.0, 0.0])
                            .striped(true)
                            .show(ui, |ui| {
                                for row in rows {
                                    let is_current = current == Some(row);
                                    let style = |text: String| {
                                        let text = RichText::new(text);
                                        if is_current {
                                            text.color(highlight).strong()
                                        } else {
                                            text
                                        }
                                    };

                                    ui.add_sized(
                                        [INDEX_WIDTH, ROW_HEIGHT],
                                        egui::Label::new(style(row.to_string())),
                                    );
                                    for name in &columns {
                                        let value = table.cell(row, name).unwrap_or_default();
                                        ui.add_sized(
                                            [CELL_WIDTH, ROW_HEIGHT],
                                            egui::Label::new(style(value)).truncate(),
                                        );
                                    }
                                    ui.end_row();
                                }
                            });
                    });
            });
        });
}
