//! Row Viewer Widget
//! Shows the current row and the scoring form.

use crate::labeling::{LabelingSession, ScoreRange};
use egui::{Color32, Grid, RichText};

/// Current-row display plus score slider and navigation.
pub struct RowViewer {
    range: ScoreRange,
    default_score: i64,
    score: i64,
}

impl RowViewer {
    pub fn new(range: ScoreRange, default_score: i64) -> Self {
        let score = range.initial_value(default_score);
        Self {
            range,
            default_score,
            score,
        }
    }

    pub fn range(&self) -> ScoreRange {
        self.range
    }

    /// Put the slider back to its starting value for the next row.
    pub fn reset_score(&mut self) {
        self.score = self.range.initial_value(self.default_score);
    }

    pub fn show(&mut self, ui: &mut egui::Ui, session: &LabelingSession) -> RowViewerAction {
        let mut action = RowViewerAction::None;
        let (labeled, total) = session.progress();

        let Some(index) = session.current_index() else {
            ui.label("No more rows to label.");
            if ui.button("Restart").clicked() {
                action = RowViewerAction::Restart;
            }
            return action;
        };

        ui.label(RichText::new(format!("Labeling Row {} of {}", index + 1, total)).strong());
        let fraction = if total == 0 {
            0.0
        } else {
            labeled as f32 / total as f32
        };
        ui.add(egui::ProgressBar::new(fraction).text(format!("{labeled} / {total} labeled")));
        ui.add_space(10.0);

        if let Some(fields) = session.current_row() {
            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    Grid::new("current_row")
                        .num_columns(2)
                        .striped(true)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            for (field, value) in &fields {
                                ui.label(RichText::new(field).strong());
                                ui.label(value);
                                ui.end_row();
                            }
                        });
                });
        }

        if let Some(score) = session.table().score_at(index) {
            let labeler = session.table().labeler_at(index).unwrap_or_default();
            ui.label(
                RichText::new(format!("Already labeled: {score} by {labeler}"))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }

        ui.add_space(10.0);

        // ===== Labeling form =====
        ui.group(|ui| {
            ui.add(
                egui::Slider::new(&mut self.score, self.range.min()..=self.range.max())
                    .text(self.range.label()),
            );
            ui.add_space(5.0);
            let caption = if session.is_last_row() {
                "Save & Finish"
            } else {
                "Save & Next"
            };
            let button = egui::Button::new(RichText::new(caption).size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(button).clicked() {
                action = RowViewerAction::Submit(self.score);
            }
        });

        ui.add_space(10.0);

        // ===== Navigation =====
        ui.columns(3, |cols| {
            if cols[0].button("Previous").clicked() {
                action = RowViewerAction::Previous;
            }
            if cols[1].button("Next (Skip)").clicked() {
                action = RowViewerAction::Skip;
            }
            if cols[2].button("Resume at First Unlabeled").clicked() {
                action = RowViewerAction::Resume;
            }
        });

        action
    }
}

/// Actions triggered by the row viewer
#[derive(Debug, Clone, PartialEq)]
pub enum RowViewerAction {
    None,
    Submit(i64),
    Previous,
    Skip,
    Restart,
    Resume,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_score_returns_to_default() {
        let mut viewer = RowViewer::new(ScoreRange::default(), 4);
        viewer.score = 7;
        viewer.reset_score();
        assert_eq!(viewer.score, 4);
    }

    #[test]
    fn test_out_of_range_default_uses_midpoint() {
        let viewer = RowViewer::new(ScoreRange::new(0, 4).unwrap(), 10);
        assert_eq!(viewer.score, 2);
    }
}
