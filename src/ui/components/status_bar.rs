use crate::ui::{ERROR_COLOR, MUTED_COLOR};
use eframe::egui;

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        status_message: &str,
        is_error: bool,
        endpoint: &str,
        row_count: Option<usize>,
    ) {
        ui.horizontal(|ui| {
            if is_error {
                ui.label(egui::RichText::new(status_message).color(ERROR_COLOR));
            } else {
                ui.label(status_message);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(endpoint).color(MUTED_COLOR));
                if let Some(count) = row_count {
                    ui.separator();
                    ui.label(format!("{} rows", count));
                }
            });
        });
    }
}
