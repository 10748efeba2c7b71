use crate::config::Config;
use eframe::egui;

#[derive(Debug)]
pub enum SettingsDialogEvent {
    Save,
    Cancel,
}

pub struct SettingsDialog;

impl SettingsDialog {
    pub fn new() -> Self {
        Self
    }

    /// Edits a draft copy of the config; the caller applies it on `Save`.
    pub fn show(&mut self, ctx: &egui::Context, draft: &mut Config) -> Option<SettingsDialogEvent> {
        let mut event = None;

        egui::Window::new("Settings")
            .default_width(450.0)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("GraphQL Service");
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Endpoint:");
                    ui.add(egui::TextEdit::singleline(&mut draft.endpoint).desired_width(300.0));
                });

                ui.horizontal(|ui| {
                    ui.label("Timeout (s):");
                    ui.add(egui::DragValue::new(&mut draft.request_timeout_secs).clamp_range(1..=600));
                });

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Save & Reconnect").clicked() {
                        event = Some(SettingsDialogEvent::Save);
                    }
                    if ui.button("Cancel").clicked() {
                        event = Some(SettingsDialogEvent::Cancel);
                    }
                });
            });

        event
    }
}
