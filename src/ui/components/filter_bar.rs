use crate::models::FilterSession;
use crate::ui::MUTED_COLOR;
use eframe::egui;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterBarEvent {
    AddFilter(String),
    RemoveFilter(usize),
    SelectColumn(usize, String),
    SetValue(usize, String),
    Apply,
    Clear,
}

pub struct FilterBar;

impl FilterBar {
    pub fn new() -> Self {
        Self
    }

    /// Draws the filter editor. State is read-only here; edits come back as events.
    pub fn show(&mut self, ui: &mut egui::Ui, session: &FilterSession) -> Option<FilterBarEvent> {
        let mut event = None;
        let filters = session.filters.entries();

        // Active filters as removable chips
        if !filters.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for (idx, filter) in filters.iter().enumerate() {
                    egui::Frame::group(ui.style())
                        .rounding(8.0)
                        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(filter.label());
                                if ui.small_button("✖").on_hover_text("Remove this filter").clicked() {
                                    event = Some(FilterBarEvent::RemoveFilter(idx));
                                }
                            });
                        });
                }
            });
            ui.add_space(4.0);
        }

        ui.horizontal(|ui| {
            ui.label("Column Name:");
            egui::ComboBox::from_id_source("add_filter_column")
                .selected_text("(add filter)")
                .width(180.0)
                .show_ui(ui, |ui| {
                    for name in &session.column_names {
                        if ui.selectable_label(false, name.as_str()).clicked() {
                            event = Some(FilterBarEvent::AddFilter(name.clone()));
                        }
                    }
                });

            if session.column_names.is_empty() {
                ui.label(egui::RichText::new("no columns loaded").color(MUTED_COLOR));
            }
        });

        for (idx, filter) in filters.iter().enumerate() {
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_source(("filter_column", filter.id))
                    .selected_text(filter.column.as_str())
                    .width(180.0)
                    .show_ui(ui, |ui| {
                        for name in &session.column_names {
                            if ui.selectable_label(*name == filter.column, name.as_str()).clicked() {
                                event = Some(FilterBarEvent::SelectColumn(idx, name.clone()));
                            }
                        }
                    });

                let mut value = filter.value.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut value)
                        .id_source(("filter_value", filter.id))
                        .hint_text(format!("Row Value ({})", filter.column))
                        .desired_width(200.0),
                );
                if response.changed() {
                    event = Some(FilterBarEvent::SetValue(idx, value));
                }

                let suggestions = session.suggestions.get(&filter.column);
                if session.suggestions.is_loading(&filter.column) {
                    ui.spinner();
                } else if !suggestions.is_empty() {
                    egui::ComboBox::from_id_source(("filter_suggestions", filter.id))
                        .selected_text("▼")
                        .width(160.0)
                        .show_ui(ui, |ui| {
                            for candidate in suggestions {
                                if ui.selectable_label(*candidate == filter.value, candidate.as_str()).clicked() {
                                    event = Some(FilterBarEvent::SetValue(idx, candidate.clone()));
                                }
                            }
                        });
                }
            });
        }

        ui.horizontal(|ui| {
            if ui.button("🔍 Apply Filter").clicked() {
                event = Some(FilterBarEvent::Apply);
            }
            if ui.button("Clear Filters").clicked() {
                event = Some(FilterBarEvent::Clear);
            }

            if !filters.is_empty() {
                ui.label(
                    egui::RichText::new(format!("{} filter(s)", filters.len()))
                        .size(10.0)
                        .color(MUTED_COLOR),
                );
            }
        });

        event
    }
}
