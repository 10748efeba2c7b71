use crate::graphql::TableRow;
use crate::ui::MUTED_COLOR;
use eframe::egui;

pub struct DataGrid {
    selected_row: Option<usize>,
}

impl DataGrid {
    pub fn new() -> Self {
        Self { selected_row: None }
    }

    pub fn clear_selection(&mut self) {
        self.selected_row = None;
    }

    /// `columns` are the fields the query selected, so every cell was fetched.
    pub fn show(&mut self, ui: &mut egui::Ui, columns: &[String], rows: &[TableRow]) {
        let available_height = ui.available_height();

        egui::ScrollArea::horizontal()
            .id_source("data_grid")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                use egui_extras::{Column, TableBuilder};

                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .vscroll(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::initial(50.0).at_least(40.0).resizable(false)) // Line number column
                    .columns(Column::initial(140.0).at_least(60.0).clip(true), columns.len())
                    .min_scrolled_height(available_height)
                    .header(22.0, |mut header| {
                        header.col(|ui| {
                            ui.strong("#");
                        });
                        for column in columns {
                            header.col(|ui| {
                                ui.strong(column.as_str());
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(18.0, rows.len(), |mut row_ui| {
                            let index = row_ui.index();
                            let row = &rows[index];
                            let is_selected = self.selected_row == Some(index);
                            row_ui.set_selected(is_selected);

                            row_ui.col(|ui| {
                                ui.label(egui::RichText::new(format!("{}", index + 1)).color(MUTED_COLOR));
                            });

                            for column in columns {
                                let (_, response) = row_ui.col(|ui| {
                                    ui.style_mut().wrap = Some(false);
                                    let cell = row.cell(column);
                                    let label = ui.add(egui::Label::new(cell.as_str()).truncate(true));
                                    label.context_menu(|ui| {
                                        if ui.button("Copy Cell Value").clicked() {
                                            ui.output_mut(|o| o.copied_text = cell.clone());
                                            ui.close_menu();
                                        }
                                    });
                                });
                                if response.interact(egui::Sense::click()).clicked() {
                                    self.selected_row = if is_selected { None } else { Some(index) };
                                }
                            }
                        });
                    });
            });
    }
}

