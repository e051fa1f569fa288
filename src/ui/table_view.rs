use crate::models::ProteinTable;
use egui_extras::{Column, TableBuilder};
use eframe::egui;

const ROW_HEIGHT: f32 = 22.0;

pub fn render(ui: &mut egui::Ui, table: &ProteinTable) {
    ui.horizontal(|ui| {
        ui.heading("Tableau généré");
        ui.separator();
        ui.label(format!("{} lignes", table.rows.len()));
    });

    ui.separator();

    let goal_columns = table.goal_columns();
    let available_height = ui.available_height();

    // Column state is keyed by id, so a different column count needs its own id.
    ui.push_id(goal_columns, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(100.0).at_least(80.0))
            .columns(Column::remainder().at_least(160.0), goal_columns)
            .max_scroll_height(available_height)
            .header(25.0, |mut header| {
                for title in &table.header {
                    header.col(|ui| {
                        ui.strong(title.as_str());
                    });
                }
            })
            .body(|mut body| {
                for row in &table.rows {
                    body.row(ROW_HEIGHT, |mut line| {
                        line.col(|ui| {
                            ui.label(row.weight.to_string());
                        });
                        for range in &row.ranges {
                            line.col(|ui| {
                                ui.label(range.as_str());
                            });
                        }
                    });
                }
            });
    });
}
