use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Table;

/// Detail cards per grid row.
const CARDS_PER_ROW: usize = 4;

// ---------------------------------------------------------------------------
// Tabular views
// ---------------------------------------------------------------------------

/// Show a table. With `first_row`, a leading `#` column numbers the rows
/// from that source index.
pub fn data_table(ui: &mut Ui, id: &str, table: &Table, first_row: Option<usize>) {
    let num_cols = table.columns().len() + usize::from(first_row.is_some());

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0), num_cols)
            .vscroll(false)
            .header(20.0, |mut header| {
                if first_row.is_some() {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                }
                for name in table.columns() {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, table.len(), |mut row| {
                    let i = row.index();
                    if let Some(first) = first_row {
                        row.col(|ui| {
                            ui.label(RichText::new((first + i).to_string()).weak());
                        });
                    }
                    for value in &table.rows()[i] {
                        row.col(|ui| {
                            ui.label(value.to_string());
                        });
                    }
                });
            });
    });
}

/// One card per column of a single row: name above, value below.
pub fn detail_cards(ui: &mut Ui, table: &Table, row: usize) {
    let Some(values) = table.row(row) else {
        return;
    };

    egui::Grid::new("detail_cards")
        .num_columns(CARDS_PER_ROW.min(values.len()))
        .spacing([24.0, 12.0])
        .show(ui, |ui: &mut Ui| {
            for (i, (name, value)) in table.columns().iter().zip(values).enumerate() {
                ui.vertical(|ui: &mut Ui| {
                    ui.label(RichText::new(name).weak());
                    ui.label(RichText::new(value.to_string()).size(20.0));
                });
                if (i + 1) % CARDS_PER_ROW == 0 {
                    ui.end_row();
                }
            }
        });
}
