use eframe::egui::{self, Ui};

use crate::config::Mode;
use crate::state::AppState;
use crate::ui::{panels, plot, table};
use crate::view;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DataProbeApp {
    pub state: AppState,
}

impl DataProbeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DataProbeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: data, axes, probes ----
        egui::SidePanel::left("control_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart and probed rows ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart = view::chart_view(&self.state);
            let height = ui.available_height() * 0.6;
            if let Some(x) = plot::probe_plot(ui, &chart, height) {
                if let Err(e) = self.state.click_at(x) {
                    log::warn!("Click at x = {x} ignored: {e}");
                }
            }
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.mode {
                    Mode::Multi => probe_rows(ui, &self.state),
                    Mode::Single => selected_row(ui, &self.state),
                });
        });
    }
}

fn probe_rows(ui: &mut Ui, state: &AppState) {
    if state.probes.is_empty() {
        ui.label("Click the chart to add probes.");
        return;
    }
    ui.heading("Probed rows");
    table::data_table(ui, "probed_rows", &state.probed_table(), None);
}

fn selected_row(ui: &mut Ui, state: &AppState) {
    let Some(index) = state.selector.index() else {
        ui.label("The table has no rows.");
        return;
    };
    ui.heading(format!("Selected row (index {index})"));
    table::detail_cards(ui, &state.table, index);

    ui.add_space(8.0);
    egui::CollapsingHeader::new("Neighbouring rows")
        .default_open(false)
        .show(ui, |ui| {
            if let Some((first, rows)) = state.neighborhood() {
                table::data_table(ui, "neighbour_rows", &rows, Some(first));
            }
        });
}
