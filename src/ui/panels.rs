use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::Mode;
use crate::data::export::DEFAULT_EXPORT_NAME;
use crate::probe::set::ProbeSetState;
use crate::state::{AppState, DataSource};

// ---------------------------------------------------------------------------
// Left side panel – data, axes and probe controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Data");
            ui.separator();
            match &state.source {
                DataSource::Sample => {
                    ui.label(RichText::new("Showing sample data").italics());
                }
                DataSource::File(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    ui.label(name).on_hover_text(path.display().to_string());
                }
            }
            if ui.button("Open table…").clicked() {
                open_file_dialog(state);
            }
            ui.add_space(8.0);

            axis_pickers(ui, state);
            ui.add_space(8.0);

            match state.mode {
                Mode::Multi => probe_controls(ui, state),
                Mode::Single => slider_controls(ui, state),
            }
        });
}

fn axis_pickers(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Axes");
    ui.separator();

    let columns = state.table.columns().to_vec();
    let current_x = state.axes.x.clone();
    let current_y = state.axes.y.clone();

    ui.strong("X axis");
    egui::ComboBox::from_id_salt("x_axis")
        .selected_text(&current_x)
        .show_ui(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui.selectable_label(current_x == *col, col).clicked() {
                    state.set_x_column(col.clone());
                }
            }
        });

    ui.strong("Y axis");
    egui::ComboBox::from_id_salt("y_axis")
        .selected_text(&current_y)
        .show_ui(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui.selectable_label(current_y == *col, col).clicked() {
                    state.set_y_column(col.clone());
                }
            }
        });
}

fn probe_controls(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Probes");
    ui.separator();
    ui.label(format!("{} probes", state.probes.len()));

    let populated = state.probes.state() == ProbeSetState::Populated;
    ui.add_enabled_ui(populated, |ui: &mut Ui| {
        if ui.button("Remove all probes").clicked() {
            state.reset_probes();
        }
        if ui.button("Export probes…").clicked() {
            save_file_dialog(state);
        }
    });
}

fn slider_controls(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Probe position");
    ui.separator();

    let (Some(max), Some(mut index)) = (state.selector.max_index(), state.selector.index()) else {
        ui.label("No rows to probe.");
        return;
    };
    if ui
        .add(egui::Slider::new(&mut index, 0..=max).text("row"))
        .changed()
    {
        if let Err(e) = state.select(index) {
            log::warn!("Ignoring slider value: {e}");
        }
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Neighbours");
        ui.add(egui::DragValue::new(&mut state.radius).range(0..=1000));
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.mode == Mode::Multi && !state.probes.is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export probes…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for mode in [Mode::Multi, Mode::Single] {
            if ui
                .selectable_label(state.mode == mode, mode.label())
                .clicked()
            {
                state.mode = mode;
            }
        }

        ui.separator();

        ui.label(format!(
            "{} rows, {} columns",
            state.table.len(),
            state.table.columns().len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open table")
        .add_filter("Supported files", &["csv", "txt", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv", "txt"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        // Errors are already logged and put in the status line.
        if let Err(e) = state.load_file(&path) {
            log::debug!("Keeping current table after failed open: {e:#}");
        }
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export probes")
        .set_file_name(DEFAULT_EXPORT_NAME)
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_probes(&path) {
            log::debug!("Export dialog finished with error: {e}");
        }
    }
}
