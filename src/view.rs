use eframe::egui::Color32;

use crate::color;
use crate::config::Mode;
use crate::probe::set::ProbeSet;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart view model
// ---------------------------------------------------------------------------

/// One labelled point drawn over the data line.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub row: usize,
    pub position: [f64; 2],
    pub color: Color32,
}

/// Everything the plot needs for one frame, derived from the state alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub x_label: String,
    pub y_label: String,
    pub line: Vec<[f64; 2]>,
    pub line_color: Color32,
    pub markers: Vec<Marker>,
    /// Whether clicks on the chart add probes.
    pub clickable: bool,
}

/// Rebuild the chart from scratch. Probes whose row is not numeric on the
/// current axes get no marker.
pub fn chart_view(state: &AppState) -> ChartView {
    let table = &state.table;
    let cols = table
        .column_index(&state.axes.x)
        .zip(table.column_index(&state.axes.y));
    let point = |row: usize| {
        let (x, y) = cols?;
        Some([table.f64_at(row, x)?, table.f64_at(row, y)?])
    };

    let line = cols.map(|(x, y)| table.points(x, y)).unwrap_or_default();

    let (line_color, markers) = match state.mode {
        Mode::Multi => {
            let markers: Vec<Marker> = state
                .probes
                .indices()
                .iter()
                .enumerate()
                .filter_map(|(pos, &row)| {
                    Some(Marker {
                        label: ProbeSet::label(pos),
                        row,
                        position: point(row)?,
                        color: color::probe_color(pos),
                    })
                })
                .collect();
            (color::BASE_LINE, markers)
        }
        Mode::Single => {
            let markers: Vec<Marker> = state
                .selector
                .index()
                .and_then(|row| {
                    Some(Marker {
                        label: format!("row {row}"),
                        row,
                        position: point(row)?,
                        color: color::HIGHLIGHT,
                    })
                })
                .into_iter()
                .collect();
            (color::SLIDER_LINE, markers)
        }
    };

    ChartView {
        x_label: state.axes.x.clone(),
        y_label: state.axes.y.clone(),
        line,
        line_color,
        markers,
        clickable: state.mode == Mode::Multi && !table.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Table, Value};
    use crate::state::DataSource;

    fn state(mode: Mode) -> AppState {
        let table = Table::new(
            vec!["x".into(), "y".into(), "tag".into()],
            vec![
                vec![Value::Integer(0), Value::Float(0.5), Value::String("a".into())],
                vec![Value::Integer(1), Value::Null, Value::String("b".into())],
                vec![Value::Integer(2), Value::Float(2.5), Value::String("c".into())],
            ],
        )
        .unwrap();
        AppState::new(table, DataSource::Sample, mode)
    }

    #[test]
    fn test_multi_markers_follow_probe_order() {
        let mut s = state(Mode::Multi);
        s.click_at(2.0).unwrap();
        s.click_at(0.0).unwrap();
        let view = chart_view(&s);
        assert_eq!(view.x_label, "x");
        assert_eq!(view.line, vec![[0.0, 0.5], [2.0, 2.5]]);
        let labels: Vec<&str> = view.markers.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["P1", "P2"]);
        assert_eq!(view.markers[0].position, [2.0, 2.5]);
        assert_eq!(view.markers[1].color, color::probe_color(1));
        assert!(view.clickable);
    }

    #[test]
    fn test_marker_skipped_for_non_numeric_row() {
        let mut s = state(Mode::Multi);
        s.click_at(1.0).unwrap();
        s.click_at(2.0).unwrap();
        let view = chart_view(&s);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.markers[0].label, "P2");
    }

    #[test]
    fn test_single_mode_highlights_selected_row() {
        let mut s = state(Mode::Single);
        s.select(2).unwrap();
        let view = chart_view(&s);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.markers[0].row, 2);
        assert_eq!(view.markers[0].color, color::HIGHLIGHT);
        assert!(!view.clickable);
    }

    #[test]
    fn test_text_axis_gives_empty_line() {
        let mut s = state(Mode::Multi);
        s.set_y_column("tag".into());
        assert!(chart_view(&s).line.is_empty());
    }
}
