use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::view::ChartView;

// ---------------------------------------------------------------------------
// Probe chart (central panel)
// ---------------------------------------------------------------------------

/// Draw the chart and return the data-space X coordinate of a click, if the
/// view accepts clicks and one happened this frame.
pub fn probe_plot(ui: &mut Ui, view: &ChartView, height: f32) -> Option<f64> {
    let response = Plot::new("probe_plot")
        .height(height)
        .x_axis_label(view.x_label.as_str())
        .y_axis_label(view.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = view.line.iter().copied().collect();
            plot_ui.line(Line::new(points).color(view.line_color).width(1.5));

            for marker in &view.markers {
                let [x, y] = marker.position;
                plot_ui.points(
                    Points::new(vec![marker.position])
                        .name(format!("{} (row {})", marker.label, marker.row))
                        .shape(MarkerShape::Circle)
                        .radius(6.0)
                        .filled(true)
                        .color(marker.color),
                );
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(x, y),
                        RichText::new(&marker.label).strong().color(marker.color),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });

    if !view.clickable || !response.response.clicked() {
        return None;
    }
    let screen_pos = response.response.interact_pointer_pos()?;
    Some(response.transform.value_from_position(screen_pos).x)
}
