use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Marker colours
// ---------------------------------------------------------------------------

/// Hue step between consecutive probes (golden angle), so adding a probe
/// never changes the colour of the earlier ones.
const HUE_STEP: f32 = 137.508;

/// Faint line behind the probe markers.
pub const BASE_LINE: Color32 = Color32::from_rgba_premultiplied(45, 45, 45, 77);

/// Line colour in slider mode.
pub const SLIDER_LINE: Color32 = Color32::from_rgb(65, 105, 225);

/// The single slider probe.
pub const HIGHLIGHT: Color32 = Color32::from_rgb(220, 30, 30);

/// Colour of the probe at `position` (0-based) in the probe set.
pub fn probe_color(position: usize) -> Color32 {
    let hue = (position as f32 * HUE_STEP) % 360.0;
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
