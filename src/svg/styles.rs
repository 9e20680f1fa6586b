//! Font metrics and stroke constants for the SVG encoder.

/// Estimated rendered width of `text` in px.
///
/// No font shaping happens at scene time, so plates behind edge labels are
/// sized from an average glyph width per weight.
pub fn estimate_text_width(text: &str, font_size: f64, font_weight: u32) -> f64 {
    let width_ratio = if font_weight >= 800 {
        0.68
    } else if font_weight >= 600 {
        0.6
    } else {
        0.55
    };
    text.chars().count() as f64 * font_size * width_ratio
}

/// Line height as a multiple of the font size
pub const LINE_HEIGHT: f64 = 1.2;

/// Vertical shift that centers a glyph box on its anchor, as a fraction of the font size
pub const BASELINE_SHIFT: f64 = 0.35;

/// Corner radius of edge label plates
pub const PLATE_RADIUS: f64 = 2.0;

/// Stroke widths per element type (in px)
pub struct StrokeWidths;

impl StrokeWidths {
    pub const AXIS: f64 = 1.0;
    pub const TICK: f64 = 1.0;
}

/// Length of tick marks (in px)
pub const TICK_LENGTH: f64 = 5.0;
