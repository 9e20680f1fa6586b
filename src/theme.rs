//! Default palette and typography for architecture diagrams.
//!
//! Warm paper background, dark teal ink, teal accents on edge labels.

use crate::color::Color;

/// Named colors used by the default canvas and styles
pub struct Palette;

impl Palette {
    /// Page background
    pub const PAPER: Color = Color::rgb(0xF3, 0xF3, 0xEE);
    /// Text and node outlines
    pub const INK: Color = Color::rgb(0x13, 0x34, 0x3B);
    /// Edge lines and arrowheads
    pub const CONNECTOR: Color = Color::rgb(0x33, 0x33, 0x33);
    /// Plate behind edge labels
    pub const LABEL_PLATE: Color = Color::rgba(243, 243, 238, 0.9);
    /// Border of edge label plates
    pub const LABEL_BORDER: Color = Color::rgb(0x21, 0x80, 0x8D);
    /// Axis lines and tick labels, when axes are shown
    pub const AXIS: Color = Color::rgb(0x99, 0x99, 0x99);

    /// Node fills, in the order the default topology uses them
    pub const SERIES: [Color; 7] = [
        Color::rgb(0x1F, 0xB8, 0xCD),
        Color::rgb(0xDB, 0x45, 0x45),
        Color::rgb(0x2E, 0x8B, 0x57),
        Color::rgb(0x5D, 0x87, 0x8F),
        Color::rgb(0xD2, 0xBA, 0x4C),
        Color::rgb(0xB4, 0x41, 0x3C),
        Color::rgb(0x96, 0x43, 0x25),
    ];
}

/// Font stacks
pub struct Fonts;

impl Fonts {
    pub const BODY: &'static str = "Open Sans, Verdana, Arial, sans-serif";
    pub const NODE_LABEL: &'static str = "Arial Black, Arial, sans-serif";
}

/// Fixed font sizes (in px)
pub struct FontSizes;

impl FontSizes {
    pub const TITLE: f64 = 17.0;
    pub const NODE_LABEL: f64 = 11.0;
    pub const EDGE_LABEL: f64 = 10.0;
    pub const TICK: f64 = 10.0;
}
