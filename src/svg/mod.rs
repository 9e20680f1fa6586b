//! SVG encoder - converts scenes into SVG documents.
//!
//! Pure string building, no DOM manipulation. The same document feeds the
//! raster encoder.

mod renderer;
mod styles;

pub use renderer::{escape_xml, render_svg};
pub use styles::estimate_text_width;
