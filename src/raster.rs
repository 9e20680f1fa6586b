//! Raster encoder - rasterizes the SVG encoding of a scene into PNG bytes.

use crate::error::RenderError;
use crate::scene::Scene;
use crate::svg::render_svg;
use resvg::tiny_skia;
use resvg::usvg;
use tracing::debug;

/// Render a scene to an in-memory PNG of the scene's pixel size.
pub fn render_png(scene: &Scene) -> Result<Vec<u8>, RenderError> {
    let svg = render_svg(scene);

    let mut opt = usvg::Options::default();
    opt.font_family = primary_font(&scene.font_family);
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(&svg, &opt).map_err(|e| RenderError::Rasterize(e.to_string()))?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        RenderError::Rasterize(format!(
            "cannot allocate a {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| RenderError::Rasterize(e.to_string()))?;
    debug!(
        width = size.width(),
        height = size.height(),
        bytes = png.len(),
        "rasterized scene"
    );
    Ok(png)
}

/// First family of a CSS font stack
fn primary_font(fonts: &str) -> String {
    fonts
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\''))
        .find(|s| !s.is_empty())
        .unwrap_or("sans-serif")
        .to_string()
}
