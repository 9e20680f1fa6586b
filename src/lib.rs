//! archdiagram - Render a deployment-topology architecture diagram to PNG and SVG
//!
//! A diagram is a fixed set of positioned, labeled nodes joined by labeled
//! directed edges. Rendering first builds an immutable scene graph (edges
//! beneath nodes), then hands it to one encoder per requested format.
//!
//! # Example
//!
//! ```rust,no_run
//! use archdiagram::{render, default_diagram, CanvasConfig};
//!
//! let report = render(
//!     &default_diagram(),
//!     &CanvasConfig::default(),
//!     &["architecture.png", "architecture.svg"],
//! )
//! .unwrap();
//! assert_eq!(report.artifacts.len(), 2);
//! ```
//!
//! To inspect a layout without touching the filesystem:
//!
//! ```rust
//! use archdiagram::{build_scene, default_diagram, CanvasConfig, CommandKind};
//!
//! let scene = build_scene(&default_diagram(), &CanvasConfig::default()).unwrap();
//! assert_eq!(scene.count(CommandKind::NodeShape), 7);
//! let svg = archdiagram::svg::render_svg(&scene);
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod color;
pub mod error;
pub mod output;
pub mod raster;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod topology;
pub mod types;

pub use color::Color;
pub use error::RenderError;
pub use output::{render, target_paths, OutputFormat, RejectedTarget, RenderReport, RenderedArtifact};
pub use scene::{build_scene, CommandKind, DrawCommand, Scene};
pub use topology::{default_diagram, load_topology, parse_topology, DEFAULT_STEM};
pub use types::*;

use std::path::Path;

/// Render the default topology to `<dir>/architecture.png` and `<dir>/architecture.svg`.
pub fn render_default(dir: &Path) -> Result<Vec<RenderedArtifact>, RenderError> {
    let targets = target_paths(dir, DEFAULT_STEM, &OutputFormat::ALL);
    render(&default_diagram(), &CanvasConfig::default(), &targets)?.into_result()
}
