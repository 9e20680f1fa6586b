//! Output formats, artifact writing, and the top-level render operation.

use crate::error::RenderError;
use crate::raster::render_png;
use crate::scene::{build_scene, Scene};
use crate::svg::render_svg;
use crate::types::{CanvasConfig, Diagram};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// The closed set of encoders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PNG raster
    Png,
    /// SVG vector
    Svg,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Png, OutputFormat::Svg];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    /// Format implied by a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }

    /// Encode a scene into this format's bytes.
    pub fn encode(self, scene: &Scene) -> Result<Vec<u8>, RenderError> {
        match self {
            OutputFormat::Png => render_png(scene),
            OutputFormat::Svg => Ok(render_svg(scene).into_bytes()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(RenderError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A file written by [`render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub format: OutputFormat,
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// A destination that was skipped because no encoder matches it
#[derive(Debug)]
pub struct RejectedTarget {
    pub path: PathBuf,
    pub error: RenderError,
}

/// Outcome of one [`render`] invocation
#[derive(Debug)]
pub struct RenderReport {
    /// The scene every artifact was encoded from
    pub scene: Scene,
    pub artifacts: Vec<RenderedArtifact>,
    pub rejected: Vec<RejectedTarget>,
}

impl RenderReport {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    /// All artifacts, or the first rejection if any target was skipped.
    pub fn into_result(self) -> Result<Vec<RenderedArtifact>, RenderError> {
        match self.rejected.into_iter().next() {
            Some(rejected) => Err(rejected.error),
            None => Ok(self.artifacts),
        }
    }
}

/// `<dir>/<stem>.<ext>` for each format
pub fn target_paths(dir: &Path, stem: &str, formats: &[OutputFormat]) -> Vec<PathBuf> {
    formats
        .iter()
        .map(|f| dir.join(format!("{}.{}", stem, f.extension())))
        .collect()
}

/// Render `diagram` on `canvas` to every path in `targets`.
///
/// The diagram and canvas are validated before anything is written. Targets
/// with an unknown extension are rejected without touching the filesystem
/// while the rest are still written. The first I/O or encoder failure
/// aborts the invocation; files already written by it should be treated as
/// unreliable.
pub fn render<P: AsRef<Path>>(
    diagram: &Diagram,
    canvas: &CanvasConfig,
    targets: &[P],
) -> Result<RenderReport, RenderError> {
    let scene = build_scene(diagram, canvas)?;

    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for target in targets {
        let path = target.as_ref();
        match OutputFormat::from_path(path) {
            Ok(format) => accepted.push((format, path.to_path_buf())),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping target");
                rejected.push(RejectedTarget {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    let mut artifacts = Vec::with_capacity(accepted.len());
    for (format, path) in accepted {
        debug!(%format, path = %path.display(), "encoding");
        let bytes = format.encode(&scene)?;
        let bytes_written = write_artifact(&path, &bytes)?;
        info!(%format, path = %path.display(), bytes = bytes_written, "wrote artifact");
        artifacts.push(RenderedArtifact {
            format,
            path,
            bytes_written,
        });
    }

    Ok(RenderReport {
        scene,
        artifacts,
        rejected,
    })
}

/// Create or truncate `path` and write `bytes`. The handle is closed on return.
fn write_artifact(path: &Path, bytes: &[u8]) -> Result<usize, RenderError> {
    let mut file = File::create(path).map_err(|e| RenderError::io(path, e))?;
    file.write_all(bytes).map_err(|e| RenderError::io(path, e))?;
    file.flush().map_err(|e| RenderError::io(path, e))?;
    Ok(bytes.len())
}
