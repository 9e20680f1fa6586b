//! Error types for diagram rendering.
//!
//! Every variant is terminal for the render invocation that produced it.
//! Nothing here is retried.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scene construction and artifact output
#[derive(Error, Debug)]
pub enum RenderError {
    /// An edge names a node that is not part of the diagram
    #[error("edge #{edge_index} ({from} -> {to}) references unknown node '{missing}'")]
    DanglingReference {
        edge_index: usize,
        from: String,
        to: String,
        missing: String,
    },

    /// Two nodes share the same identifier
    #[error("duplicate node id '{id}'")]
    DuplicateNode { id: String },

    /// A node marker diameter is zero, negative, or not finite
    #[error("node '{id}' has invalid size {size}")]
    InvalidNodeSize { id: String, size: f64 },

    /// Canvas ranges or dimensions leave nothing to draw on
    #[error("invalid canvas: {0}")]
    InvalidCanvas(String),

    /// No encoder exists for the requested format
    #[error("unsupported output format '{format}' (supported: png, svg)")]
    UnsupportedFormat { format: String },

    /// A color literal could not be parsed
    #[error("invalid color '{value}'")]
    InvalidColor { value: String },

    /// A topology file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination could not be written
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The raster backend rejected the scene
    #[error("rasterization failed: {0}")]
    Rasterize(String),

    /// A topology file is not valid JSON for a diagram
    #[error("invalid topology: {0}")]
    Topology(#[from] serde_json::Error),
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }
}
