//! Type definitions for architecture diagrams and the canvas they are drawn on

use crate::color::Color;
use crate::error::RenderError;
use crate::theme::{FontSizes, Fonts, Palette};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A 2D point. Data coordinates on input, pixels once projected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Arithmetic midpoint between `self` and `other`
    pub fn midpoint(&self, other: &Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Split a display label into lines. Accepts `\n` and `<br>` as breaks.
pub fn label_lines(label: &str) -> Vec<String> {
    label
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .lines()
        .map(|l| l.trim().to_string())
        .collect()
}

// ============================================================================
// Nodes and edges
// ============================================================================

fn default_node_size() -> f64 {
    60.0
}

/// One architectural component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub position: Point,
    pub label: String,
    pub color: Color,
    /// Marker diameter in pixels
    #[serde(default = "default_node_size")]
    pub size: f64,
}

impl Node {
    pub fn new(id: &str, x: f64, y: f64, label: &str, color: Color) -> Self {
        Self {
            id: id.to_string(),
            position: Point::new(x, y),
            label: label.to_string(),
            color,
            size: default_node_size(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// Line styling for an edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    pub color: Color,
    pub width: f64,
    /// Arrowhead scale relative to the line width
    pub arrow_size: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            color: Palette::CONNECTOR,
            width: 2.0,
            arrow_size: 1.5,
        }
    }
}

/// A directed, labeled connection between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub label: String,
    #[serde(default)]
    pub style: EdgeStyle,
}

impl Edge {
    pub fn new(source: &str, target: &str, label: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            label: label.to_string(),
            style: EdgeStyle::default(),
        }
    }
}

/// A complete diagram. Node order is the node draw order, edge order the
/// edge draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    #[serde(default)]
    pub title: Option<String>,
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Diagram {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            title: None,
            nodes,
            edges,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Check node ids are unique, sizes positive, and every edge endpoint resolves.
    pub fn validate(&self) -> Result<(), RenderError> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !(node.size.is_finite() && node.size > 0.0) {
                return Err(RenderError::InvalidNodeSize {
                    id: node.id.clone(),
                    size: node.size,
                });
            }
            if !seen.insert(node.id.as_str()) {
                return Err(RenderError::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        for (edge_index, edge) in self.edges.iter().enumerate() {
            for endpoint in [&edge.source, &edge.target] {
                if !seen.contains(endpoint.as_str()) {
                    return Err(RenderError::DanglingReference {
                        edge_index,
                        from: edge.source.clone(),
                        to: edge.target.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// Canvas configuration
// ============================================================================

/// Pixel margins between the canvas edge and the plot area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 80.0,
            right: 80.0,
            top: 100.0,
            bottom: 80.0,
        }
    }
}

/// Node marker outline and label typography
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    pub outline: Color,
    pub outline_width: f64,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: u32,
    pub text_color: Color,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            outline: Palette::INK,
            outline_width: 2.0,
            font_family: Fonts::NODE_LABEL.to_string(),
            font_size: FontSizes::NODE_LABEL,
            font_weight: 900,
            text_color: Palette::INK,
        }
    }
}

/// Edge label text and the plate drawn behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub font_size: f64,
    pub text_color: Color,
    pub background: Color,
    pub border: Color,
    pub border_width: f64,
    pub padding: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: FontSizes::EDGE_LABEL,
            text_color: Palette::INK,
            background: Palette::LABEL_PLATE,
            border: Palette::LABEL_BORDER,
            border_width: 1.0,
            padding: 4.0,
        }
    }
}

/// Canvas geometry and appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Visible data range on the x axis, `[min, max]`
    pub x_range: [f64; 2],
    /// Visible data range on the y axis, `[min, max]`
    pub y_range: [f64; 2],
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    pub margins: Margins,
    /// Whole-canvas background
    pub background: Color,
    /// Plot area background, drawn inside the margins
    pub plot_background: Color,
    pub show_axes: bool,
    pub font_family: String,
    pub node_style: NodeStyle,
    pub edge_label_style: LabelStyle,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            x_range: [-0.5, 6.5],
            y_range: [0.5, 5.5],
            width: 700,
            height: 500,
            margins: Margins::default(),
            background: Palette::PAPER,
            plot_background: Color::TRANSPARENT,
            show_axes: false,
            font_family: Fonts::BODY.to_string(),
            node_style: NodeStyle::default(),
            edge_label_style: LabelStyle::default(),
        }
    }
}

impl CanvasConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        for (axis, [min, max]) in [("x", self.x_range), ("y", self.y_range)] {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(RenderError::InvalidCanvas(format!(
                    "{} range [{}, {}] is empty or inverted",
                    axis, min, max
                )));
            }
        }

        let m = &self.margins;
        if m.left + m.right >= self.width as f64 || m.top + m.bottom >= self.height as f64 {
            return Err(RenderError::InvalidCanvas(format!(
                "margins leave no plot area on a {}x{} canvas",
                self.width, self.height
            )));
        }

        Ok(())
    }
}
