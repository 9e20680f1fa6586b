//! Scene graph types: an ordered list of draw commands in pixel space.

use crate::color::Color;
use crate::types::{LabelStyle, Point};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// A tick mark on a visible axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Pixel offset along the axis
    pub at: f64,
    pub label: String,
}

/// Centered title above the plot area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub at: Point,
    pub font_size: f64,
    pub color: Color,
}

/// One draw command. Commands are painted in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DrawCommand {
    /// Axis lines and tick labels along the bottom and left of the plot area
    Axes {
        plot_area: Rect,
        color: Color,
        x_ticks: Vec<Tick>,
        y_ticks: Vec<Tick>,
    },
    /// Straight connector between two node centers
    Line {
        edge: usize,
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    /// Filled triangle; the first point is the tip
    Arrowhead {
        edge: usize,
        points: [Point; 3],
        color: Color,
    },
    /// Edge label over a plate. `anchor` is in data coordinates, `at` in pixels.
    EdgeLabel {
        edge: usize,
        anchor: Point,
        at: Point,
        lines: Vec<String>,
        style: LabelStyle,
    },
    /// Filled circle for a node. `node` is surfaced as hover metadata.
    NodeShape {
        node: String,
        center: Point,
        radius: f64,
        fill: Color,
        outline: Color,
        outline_width: f64,
    },
    /// Node label centered on the node
    NodeLabel {
        node: String,
        center: Point,
        lines: Vec<String>,
        font_family: String,
        font_size: f64,
        font_weight: u32,
        color: Color,
    },
}

/// Discriminant of a [`DrawCommand`], for counting and ordering checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Axes,
    Line,
    Arrowhead,
    EdgeLabel,
    NodeShape,
    NodeLabel,
}

impl DrawCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            DrawCommand::Axes { .. } => CommandKind::Axes,
            DrawCommand::Line { .. } => CommandKind::Line,
            DrawCommand::Arrowhead { .. } => CommandKind::Arrowhead,
            DrawCommand::EdgeLabel { .. } => CommandKind::EdgeLabel,
            DrawCommand::NodeShape { .. } => CommandKind::NodeShape,
            DrawCommand::NodeLabel { .. } => CommandKind::NodeLabel,
        }
    }
}

/// A complete, immutable frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub plot_area: Rect,
    pub plot_background: Color,
    pub font_family: String,
    pub title: Option<Title>,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn count(&self, kind: CommandKind) -> usize {
        self.commands.iter().filter(|c| c.kind() == kind).count()
    }

    /// Indices into `commands` of every command of `kind`
    pub fn positions(&self, kind: CommandKind) -> Vec<usize> {
        self.commands
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind() == kind)
            .map(|(i, _)| i)
            .collect()
    }
}
