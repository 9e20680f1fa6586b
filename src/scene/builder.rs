//! Scene construction - validates a diagram and lays it out as draw commands.
//!
//! Paints back-to-front: axes → edges (line, arrowhead, label) → nodes (shape, label).
//! Every edge command precedes every node command so node markers sit on
//! top of the connectors that meet them.

use super::projection::Projection;
use super::types::{DrawCommand, Scene, Title};
use crate::error::RenderError;
use crate::theme::{FontSizes, Palette};
use crate::types::{label_lines, CanvasConfig, Diagram, Edge, Point};
use std::collections::HashMap;
use tracing::debug;

/// Arrowhead proportions, as multiples of `line width * arrow_size`
pub struct ArrowHead;

impl ArrowHead {
    pub const LENGTH: f64 = 3.0;
    pub const HALF_WIDTH: f64 = 1.5;
}

/// Validate `diagram` against `canvas` and build its scene graph.
///
/// Fails before producing any command if an edge names an unknown node,
/// a node id repeats, or the canvas has no drawable area.
pub fn build_scene(diagram: &Diagram, canvas: &CanvasConfig) -> Result<Scene, RenderError> {
    diagram.validate()?;
    canvas.validate()?;

    let proj = Projection::new(canvas);
    let mut commands = Vec::with_capacity(diagram.edges.len() * 3 + diagram.nodes.len() * 2 + 1);

    if canvas.show_axes {
        commands.push(DrawCommand::Axes {
            plot_area: proj.plot,
            color: Palette::AXIS,
            x_ticks: proj.x_ticks(),
            y_ticks: proj.y_ticks(),
        });
    }

    // Data position, projected center and radius, keyed by id
    let placed: HashMap<&str, (Point, Point, f64)> = diagram
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), (n.position, proj.project(&n.position), n.size / 2.0)))
        .collect();

    // 1. Edges
    for (index, edge) in diagram.edges.iter().enumerate() {
        let (Some(&(source_pos, from, _)), Some(&(target_pos, to, target_radius))) =
            (placed.get(edge.source.as_str()), placed.get(edge.target.as_str()))
        else {
            continue;
        };

        commands.push(DrawCommand::Line {
            edge: index,
            from,
            to,
            color: edge.style.color,
            width: edge.style.width,
        });

        commands.push(DrawCommand::Arrowhead {
            edge: index,
            points: arrowhead(edge, from, to, target_radius + canvas.node_style.outline_width / 2.0),
            color: edge.style.color,
        });

        commands.push(DrawCommand::EdgeLabel {
            edge: index,
            anchor: source_pos.midpoint(&target_pos),
            at: from.midpoint(&to),
            lines: label_lines(&edge.label),
            style: canvas.edge_label_style,
        });
    }

    // 2. Nodes
    for node in &diagram.nodes {
        let center = proj.project(&node.position);
        let radius = node.size / 2.0;
        commands.push(DrawCommand::NodeShape {
            node: node.id.clone(),
            center,
            radius,
            fill: node.color,
            outline: canvas.node_style.outline,
            outline_width: canvas.node_style.outline_width,
        });
        commands.push(DrawCommand::NodeLabel {
            node: node.id.clone(),
            center,
            lines: label_lines(&node.label),
            font_family: canvas.node_style.font_family.clone(),
            font_size: canvas.node_style.font_size,
            font_weight: canvas.node_style.font_weight,
            color: canvas.node_style.text_color,
        });
    }

    let title = diagram.title.as_ref().map(|text| Title {
        text: text.clone(),
        at: Point::new(canvas.width as f64 / 2.0, canvas.margins.top / 2.0),
        font_size: FontSizes::TITLE,
        color: canvas.node_style.text_color,
    });

    debug!(
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        commands = commands.len(),
        "built scene"
    );

    Ok(Scene {
        width: canvas.width as f64,
        height: canvas.height as f64,
        background: canvas.background,
        plot_area: proj.plot,
        plot_background: canvas.plot_background,
        font_family: canvas.font_family.clone(),
        title,
        commands,
    })
}

/// Triangle whose tip touches the target marker's outline.
///
/// When the segment is no longer than `standoff` the tip sits on the target
/// center instead. A zero-length edge points left to right.
fn arrowhead(edge: &Edge, from: Point, to: Point, standoff: f64) -> [Point; 3] {
    let len = from.distance(&to);
    let (ux, uy) = if len > 0.0 {
        ((to.x - from.x) / len, (to.y - from.y) / len)
    } else {
        (1.0, 0.0)
    };
    let pull_back = if len > standoff { standoff } else { 0.0 };

    let scale = edge.style.width * edge.style.arrow_size;
    let head_len = ArrowHead::LENGTH * scale;
    let half_w = ArrowHead::HALF_WIDTH * scale;

    let tip = Point::new(to.x - ux * pull_back, to.y - uy * pull_back);
    let base = Point::new(tip.x - ux * head_len, tip.y - uy * head_len);

    [
        tip,
        Point::new(base.x - uy * half_w, base.y + ux * half_w),
        Point::new(base.x + uy * half_w, base.y - ux * half_w),
    ]
}
