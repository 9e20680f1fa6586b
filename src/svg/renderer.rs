//! SVG encoder - converts a Scene into an SVG document.
//!
//! Pure string building, no DOM manipulation. Commands are emitted in scene
//! order, so document order is paint order.

use super::styles::{
    estimate_text_width, StrokeWidths, BASELINE_SHIFT, LINE_HEIGHT, PLATE_RADIUS, TICK_LENGTH,
};
use crate::color::Color;
use crate::scene::{DrawCommand, Rect, Scene, Tick, Title};
use crate::theme::FontSizes;
use crate::types::{LabelStyle, Point};

/// Render a scene as a standalone SVG document.
pub fn render_svg(scene: &Scene) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(svg_open_tag(scene));

    // Canvas and plot-area backgrounds
    parts.push(format!(
        r#"<rect class="background" x="0" y="0" width="{}" height="{}" {} />"#,
        fmt_num(scene.width),
        fmt_num(scene.height),
        paint("fill", scene.background)
    ));
    if !scene.plot_background.is_transparent() {
        let r = &scene.plot_area;
        parts.push(format!(
            r#"<rect class="plot" x="{}" y="{}" width="{}" height="{}" {} />"#,
            fmt_num(r.x),
            fmt_num(r.y),
            fmt_num(r.width),
            fmt_num(r.height),
            paint("fill", scene.plot_background)
        ));
    }

    if let Some(title) = &scene.title {
        parts.push(render_title(title, &scene.font_family));
    }

    for command in &scene.commands {
        parts.push(render_command(command, &scene.font_family));
    }

    parts.push("</svg>".to_string());

    let mut doc = parts.join("\n");
    doc.push('\n');
    doc
}

fn svg_open_tag(scene: &Scene) -> String {
    let w = fmt_num(scene.width);
    let h = fmt_num(scene.height);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="{}">"#,
        escape_xml(&scene.font_family)
    )
}

fn render_command(command: &DrawCommand, font_family: &str) -> String {
    match command {
        DrawCommand::Axes {
            plot_area,
            color,
            x_ticks,
            y_ticks,
        } => render_axes(plot_area, *color, x_ticks, y_ticks),
        DrawCommand::Line {
            edge,
            from,
            to,
            color,
            width,
        } => format!(
            r#"<line class="edge" data-edge="{}" x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}" />"#,
            edge,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            paint("stroke", *color),
            fmt_num(*width)
        ),
        DrawCommand::Arrowhead { edge, points, color } => format!(
            r#"<polygon class="arrowhead" data-edge="{}" points="{}" {} />"#,
            edge,
            points_attr(points),
            paint("fill", *color)
        ),
        DrawCommand::EdgeLabel { edge, at, lines, style, .. } => {
            render_edge_label(*edge, at, lines, style, font_family)
        }
        DrawCommand::NodeShape {
            node,
            center,
            radius,
            fill,
            outline,
            outline_width,
        } => format!(
            r#"<g class="node" data-node="{id}">
  <title>{id}</title>
  <circle cx="{}" cy="{}" r="{}" {} {} stroke-width="{}" />
</g>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(*radius),
            paint("fill", *fill),
            paint("stroke", *outline),
            fmt_num(*outline_width),
            id = escape_xml(node)
        ),
        DrawCommand::NodeLabel {
            node,
            center,
            lines,
            font_family,
            font_size,
            font_weight,
            color,
        } => format!(
            r#"<text class="node-label" data-node="{}" text-anchor="middle" font-family="{}" font-size="{}" font-weight="{}" {}>{}</text>"#,
            escape_xml(node),
            escape_xml(font_family),
            fmt_num(*font_size),
            font_weight,
            paint("fill", *color),
            tspans(center, lines, *font_size)
        ),
    }
}

// ============================================================================
// Edge labels
// ============================================================================

fn render_edge_label(
    edge: usize,
    at: &Point,
    lines: &[String],
    style: &LabelStyle,
    font_family: &str,
) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let text_width = lines
        .iter()
        .map(|l| estimate_text_width(l, style.font_size, 400))
        .fold(0.0, f64::max);
    let text_height = lines.len() as f64 * style.font_size * LINE_HEIGHT;

    // Plate behind the text so it stays legible over crossing connectors
    let plate_w = text_width + style.padding * 2.0;
    let plate_h = text_height + style.padding * 2.0;

    format!(
        r#"<g class="edge-label" data-edge="{}">
  <rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" {} {} stroke-width="{}" />
  <text text-anchor="middle" font-family="{}" font-size="{}" {}>{}</text>
</g>"#,
        edge,
        fmt_num(at.x - plate_w / 2.0),
        fmt_num(at.y - plate_h / 2.0),
        fmt_num(plate_w),
        fmt_num(plate_h),
        paint("fill", style.background),
        paint("stroke", style.border),
        fmt_num(style.border_width),
        escape_xml(font_family),
        fmt_num(style.font_size),
        paint("fill", style.text_color),
        tspans(at, lines, style.font_size),
        r = PLATE_RADIUS
    )
}

/// One `<tspan>` per line, vertically centered on `center`.
fn tspans(center: &Point, lines: &[String], font_size: f64) -> String {
    let line_height = font_size * LINE_HEIGHT;
    let first = center.y - (lines.len().saturating_sub(1)) as f64 * line_height / 2.0
        + font_size * BASELINE_SHIFT;
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            format!(
                r#"<tspan x="{}" y="{}">{}</tspan>"#,
                fmt_num(center.x),
                fmt_num(first + i as f64 * line_height),
                escape_xml(line)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

// ============================================================================
// Title and axes
// ============================================================================

fn render_title(title: &Title, font_family: &str) -> String {
    format!(
        r#"<text class="title" x="{}" y="{}" text-anchor="middle" font-family="{}" font-size="{}" {}>{}</text>"#,
        fmt_num(title.at.x),
        fmt_num(title.at.y + title.font_size * BASELINE_SHIFT),
        escape_xml(font_family),
        fmt_num(title.font_size),
        paint("fill", title.color),
        escape_xml(&title.text)
    )
}

fn render_axes(plot: &Rect, color: Color, x_ticks: &[Tick], y_ticks: &[Tick]) -> String {
    let bottom = plot.y + plot.height;
    let stroke = paint("stroke", color);
    let fill = paint("fill", color);
    let mut parts = vec![r#"<g class="axes">"#.to_string()];

    parts.push(format!(
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}" />"#,
        fmt_num(plot.x),
        fmt_num(bottom),
        fmt_num(plot.x + plot.width),
        fmt_num(bottom),
        stroke,
        StrokeWidths::AXIS
    ));
    parts.push(format!(
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}" />"#,
        fmt_num(plot.x),
        fmt_num(plot.y),
        fmt_num(plot.x),
        fmt_num(bottom),
        stroke,
        StrokeWidths::AXIS
    ));

    for tick in x_ticks {
        parts.push(format!(
            r#"  <line x1="{x}" y1="{}" x2="{x}" y2="{}" {} stroke-width="{}" />
  <text x="{x}" y="{}" text-anchor="middle" font-size="{}" {}>{}</text>"#,
            fmt_num(bottom),
            fmt_num(bottom + TICK_LENGTH),
            stroke,
            StrokeWidths::TICK,
            fmt_num(bottom + TICK_LENGTH + FontSizes::TICK * (1.0 + BASELINE_SHIFT)),
            fmt_num(FontSizes::TICK),
            fill,
            escape_xml(&tick.label),
            x = fmt_num(tick.at)
        ));
    }

    for tick in y_ticks {
        parts.push(format!(
            r#"  <line x1="{}" y1="{y}" x2="{}" y2="{y}" {} stroke-width="{}" />
  <text x="{}" y="{}" text-anchor="end" font-size="{}" {}>{}</text>"#,
            fmt_num(plot.x - TICK_LENGTH),
            fmt_num(plot.x),
            stroke,
            StrokeWidths::TICK,
            fmt_num(plot.x - TICK_LENGTH * 2.0),
            fmt_num(tick.at + FontSizes::TICK * BASELINE_SHIFT),
            fmt_num(FontSizes::TICK),
            fill,
            escape_xml(&tick.label),
            y = fmt_num(tick.at)
        ));
    }

    parts.push("</g>".to_string());
    parts.join("\n")
}

// ============================================================================
// Utilities
// ============================================================================

/// `fill`/`stroke` attribute with a separate opacity attribute when translucent
fn paint(attr: &str, color: Color) -> String {
    if color.is_transparent() {
        format!(r#"{}="none""#, attr)
    } else if color.is_opaque() {
        format!(r#"{}="{}""#, attr, color.hex())
    } else {
        format!(r#"{attr}="{}" {attr}-opacity="{}""#, color.hex(), fmt_num(color.a))
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Fixed three-decimal precision with trailing zeros dropped, so output is
/// stable across platforms.
fn fmt_num(n: f64) -> String {
    let s = format!("{:.3}", n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
