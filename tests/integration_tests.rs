//! Integration tests: render to real files in scratch directories and inspect
//! the results.
//!
//! Run all tests with: cargo test

use archdiagram::{
    default_diagram, render, render_default, target_paths, CanvasConfig, CommandKind, Diagram,
    DrawCommand, Edge, OutputFormat, RenderError,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn scratch() -> TempDir {
    tempfile::tempdir().expect("Failed to create scratch dir")
}

/// Parse an SVG file and return the document text
fn read_svg(path: &Path) -> String {
    let text = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e));
    roxmltree::Document::parse(&text).unwrap_or_else(|e| panic!("{:?} is not well-formed XML: {}", path, e));
    text
}

/// Class attributes of all elements, in document order
fn classes_in_order(doc: &roxmltree::Document) -> Vec<String> {
    doc.descendants()
        .filter_map(|n| n.attribute("class"))
        .map(|c| c.to_string())
        .collect()
}

#[test]
fn default_topology_writes_both_artifacts() {
    let dir = scratch();
    let artifacts = render_default(dir.path()).unwrap();

    assert_eq!(artifacts.len(), 2);
    for name in ["architecture.png", "architecture.svg"] {
        let path = dir.path().join(name);
        let meta = fs::metadata(&path).unwrap_or_else(|e| panic!("{} missing: {}", name, e));
        assert!(meta.len() > 0, "{} is empty", name);
    }
}

#[test]
fn default_topology_scene_shape() {
    let dir = scratch();
    let targets = target_paths(dir.path(), "architecture", &OutputFormat::ALL);
    let report = render(&default_diagram(), &CanvasConfig::default(), &targets).unwrap();

    assert_eq!(report.scene.count(CommandKind::NodeShape), 7);
    assert_eq!(report.scene.count(CommandKind::Line), 6);
    assert_eq!(report.scene.count(CommandKind::Arrowhead), 6);
    assert_eq!(report.scene.count(CommandKind::EdgeLabel), 6);
}

#[test]
fn svg_node_groups_carry_hover_titles() {
    let dir = scratch();
    render_default(dir.path()).unwrap();
    let text = read_svg(&dir.path().join("architecture.svg"));
    let doc = roxmltree::Document::parse(&text).unwrap();

    let titles: Vec<&str> = doc
        .descendants()
        .filter(|n| n.has_tag_name("title"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(
        titles,
        vec!["Dev", "GitHub", "Actions", "Render", "Database", "Disk", "Users"]
    );
}

#[test]
fn svg_paints_edges_beneath_nodes() {
    let dir = scratch();
    render_default(dir.path()).unwrap();
    let text = read_svg(&dir.path().join("architecture.svg"));
    let doc = roxmltree::Document::parse(&text).unwrap();
    let classes = classes_in_order(&doc);

    let last_edge = classes
        .iter()
        .rposition(|c| c == "edge" || c == "arrowhead" || c == "edge-label")
        .unwrap();
    let first_node = classes.iter().position(|c| c == "node").unwrap();
    assert!(last_edge < first_node);
    assert_eq!(classes.iter().filter(|c| *c == "node").count(), 7);
    assert_eq!(classes.iter().filter(|c| *c == "arrowhead").count(), 6);
}

#[test]
fn svg_axes_group_precedes_edges_when_enabled() {
    let dir = scratch();
    let target = dir.path().join("axes.svg");
    let canvas = CanvasConfig {
        show_axes: true,
        ..Default::default()
    };
    render(&default_diagram(), &canvas, &[&target]).unwrap();
    let text = read_svg(&target);
    let doc = roxmltree::Document::parse(&text).unwrap();
    let classes = classes_in_order(&doc);

    let axes = classes.iter().position(|c| c == "axes").expect("no axes group");
    let first_edge = classes.iter().position(|c| c == "edge").unwrap();
    assert!(axes < first_edge);

    let group = doc
        .descendants()
        .find(|n| n.attribute("class") == Some("axes"))
        .unwrap();
    let labels: Vec<&str> = group
        .children()
        .filter(|n| n.has_tag_name("text"))
        .filter_map(|n| n.text())
        .collect();
    // x ticks 0..=6, then y ticks 1..=5
    assert_eq!(labels, vec!["0", "1", "2", "3", "4", "5", "6", "1", "2", "3", "4", "5"]);
}

#[test]
fn zero_size_node_in_topology_is_rejected() {
    let dir = scratch();
    let (diagram, canvas) = archdiagram::parse_topology(
        r##"{"nodes": [{"id": "db", "position": {"x": 1, "y": 1}, "label": "DB", "color": "#000000", "size": 0}]}"##,
    )
    .unwrap();
    let target = dir.path().join("architecture.svg");

    let err = render(&diagram, &canvas, &[&target]).unwrap_err();
    assert!(matches!(err, RenderError::InvalidNodeSize { id, .. } if id == "db"));
    assert!(!target.exists());
}

#[test]
fn edge_labels_sit_at_midpoints() {
    let diagram = default_diagram();
    let scene = archdiagram::build_scene(&diagram, &CanvasConfig::default()).unwrap();

    for cmd in &scene.commands {
        if let DrawCommand::EdgeLabel { edge, anchor, at, .. } = cmd {
            let e = &diagram.edges[*edge];
            let a = diagram.node(&e.source).unwrap().position;
            let b = diagram.node(&e.target).unwrap().position;
            assert_eq!(anchor.x, (a.x + b.x) / 2.0);
            assert_eq!(anchor.y, (a.y + b.y) / 2.0);

            let line = scene
                .commands
                .iter()
                .find_map(|c| match c {
                    DrawCommand::Line { edge: le, from, to, .. } if le == edge => Some((*from, *to)),
                    _ => None,
                })
                .unwrap();
            assert_eq!(*at, line.0.midpoint(&line.1));
        }
    }
}

#[test]
fn dangling_edge_writes_nothing() {
    let dir = scratch();
    let mut diagram = default_diagram();
    diagram.edges.push(Edge::new("Render", "Cache", "reads"));
    let targets = target_paths(dir.path(), "architecture", &OutputFormat::ALL);

    let err = render(&diagram, &CanvasConfig::default(), &targets).unwrap_err();
    match err {
        RenderError::DanglingReference { edge_index, missing, .. } => {
            assert_eq!(edge_index, 6);
            assert_eq!(missing, "Cache");
        }
        other => panic!("Expected DanglingReference, got {:?}", other),
    }
    for target in &targets {
        assert!(!target.exists(), "{:?} should not exist", target);
    }
}

#[test]
fn unsupported_format_is_rejected_alongside_valid_ones() {
    let dir = scratch();
    let good = dir.path().join("architecture.svg");
    let bogus = dir.path().join("architecture.bogus");

    let report = render(&default_diagram(), &CanvasConfig::default(), &[&good, &bogus]).unwrap();

    assert!(good.exists());
    assert!(!bogus.exists());
    assert_eq!(report.artifacts.len(), 1);
    assert_eq!(report.rejected.len(), 1);
    assert!(matches!(
        report.into_result(),
        Err(RenderError::UnsupportedFormat { format }) if format == "bogus"
    ));
}

#[test]
fn unwritable_destination_is_io_failure() {
    let dir = scratch();
    let target = dir.path().join("missing-subdir").join("architecture.svg");
    let err = render(&default_diagram(), &CanvasConfig::default(), &[&target]).unwrap_err();
    assert!(matches!(err, RenderError::Io { path, .. } if path == target));
}

#[test]
fn rendering_is_deterministic() {
    let dir = scratch();
    let target = dir.path().join("architecture.svg");

    let first = render(&default_diagram(), &CanvasConfig::default(), &[&target]).unwrap();
    let first_svg = fs::read(&target).unwrap();
    let second = render(&default_diagram(), &CanvasConfig::default(), &[&target]).unwrap();
    let second_svg = fs::read(&target).unwrap();

    assert_eq!(first.scene, second.scene);
    assert_eq!(first_svg, second_svg);
}

#[test]
fn topology_file_drives_render() {
    let dir = scratch();
    let topo = dir.path().join("topo.json");
    fs::write(
        &topo,
        r##"{
            "title": "Edge & cache",
            "nodes": [
                {"id": "cdn", "position": {"x": 0, "y": 1}, "label": "CDN", "color": "#336699"},
                {"id": "origin", "position": {"x": 2, "y": 1}, "label": "Origin", "color": "rgba(10, 20, 30, 0.5)"}
            ],
            "edges": [{"source": "cdn", "target": "origin", "label": "miss"}],
            "canvas": {"x_range": [-1, 3], "y_range": [0, 2], "width": 400, "height": 300,
                       "margins": {"left": 20, "right": 20, "top": 40, "bottom": 20}}
        }"##,
    )
    .unwrap();

    let (diagram, canvas): (Diagram, CanvasConfig) = archdiagram::load_topology(&topo).unwrap();
    let target = dir.path().join("edge.svg");
    render(&diagram, &canvas, &[&target]).unwrap();

    let text = read_svg(&target);
    assert!(text.contains(r#"width="400" height="300""#));
    assert!(text.contains(">Edge &amp; cache<"));
    assert!(text.contains(r##"fill="#0A141E" fill-opacity="0.5""##));
}

/// Macro to generate one single-format render test per encoder
macro_rules! format_test {
    ($fmt:ident, $variant:ident) => {
        paste::paste! {
            #[test]
            fn [<renders_only_ $fmt>]() {
                let dir = scratch();
                let target = dir.path().join(concat!("architecture.", stringify!($fmt)));
                let report = render(&default_diagram(), &CanvasConfig::default(), &[&target]).unwrap();

                assert_eq!(report.artifacts.len(), 1);
                assert_eq!(report.artifacts[0].format, OutputFormat::$variant);
                assert_eq!(
                    report.artifacts[0].bytes_written as u64,
                    fs::metadata(&target).unwrap().len()
                );
            }
        }
    };
}

format_test!(png, Png);
format_test!(svg, Svg);
