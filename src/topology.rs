//! The default deployment topology, and loading topologies from JSON.
//!
//! The default is a local dev machine pushing to a GitHub repository, whose
//! Actions workflow deploys a WordPress web service on Render backed by a
//! MySQL database and a persistent disk, serving internet users.

use crate::color::Color;
use crate::error::RenderError;
use crate::theme::Palette;
use crate::types::{CanvasConfig, Diagram, Edge, Node};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_TITLE: &str = "WordPress-Render-GitHub Integration";

/// Default output file stem
pub const DEFAULT_STEM: &str = "architecture";

/// The 7-node / 6-edge deployment topology.
pub fn default_diagram() -> Diagram {
    let [dev, github, actions, render, database, disk, users]: [Color; 7] = Palette::SERIES;

    let nodes = vec![
        Node::new("Dev", 0.0, 3.0, "Local Dev<br>Machine", dev),
        Node::new("GitHub", 1.5, 3.0, "GitHub<br>Repository", github),
        Node::new("Actions", 3.0, 3.0, "GitHub<br>Actions", actions),
        Node::new("Render", 4.5, 3.0, "Render Web<br>WordPress", render),
        Node::new("Database", 4.5, 1.5, "MySQL<br>Database", database),
        Node::new("Disk", 4.5, 4.5, "Persistent<br>Disk 10GB", disk),
        Node::new("Users", 6.0, 3.0, "Internet<br>Users", users),
    ];

    let edges = vec![
        Edge::new("Dev", "GitHub", "git push"),
        Edge::new("GitHub", "Actions", "trigger"),
        Edge::new("Actions", "Render", "webhook<br>Docker build"),
        Edge::new("Render", "Database", "DB queries"),
        Edge::new("Render", "Disk", "mount<br>storage"),
        Edge::new("Render", "Users", "HTTP/HTTPS"),
    ];

    Diagram::new(nodes, edges).with_title(DEFAULT_TITLE)
}

/// On-disk topology: a diagram plus an optional canvas override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyFile {
    #[serde(flatten)]
    pub diagram: Diagram,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<CanvasConfig>,
}

/// Parse a topology document. A missing `canvas` yields the default canvas.
pub fn parse_topology(json: &str) -> Result<(Diagram, CanvasConfig), RenderError> {
    let file: TopologyFile = serde_json::from_str(json)?;
    Ok((file.diagram, file.canvas.unwrap_or_default()))
}

/// Read and parse a topology file.
pub fn load_topology(path: &Path) -> Result<(Diagram, CanvasConfig), RenderError> {
    let json = fs::read_to_string(path).map_err(|e| RenderError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let (diagram, canvas) = parse_topology(&json)?;
    debug!(
        path = %path.display(),
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        "loaded topology"
    );
    Ok((diagram, canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn test_default_shape() {
        let d = default_diagram();
        assert_eq!(d.nodes.len(), 7);
        assert_eq!(d.edges.len(), 6);
        assert!(d.validate().is_ok());
        assert_eq!(d.node("Disk").unwrap().position, Point::new(4.5, 4.5));
        assert!(d.edges.iter().filter(|e| e.source == "Render").count() == 3);
    }

    #[test]
    fn test_default_fits_canvas() {
        let canvas = CanvasConfig::default();
        for node in &default_diagram().nodes {
            assert!(node.position.x > canvas.x_range[0] && node.position.x < canvas.x_range[1]);
            assert!(node.position.y > canvas.y_range[0] && node.position.y < canvas.y_range[1]);
        }
    }

    #[test]
    fn test_parse_minimal() {
        let json = r##"{
            "nodes": [
                {"id": "lb", "position": {"x": 0, "y": 0}, "label": "LB", "color": "#112233"},
                {"id": "app", "position": {"x": 1, "y": 0}, "label": "App", "color": "rgb(1, 2, 3)", "size": 40}
            ],
            "edges": [{"source": "lb", "target": "app", "label": "proxy"}]
        }"##;
        let (diagram, canvas) = parse_topology(json).unwrap();
        assert_eq!(diagram.title, None);
        assert_eq!(diagram.nodes[0].size, 60.0);
        assert_eq!(diagram.nodes[1].size, 40.0);
        assert_eq!(diagram.edges[0].style.width, 2.0);
        assert_eq!(canvas, CanvasConfig::default());
    }

    #[test]
    fn test_parse_canvas_override() {
        let json = r#"{
            "title": "T",
            "nodes": [],
            "canvas": {"x_range": [0, 10], "show_axes": true}
        }"#;
        let (_, canvas) = parse_topology(json).unwrap();
        assert_eq!(canvas.x_range, [0.0, 10.0]);
        assert!(canvas.show_axes);
        assert_eq!(canvas.width, 700);
    }

    #[test]
    fn test_parse_bad_color() {
        let json = r#"{"nodes": [{"id": "a", "position": {"x": 0, "y": 0}, "label": "A", "color": "blurple"}]}"#;
        assert!(matches!(parse_topology(json), Err(RenderError::Topology(_))));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let path = Path::new("/nonexistent/topo.json");
        let err = load_topology(path).unwrap_err();
        assert!(matches!(&err, RenderError::Read { path: p, .. } if p == path));
        assert!(err.to_string().starts_with("failed to read /nonexistent/topo.json"));
    }

    #[test]
    fn test_default_roundtrips_through_json() {
        let file = TopologyFile {
            diagram: default_diagram(),
            canvas: None,
        };
        let json = serde_json::to_string_pretty(&file).unwrap();
        let (diagram, _) = parse_topology(&json).unwrap();
        assert_eq!(diagram, default_diagram());
    }
}
