/*!
Display-independent description of one campus drawing.

`Scene::build` turns the graph (and an optional route) into glyphs in map coordinates. Painting
them is left to `node_shape`, `edge_shape` and the window in `app`.
*/

use log::debug;

use crate::{
    campus::{CampusGraph, node::Coordinate},
    config::RenderConfig,
    gui::renderer::RenderError,
    routing::Route,
};

pub const SCENE_TITLE: &str = "Campus Layout";

/// Axis-aligned rectangle in map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRect {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl MapRect {
    pub fn from_center_size(center: Coordinate, width: f32, height: f32) -> Self {
        Self {
            min: Coordinate::new(center.x - width * 0.5, center.y - height * 0.5),
            max: Coordinate::new(center.x + width * 0.5, center.y + height * 0.5),
        }
    }

    pub fn union(&self, other: &MapRect) -> MapRect {
        MapRect {
            min: Coordinate::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Coordinate::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Coordinate {
        self.min.midpoint(&self.max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeGlyph {
    pub label: String,
    pub rect: MapRect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGlyph {
    pub endpoints: (String, String),
    pub from: Coordinate,
    pub to: Coordinate,
    pub weight_label: String,
    pub label_anchor: Coordinate,
}

/// A route segment drawn over the base edge.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightGlyph {
    pub from: Coordinate,
    pub to: Coordinate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: String,
    pub nodes: Vec<NodeGlyph>,
    pub edges: Vec<EdgeGlyph>,
    pub highlights: Vec<HighlightGlyph>,
    pub bounds: MapRect,
}

impl Scene {
    pub fn build(campus: &CampusGraph, highlight: Option<&Route>, config: &RenderConfig) -> Result<Self, RenderError> {
        let nodes: Vec<NodeGlyph> = campus
            .landmarks()
            .map(|landmark| NodeGlyph {
                label: landmark.name.clone(),
                rect: MapRect::from_center_size(landmark.position, config.node_width, config.node_height),
            })
            .collect();

        let mut edges = Vec::with_capacity(campus.edge_count());
        for walkway in campus.walkways() {
            let from = position_of(campus, &walkway.from)?;
            let to = position_of(campus, &walkway.to)?;
            edges.push(EdgeGlyph {
                endpoints: (walkway.from.clone(), walkway.to.clone()),
                from,
                to,
                weight_label: walkway.distance.to_string(),
                label_anchor: from.midpoint(&to),
            });
        }

        let mut highlights = Vec::new();
        if let Some(route) = highlight {
            for (a, b) in route.hops() {
                let from = position_of(campus, a)?;
                let to = position_of(campus, b)?;
                if campus.walkway_between(a, b).is_none() {
                    return Err(RenderError::NotAnEdge(a.to_string(), b.to_string()));
                }
                highlights.push(HighlightGlyph { from, to });
            }
        }

        let bounds = nodes
            .iter()
            .map(|node| node.rect)
            .reduce(|acc, rect| acc.union(&rect))
            .unwrap_or(MapRect::from_center_size(Coordinate::default(), 1.0, 1.0));

        debug!(
            "[scene] {} nodes, {} edges, {} highlighted segments",
            nodes.len(),
            edges.len(),
            highlights.len()
        );
        Ok(Scene {
            title: SCENE_TITLE.to_string(),
            nodes,
            edges,
            highlights,
            bounds,
        })
    }
}

fn position_of(campus: &CampusGraph, name: &str) -> Result<Coordinate, RenderError> {
    campus
        .landmark(name)
        .map(|landmark| landmark.position)
        .ok_or_else(|| RenderError::UnknownNode(name.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        campus::load_campus,
        routing::find_shortest_path,
    };

    #[test]
    fn test_plain_scene_draws_everything_once() {
        let campus = load_campus().unwrap();
        let scene = Scene::build(&campus, None, &RenderConfig::default()).unwrap();

        assert_eq!(scene.title, "Campus Layout");
        assert_eq!(scene.nodes.len(), campus.node_count());
        let labels: HashSet<_> = scene.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels.len(), campus.node_count());
        assert!(campus.landmarks().all(|l| labels.contains(l.name.as_str())));

        assert_eq!(scene.edges.len(), campus.edge_count());
        let keys: HashSet<_> = scene
            .edges
            .iter()
            .map(|e| {
                let (a, b) = (e.endpoints.0.as_str(), e.endpoints.1.as_str());
                if a <= b { (a, b) } else { (b, a) }
            })
            .collect();
        assert_eq!(keys.len(), campus.edge_count());

        assert!(scene.highlights.is_empty());
    }

    #[test]
    fn test_node_rect_is_centered_on_landmark() {
        let campus = load_campus().unwrap();
        let scene = Scene::build(&campus, None, &RenderConfig::default()).unwrap();
        let gate = scene.nodes.iter().find(|n| n.label == "College Gate").unwrap();

        assert_eq!(gate.rect.center(), Coordinate::new(0.0, 0.0));
        assert!((gate.rect.width() - 3.4).abs() < 1e-5);
        assert!((gate.rect.height() - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_weight_label_at_midpoint() {
        let campus = load_campus().unwrap();
        let scene = Scene::build(&campus, None, &RenderConfig::default()).unwrap();
        let edge = scene
            .edges
            .iter()
            .find(|e| e.endpoints == ("College Gate".to_string(), "Cricket Ground".to_string()))
            .unwrap();

        assert_eq!(edge.weight_label, "2");
        assert_eq!(edge.label_anchor, Coordinate::new(1.0, -2.0));
    }

    #[test]
    fn test_bounds_cover_all_nodes() {
        let campus = load_campus().unwrap();
        let scene = Scene::build(&campus, None, &RenderConfig::default()).unwrap();

        assert!((scene.bounds.min.x - -1.7).abs() < 1e-5);
        assert!((scene.bounds.max.x - 17.7).abs() < 1e-5);
        assert!((scene.bounds.min.y - -12.75).abs() < 1e-5);
        assert!((scene.bounds.max.y - 6.75).abs() < 1e-5);
    }

    #[test]
    fn test_route_is_highlighted_segment_by_segment() {
        let campus = load_campus().unwrap();
        let route = find_shortest_path(&campus, "Hostel Block", "Library").unwrap();
        let scene = Scene::build(&campus, Some(&route), &RenderConfig::default()).unwrap();

        assert_eq!(scene.highlights.len(), route.nodes.len() - 1);
        assert_eq!(scene.edges.len(), campus.edge_count());
        let first = &scene.highlights[0];
        assert_eq!(first.from, Coordinate::new(4.0, -12.0));
        assert_eq!(first.to, Coordinate::new(4.0, -10.0));
    }

    #[test]
    fn test_single_landmark_route_has_no_highlight() {
        let campus = load_campus().unwrap();
        let route = find_shortest_path(&campus, "Library", "Library").unwrap();
        let scene = Scene::build(&campus, Some(&route), &RenderConfig::default()).unwrap();
        assert!(scene.highlights.is_empty());
    }

    #[test]
    fn test_invalid_highlight_rejected() {
        let campus = load_campus().unwrap();
        let not_adjacent = Route {
            nodes: vec!["College Gate".into(), "Library".into()],
            total_distance: 1,
        };
        assert_eq!(
            Scene::build(&campus, Some(&not_adjacent), &RenderConfig::default()).unwrap_err(),
            RenderError::NotAnEdge("College Gate".into(), "Library".into())
        );

        let unknown = Route {
            nodes: vec!["College Gate".into(), "Library Annex".into()],
            total_distance: 1,
        };
        assert_eq!(
            Scene::build(&campus, Some(&unknown), &RenderConfig::default()).unwrap_err(),
            RenderError::UnknownNode("Library Annex".into())
        );
    }
}
