use std::collections::HashMap;

use log::debug;
use petgraph::{Undirected, graph::NodeIndex, prelude::StableGraph, visit::EdgeRef};
use thiserror::Error;

use crate::campus::{
    dataset::CampusLayout,
    edge::{Distance, Walkway},
    node::{Coordinate, Landmark},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Landmark already exists: {0}")]
    DuplicateNode(String),
    #[error("Unknown landmark: {0}")]
    UnknownNode(String),
    #[error("Walkway from {0} to itself")]
    SelfLoop(String),
    #[error("Walkway between {0} and {1} already exists")]
    DuplicateEdge(String, String),
    #[error("Walkway between {0} and {1} must have a positive distance")]
    InvalidWeight(String, String),
}

/// Weighted undirected campus graph.
///
/// Landmarks are keyed by name; `name_to_index_map` maps names to graph indices to allow safe lookups.
/// Nothing is ever removed, so iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    graph: StableGraph<Landmark, Walkway, Undirected>,
    name_to_index_map: HashMap<String, NodeIndex>,
}

impl CampusGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a deserialized layout, validating every landmark and walkway.
    pub fn from_layout(layout: CampusLayout) -> Result<Self, GraphError> {
        let mut campus = CampusGraph::new();
        for landmark in layout.landmarks {
            campus.add_node(&landmark.name, landmark.position)?;
        }
        for walkway in layout.walkways {
            campus.add_edge(&walkway.from, &walkway.to, walkway.distance)?;
        }
        debug!(
            "[campus] Built graph with {} landmarks and {} walkways",
            campus.node_count(),
            campus.edge_count()
        );
        Ok(campus)
    }

    pub fn add_node(&mut self, name: &str, position: Coordinate) -> Result<NodeIndex, GraphError> {
        if self.name_to_index_map.contains_key(name) {
            return Err(GraphError::DuplicateNode(name.to_string()));
        }
        let index = self.graph.add_node(Landmark::new(name, position));
        self.name_to_index_map.insert(name.to_string(), index);
        Ok(index)
    }

    pub fn add_edge(&mut self, a: &str, b: &str, distance: Distance) -> Result<(), GraphError> {
        let a_index = self.index_of(a)?;
        let b_index = self.index_of(b)?;
        if a_index == b_index {
            return Err(GraphError::SelfLoop(a.to_string()));
        }
        if distance == 0 {
            return Err(GraphError::InvalidWeight(a.to_string(), b.to_string()));
        }
        if self.graph.find_edge(a_index, b_index).is_some() {
            return Err(GraphError::DuplicateEdge(a.to_string(), b.to_string()));
        }
        self.graph.add_edge(a_index, b_index, Walkway::new(a, b, distance));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index_map.contains_key(name)
    }

    pub fn landmark(&self, name: &str) -> Option<&Landmark> {
        let index = self.name_to_index_map.get(name)?;
        self.graph.node_weight(*index)
    }

    pub fn walkway_between(&self, a: &str, b: &str) -> Option<&Walkway> {
        let a_index = self.name_to_index_map.get(a)?;
        let b_index = self.name_to_index_map.get(b)?;
        let edge = self.graph.find_edge(*a_index, *b_index)?;
        self.graph.edge_weight(edge)
    }

    pub fn landmarks(&self) -> impl Iterator<Item = &Landmark> {
        self.graph
            .node_indices()
            .filter_map(|index| self.graph.node_weight(index))
    }

    pub fn walkways(&self) -> impl Iterator<Item = &Walkway> {
        self.graph
            .edge_indices()
            .filter_map(|index| self.graph.edge_weight(index))
    }

    /// Landmarks adjacent to `name` together with the distance of the connecting walkway.
    /// Empty for an unknown name.
    pub fn neighbors<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (&'a Landmark, Distance)> + 'a {
        let index = self.name_to_index_map.get(name).copied();
        index
            .into_iter()
            .flat_map(move |index| self.graph.edges(index))
            .filter_map(move |edge| {
                let walkway = self.graph.edge_weight(edge.id())?;
                let other = walkway.other_end(name)?;
                self.landmark(other).map(|landmark| (landmark, walkway.distance))
            })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn index_of(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.name_to_index_map
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }
}
