/*
 * This module defines the campus graph used by the path finder and the GUI.
 * It also provides the embedded campus dataset and the loader that builds the graph from it.
 */

pub mod campus_graph;
pub mod dataset;
pub mod edge;
pub mod node;

pub use campus_graph::CampusGraph;
pub use dataset::{DatasetError, load_campus};
