/*!
Embedded campus dataset.

The campus map ships inside the binary as `resources/campus.json`. `CampusLayout` is its wire
format; `load_campus` deserializes it and builds the validated `CampusGraph`.
*/

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::campus::{
    campus_graph::{CampusGraph, GraphError},
    edge::Walkway,
    node::Landmark,
};

const CAMPUS_JSON: &str = include_str!("resources/campus.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Malformed campus dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid campus dataset: {0}")]
    Graph(#[from] GraphError),
}

/// Landmarks and walkways as listed in a dataset file, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampusLayout {
    pub landmarks: Vec<Landmark>,
    pub walkways: Vec<Walkway>,
}

impl CampusLayout {
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(self) -> Result<CampusGraph, DatasetError> {
        Ok(CampusGraph::from_layout(self)?)
    }
}

/// Loads the built-in campus map.
pub fn load_campus() -> Result<CampusGraph, DatasetError> {
    debug!("[dataset] Loading embedded campus dataset");
    CampusLayout::from_json(CAMPUS_JSON)?.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus::node::Coordinate;

    #[test]
    fn test_embedded_campus_loads() {
        let campus = load_campus().expect("Embedded dataset should be valid");
        assert_eq!(campus.node_count(), 11);
        assert_eq!(campus.edge_count(), 14);
        assert_eq!(
            campus.landmark("Workshop & Mech Lab").map(|l| l.position),
            Some(Coordinate::new(12.0, 6.0))
        );
        assert_eq!(
            campus.walkway_between("College Gate", "Cricket Ground").map(|w| w.distance),
            Some(2)
        );
        assert!(campus.walkways().all(|w| w.distance > 0));
    }

    #[test]
    fn test_duplicate_walkway_dataset_rejected() {
        let json = include_str!("../../test_data/duplicate_walkway_campus.json");
        let err = CampusLayout::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Graph(GraphError::DuplicateEdge(ref a, ref b)) if a == "Canteen Block" && b == "College Gate"
        ));
    }

    #[test]
    fn test_malformed_dataset_rejected() {
        let err = CampusLayout::from_json(r#"{ "landmarks": [ { "name": "Gate" } ] }"#).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let json = r#"{
            "landmarks": [
                { "name": "A", "position": { "x": 0, "y": 0 } },
                { "name": "B", "position": { "x": 1, "y": 0 } }
            ],
            "walkways": [ { "from": "A", "to": "B", "distance": -1 } ]
        }"#;
        assert!(matches!(CampusLayout::from_json(json), Err(DatasetError::Parse(_))));
    }
}
