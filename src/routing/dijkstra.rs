use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Display;

use log::debug;
use thiserror::Error;

use crate::campus::{CampusGraph, edge::Distance};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Landmark not found: {0}")]
    NodeNotFound(String),
    #[error("No path exists from {start} to {end}")]
    NoPathExists { start: String, end: String },
}

/// A walk across campus: landmark names from start to end, plus the summed walkway distances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub nodes: Vec<String>,
    pub total_distance: Distance,
}

impl Route {
    /// Consecutive landmark pairs, i.e. the walkways the route traverses.
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}

/// Best (distance, path) label found for a landmark.
type Label = (Distance, Vec<String>);

/// Shortest routes from one source to every reachable landmark.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: String,
    settled: HashMap<String, Label>,
}

impl ShortestPathTree {
    pub fn route_to(&self, end: &str) -> Result<Route, PathError> {
        match self.settled.get(end) {
            Some((distance, path)) => Ok(Route {
                nodes: path.clone(),
                total_distance: *distance,
            }),
            None => Err(PathError::NoPathExists {
                start: self.source.clone(),
                end: end.to_string(),
            }),
        }
    }
}

/// Runs Dijkstra from `start` over the whole graph.
///
/// Queue entries are ordered by (distance, path), so among equal-cost routes the lexicographically
/// smallest sequence of landmark names is settled first. Distances are strictly positive, which keeps
/// that order stable when a path is extended by one more walkway.
pub fn shortest_paths_from(campus: &CampusGraph, start: &str) -> Result<ShortestPathTree, PathError> {
    if !campus.contains(start) {
        return Err(PathError::NodeNotFound(start.to_string()));
    }

    let mut settled: HashMap<String, Label> = HashMap::with_capacity(campus.node_count());
    let mut tentative: HashMap<String, Label> = HashMap::new();
    let mut queue: BinaryHeap<Reverse<Label>> = BinaryHeap::new();
    queue.push(Reverse((0, vec![start.to_string()])));

    while let Some(Reverse((distance, path))) = queue.pop() {
        let Some(current) = path.last().cloned() else {
            continue;
        };
        // Stale entry, a better label was settled earlier
        if settled.contains_key(&current) {
            continue;
        }

        for (neighbor, weight) in campus.neighbors(&current) {
            if settled.contains_key(&neighbor.name) {
                continue;
            }
            let mut next_path = path.clone();
            next_path.push(neighbor.name.clone());
            let candidate = (distance.saturating_add(weight), next_path);
            let improves = tentative
                .get(&neighbor.name)
                .is_none_or(|best| candidate < *best);
            if improves {
                tentative.insert(neighbor.name.clone(), candidate.clone());
                queue.push(Reverse(candidate));
            }
        }

        settled.insert(current, (distance, path));
    }

    debug!(
        "[routing] Settled {} of {} landmarks from {}",
        settled.len(),
        campus.node_count(),
        start
    );
    Ok(ShortestPathTree {
        source: start.to_string(),
        settled,
    })
}

/// Minimum-distance route from `start` to `end`.
pub fn find_shortest_path(campus: &CampusGraph, start: &str, end: &str) -> Result<Route, PathError> {
    if !campus.contains(end) {
        return Err(PathError::NodeNotFound(end.to_string()));
    }
    let route = shortest_paths_from(campus, start)?.route_to(end)?;
    debug!("[routing] {} ({} units)", route, route.total_distance);
    Ok(route)
}
