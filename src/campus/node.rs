use serde::{Deserialize, Serialize};

/// Position of a landmark on the campus map, in map units with the y axis pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    pub fn new(x: f32, y: f32) -> Self {
        Coordinate { x, y }
    }

    pub fn midpoint(&self, other: &Coordinate) -> Coordinate {
        Coordinate {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }
}

impl From<(f32, f32)> for Coordinate {
    fn from((x, y): (f32, f32)) -> Self {
        Coordinate { x, y }
    }
}

/// A named campus location. The name is the landmark's identity within a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub position: Coordinate,
}

impl Landmark {
    pub fn new(name: impl Into<String>, position: impl Into<Coordinate>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }
}
