use serde::{Deserialize, Serialize};

/// Travel distance along a walkway, in whole distance units.
pub type Distance = u32;

/// Undirected, weighted connection between two landmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walkway {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

impl Walkway {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: Distance) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }

    /// Returns the endpoint opposite to `name`, if `name` is one of the endpoints.
    pub fn other_end(&self, name: &str) -> Option<&str> {
        if self.from == name {
            Some(&self.to)
        } else if self.to == name {
            Some(&self.from)
        } else {
            None
        }
    }
}
