use thiserror::Error;

use crate::{campus::CampusGraph, routing::Route};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Cannot highlight unknown landmark: {0}")]
    UnknownNode(String),
    #[error("No walkway between {0} and {1} to highlight")]
    NotAnEdge(String, String),
    #[error("Display error: {0}")]
    Display(String),
}

/// Draws the campus, optionally highlighting a route, and returns once the output is dismissed.
pub trait Renderer {
    fn render(&mut self, campus: &CampusGraph, highlight: Option<&Route>) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, campus: &CampusGraph, highlight: Option<&Route>) -> Result<(), RenderError> {
        (**self).render(campus, highlight)
    }
}
