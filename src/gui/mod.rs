/*
 * Drawing of the campus map. `scene` describes what to draw, the shape modules paint it with egui,
 * and `app` hosts the painting in a blocking eframe window.
 */

pub mod app;
pub mod edge_shape;
pub mod node_shape;
pub mod renderer;
pub mod scene;
pub mod style;
pub mod transform;

pub use app::EguiRenderer;
pub use renderer::{RenderError, Renderer};
