use egui::{Color32, Stroke};

use crate::config::RenderConfig;

/// Colors and strokes for one campus drawing, resolved from the config palette.
#[derive(Debug, Clone)]
pub struct SceneStyle {
    pub background: Color32,
    pub title_color: Color32,
    pub title_font_size: f32,
    pub node: NodeStyle,
    pub edge: EdgeStyle,
}

#[derive(Debug, Clone)]
pub struct NodeStyle {
    pub fill: Color32,
    pub stroke: Stroke,
    pub text_color: Color32,
    pub font_size: f32,
}

#[derive(Debug, Clone)]
pub struct EdgeStyle {
    pub stroke: Stroke,
    pub highlight: Stroke,
    pub weight_color: Color32,
    pub weight_font_size: f32,
}

impl From<&RenderConfig> for SceneStyle {
    fn from(config: &RenderConfig) -> Self {
        let theme = config.palette.theme();
        SceneStyle {
            background: theme.base,
            title_color: theme.text,
            title_font_size: config.title_font_size,
            node: NodeStyle {
                fill: config.node_fill(),
                stroke: Stroke::new(1.0, theme.text),
                text_color: theme.text,
                font_size: config.node_font_size,
            },
            edge: EdgeStyle {
                stroke: Stroke::new(config.edge_width, theme.text),
                highlight: Stroke::new(config.highlight_width, theme.red),
                weight_color: theme.blue,
                weight_font_size: config.weight_font_size,
            },
        }
    }
}
