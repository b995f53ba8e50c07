use eframe::egui::{self, Align2, CentralPanel, Context, FontId, Key, Rect, Sense, ViewportCommand};
use log::{debug, info};

use crate::{
    campus::CampusGraph,
    config::RenderConfig,
    gui::{
        edge_shape::{paint_edge, paint_highlight, paint_weight_label},
        node_shape::paint_node,
        renderer::{RenderError, Renderer},
        scene::{SCENE_TITLE, Scene},
        style::SceneStyle,
        transform::ScreenTransform,
    },
    routing::Route,
};

/// Height reserved above the map for the title.
const TITLE_BAND: f32 = 40.0;

/// Window showing one scene. Closing it (or pressing Escape) hands control back to the caller.
struct CampusView {
    scene: Scene,
    style: SceneStyle,
    margin: f32,
}

impl CampusView {
    fn new(scene: Scene, style: SceneStyle, margin: f32) -> Self {
        Self { scene, style, margin }
    }

    fn paint(&self, painter: &egui::Painter, canvas: Rect) {
        painter.rect_filled(canvas, 0.0, self.style.background);
        painter.text(
            egui::pos2(canvas.center().x, canvas.top() + TITLE_BAND * 0.5),
            Align2::CENTER_CENTER,
            &self.scene.title,
            FontId::proportional(self.style.title_font_size),
            self.style.title_color,
        );

        let mut map_area = canvas;
        map_area.set_top(canvas.top() + TITLE_BAND);
        let transform = ScreenTransform::fit(&self.scene.bounds, map_area, self.margin);

        for edge in &self.scene.edges {
            paint_edge(painter, edge, &transform, &self.style.edge);
        }
        for segment in &self.scene.highlights {
            paint_highlight(painter, segment, &transform, &self.style.edge);
        }
        for node in &self.scene.nodes {
            paint_node(painter, node, &transform, &self.style.node);
        }
        for edge in &self.scene.edges {
            paint_weight_label(painter, edge, &transform, &self.style.edge);
        }
    }
}

impl eframe::App for CampusView {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
                self.paint(&painter, response.rect);
            });
    }
}

/// Renders into a native window and blocks until the window is closed.
pub struct EguiRenderer {
    config: RenderConfig,
}

impl EguiRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl Renderer for EguiRenderer {
    fn render(&mut self, campus: &CampusGraph, highlight: Option<&Route>) -> Result<(), RenderError> {
        let scene = Scene::build(campus, highlight, &self.config)?;
        let style = SceneStyle::from(&self.config);
        let theme = self.config.palette.theme();
        let margin = self.config.margin;

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(SCENE_TITLE)
                .with_inner_size([self.config.window_width, self.config.window_height]),
            ..Default::default()
        };

        info!(
            "[gui] Opening {} window ({} highlighted segments)",
            SCENE_TITLE,
            scene.highlights.len()
        );
        eframe::run_native(
            SCENE_TITLE,
            native_options,
            Box::new(move |cc| {
                catppuccin_egui::set_theme(&cc.egui_ctx, theme);
                Ok(Box::new(CampusView::new(scene, style, margin)) as Box<dyn eframe::App>)
            }),
        )
        .map_err(|e| RenderError::Display(e.to_string()))?;
        debug!("[gui] {} window closed", SCENE_TITLE);
        Ok(())
    }
}
