use egui::{Align2, FontId, Painter, StrokeKind};

use crate::gui::{scene::NodeGlyph, style::NodeStyle, transform::ScreenTransform};

/// Filled rectangle with the landmark name centered inside.
pub fn paint_node(painter: &Painter, glyph: &NodeGlyph, transform: &ScreenTransform, style: &NodeStyle) {
    let rect = transform.to_screen_rect(&glyph.rect);
    painter.rect(rect, 0.0, style.fill, style.stroke, StrokeKind::Middle);

    // Shrink the label with the box when the window gets small
    let font_size = style.font_size.min(rect.height() * 0.5).max(1.0);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        &glyph.label,
        FontId::proportional(font_size),
        style.text_color,
    );
}
