use egui::{Align2, FontId, Painter, vec2};

use crate::gui::{
    scene::{EdgeGlyph, HighlightGlyph},
    style::EdgeStyle,
    transform::ScreenTransform,
};

/// Straight line between the two landmark centers.
pub fn paint_edge(painter: &Painter, glyph: &EdgeGlyph, transform: &ScreenTransform, style: &EdgeStyle) {
    painter.line_segment(
        [transform.to_screen(glyph.from), transform.to_screen(glyph.to)],
        style.stroke,
    );
}

/// Distance text, left-aligned at the edge midpoint.
pub fn paint_weight_label(painter: &Painter, glyph: &EdgeGlyph, transform: &ScreenTransform, style: &EdgeStyle) {
    let anchor = transform.to_screen(glyph.label_anchor) + vec2(2.0, 0.0);
    painter.text(
        anchor,
        Align2::LEFT_CENTER,
        &glyph.weight_label,
        FontId::proportional(style.weight_font_size),
        style.weight_color,
    );
}

pub fn paint_highlight(painter: &Painter, glyph: &HighlightGlyph, transform: &ScreenTransform, style: &EdgeStyle) {
    painter.line_segment(
        [transform.to_screen(glyph.from), transform.to_screen(glyph.to)],
        style.highlight,
    );
}
