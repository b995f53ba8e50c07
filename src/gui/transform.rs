use egui::{Pos2, Rect, pos2};

use crate::{
    campus::node::Coordinate,
    gui::scene::MapRect,
};

/// Maps campus coordinates onto the canvas with one uniform scale, so the map keeps a 1:1 aspect ratio.
/// The map's y axis points up, the screen's points down.
#[derive(Debug, Clone, Copy)]
pub struct ScreenTransform {
    scale: f32,
    screen_center: Pos2,
    map_center: Coordinate,
}

impl ScreenTransform {
    /// Fits `bounds` inside `screen` shrunk by `margin` on every side, centered.
    pub fn fit(bounds: &MapRect, screen: Rect, margin: f32) -> Self {
        let available = screen.shrink(margin);
        let scale_x = available.width() / bounds.width().max(f32::EPSILON);
        let scale_y = available.height() / bounds.height().max(f32::EPSILON);
        Self {
            scale: scale_x.min(scale_y).max(0.0),
            screen_center: available.center(),
            map_center: bounds.center(),
        }
    }

    pub fn to_screen(&self, coordinate: Coordinate) -> Pos2 {
        pos2(
            self.screen_center.x + (coordinate.x - self.map_center.x) * self.scale,
            self.screen_center.y - (coordinate.y - self.map_center.y) * self.scale,
        )
    }

    pub fn to_screen_rect(&self, rect: &MapRect) -> Rect {
        Rect::from_two_pos(self.to_screen(rect.min), self.to_screen(rect.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_uniform_scale_preserves_aspect() {
        let bounds = MapRect {
            min: Coordinate::new(0.0, 0.0),
            max: Coordinate::new(20.0, 10.0),
        };
        let screen = Rect::from_min_max(pos2(0.0, 0.0), pos2(400.0, 400.0));
        let transform = ScreenTransform::fit(&bounds, screen, 0.0);

        let rect = transform.to_screen_rect(&bounds);
        assert!(approx(rect.width(), 400.0));
        assert!(approx(rect.width() / rect.height(), 2.0));
        assert!(approx(rect.center().x, 200.0) && approx(rect.center().y, 200.0));
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let bounds = MapRect {
            min: Coordinate::new(-5.0, -5.0),
            max: Coordinate::new(5.0, 5.0),
        };
        let screen = Rect::from_min_max(pos2(10.0, 10.0), pos2(110.0, 110.0));
        let transform = ScreenTransform::fit(&bounds, screen, 10.0);

        let top = transform.to_screen(Coordinate::new(0.0, 5.0));
        let bottom = transform.to_screen(Coordinate::new(0.0, -5.0));
        assert!(top.y < bottom.y);
        assert!(approx(top.y, 20.0) && approx(bottom.y, 100.0));
        let one_unit = transform.to_screen(Coordinate::new(1.0, 0.0)) - transform.to_screen(Coordinate::new(0.0, 0.0));
        assert!(approx(one_unit.x, 8.0) && approx(one_unit.y, 0.0));
    }
}
