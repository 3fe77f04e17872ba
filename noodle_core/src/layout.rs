//! HUD placement as a pure function of the canvas size.

use crate::geometry::{Point, Rect};

pub const PROGRESS_BAR_W: f64 = 300.0;
pub const PROGRESS_BAR_H: f64 = 40.0;
/// Keeps the bar clear of notches and home indicators.
const SAFE_BOTTOM_PADDING: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HudLayout {
    pub progress_bar:   Rect,
    /// Left edge and vertical centre of the fill; the fill grows rightward.
    pub progress_fill:  Point,
    pub progress_text:  Point,
    pub instruction:    Point,
    pub subtitle:       Point,
    pub counter_box:    Rect,
    pub counter_title:  Point,
    pub counter_value:  Point,
    pub debug_panel:    Rect,
    pub debug_button:   Rect,
}

impl HudLayout {
    pub fn compute(width: f64, height: f64, dough_center_y: f64) -> Self {
        let bar_y = height - SAFE_BOTTOM_PADDING;
        HudLayout {
            progress_bar:  Rect::centered(Point::new(width / 2.0, bar_y), PROGRESS_BAR_W, PROGRESS_BAR_H),
            progress_fill: Point::new(width / 2.0 - PROGRESS_BAR_W / 2.0, bar_y),
            progress_text: Point::new(width / 2.0, bar_y),
            instruction:   Point::new(width / 2.0, dough_center_y + 150.0),
            subtitle:      Point::new(width / 2.0, dough_center_y + 180.0),
            counter_box:   Rect::new(width - 150.0, 20.0, 130.0, 60.0),
            counter_title: Point::new(width - 85.0, 35.0),
            counter_value: Point::new(width - 85.0, 60.0),
            debug_panel:   Rect::new(10.0, 10.0, 250.0, 120.0),
            debug_button:  Rect::centered(Point::new(60.0, 60.0), 80.0, 80.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas_positions() {
        let l = HudLayout::compute(640.0, 960.0, 320.0);
        assert_eq!(l.progress_bar, Rect::new(170.0, 860.0, 300.0, 40.0));
        assert_eq!(l.progress_fill, Point::new(170.0, 880.0));
        assert_eq!(l.instruction, Point::new(320.0, 470.0));
        assert_eq!(l.subtitle, Point::new(320.0, 500.0));
        assert_eq!(l.counter_box.x, 490.0);
        assert_eq!(l.counter_value, Point::new(555.0, 60.0));
    }

    #[test]
    fn follows_resize() {
        let a = HudLayout::compute(640.0, 960.0, 320.0);
        let b = HudLayout::compute(1280.0, 720.0, 320.0);
        assert_eq!(b.progress_text, Point::new(640.0, 640.0));
        assert_eq!(b.counter_title.x - a.counter_title.x, 640.0);
        // Anchored to the dough, not the canvas height.
        assert_eq!(a.instruction.y, b.instruction.y);
        assert_eq!(a.debug_button, b.debug_button);
    }
}
