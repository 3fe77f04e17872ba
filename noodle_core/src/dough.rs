//! The dough: the single interactive object, and its fixed path anchors.

use crate::config::{DoughSize, Viewport};
use crate::geometry::{Point, Rect};

/// Vertical offset that leaves the bottom of the dough peeking in at the top
/// of the canvas.
const PEEK_PX: f64 = 50.0;

// ════════════════════════════════════════════════════════════════════════════
// Dough
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, PartialEq)]
pub struct Dough {
    pub x:        f64,
    pub y:        f64,
    /// Radians.
    pub rotation: f64,
    /// Never below 1.0.
    pub scale:    f64,
    pub size:     DoughSize,
}

impl Dough {
    pub fn new(x: f64, y: f64, size: DoughSize) -> Self {
        Dough { x, y, rotation: 0.0, scale: 1.0, size }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn display_width(&self) -> f64 {
        self.size.width * self.scale
    }

    pub fn display_height(&self) -> f64 {
        self.size.height * self.scale
    }

    /// Current bounding box from position and scaled size.
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position(), self.display_width(), self.display_height())
    }

    /// Radius of the round dough as drawn, slightly inside the sprite box.
    pub fn visual_radius(&self, factor: f64) -> f64 {
        self.display_height() / 2.0 * factor
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.max(1.0);
    }

    /// Back to the start pose at horizontal position `x`.
    pub fn reset(&mut self, x: f64, start_y: f64) {
        self.x = x;
        self.y = start_y;
        self.rotation = 0.0;
        self.scale = 1.0;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DoughAnchors
// ════════════════════════════════════════════════════════════════════════════

/// Path anchors computed once when the scene is created. Later canvas resizes
/// move the HUD only; these stay where they were.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoughAnchors {
    /// Resting y before the pull; upper clamp of the pull.
    pub start_y:  f64,
    /// Target y of the pull; lower clamp of the pull.
    pub center_y: f64,
    /// x at which a dough moving right counts as finished.
    pub end_x:    f64,
}

impl DoughAnchors {
    pub fn compute(viewport: Viewport, size: DoughSize) -> Self {
        let start_y = -size.height / 2.0 + PEEK_PX;
        DoughAnchors {
            start_y,
            // A tiny canvas must not put the pull target above the start.
            center_y: (viewport.height / 3.0).max(start_y),
            end_x:    viewport.width + size.width / 2.0,
        }
    }
}
