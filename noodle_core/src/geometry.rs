//! Plane geometry used by the gesture handlers and the scene composer.
//!
//! All coordinates are canvas pixels with `y` growing downward.

// ════════════════════════════════════════════════════════════════════════════
// Point / Rect
// ════════════════════════════════════════════════════════════════════════════

/// A single pointer position or scene coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` centred on `c`.
    pub fn centered(c: Point, w: f64, h: f64) -> Self {
        Rect { x: c.x - w / 2.0, y: c.y - h / 2.0, w, h }
    }

    pub fn left(&self)   -> f64 { self.x }
    pub fn right(&self)  -> f64 { self.x + self.w }
    pub fn top(&self)    -> f64 { self.y }
    pub fn bottom(&self) -> f64 { self.y + self.h }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Inclusive on every edge: a pointer exactly on the border is inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Angles
// ════════════════════════════════════════════════════════════════════════════

/// Angle of `p` around `center` in degrees, `atan2(dy, dx)`.
pub fn pointer_angle_deg(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x).to_degrees()
}

/// Signed shortest rotation from `from` to `to`, normalized into (-180, 180].
///
/// A sample crossing the ±180° seam yields a small delta, not a near-full turn.
pub fn angle_difference(from: f64, to: f64) -> f64 {
    let mut diff = to - from;
    if !diff.is_finite() {
        return 0.0;
    }
    while diff > 180.0 {
        diff -= 360.0;
    }
    while diff <= -180.0 {
        diff += 360.0;
    }
    diff
}

// ════════════════════════════════════════════════════════════════════════════
// Cut-line geometry
// ════════════════════════════════════════════════════════════════════════════

/// Half the vertical chord of a circle of radius `radius` at horizontal
/// offset `offset` from its centre: `sqrt(max(0, R² − d²))`.
///
/// Offsets beyond the radius give `0.0`, never NaN.
pub fn chord_half_height(radius: f64, offset: f64) -> f64 {
    (radius * radius - offset * offset).max(0.0).sqrt()
}

/// `n` evenly spaced x positions strictly inside `[left, left + width]`.
pub fn guide_positions(left: f64, width: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| left + ((i + 1) as f64 * width / (n + 1) as f64))
        .collect()
}

/// Split the vertical span `[top, bottom)` into dashes of length `dash`
/// separated by `gap`. The last dash is clipped to `bottom`.
pub fn dash_segments(top: f64, bottom: f64, dash: f64, gap: f64) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    if dash <= 0.0 || !(bottom > top) {
        return out;
    }
    let step = dash + gap.max(0.0);
    let mut y = top;
    while y < bottom {
        out.push((y, (y + dash).min(bottom)));
        y += step;
    }
    out
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_difference_wraps_across_seam() {
        let d = angle_difference(179.0, -179.0);
        assert!((d - 2.0).abs() < 1e-9, "got {}", d);
        let d = angle_difference(-179.0, 179.0);
        assert!((d + 2.0).abs() < 1e-9, "got {}", d);
    }

    #[test]
    fn angle_difference_range() {
        for from in (-720..=720).step_by(37) {
            for to in (-720..=720).step_by(41) {
                let d = angle_difference(from as f64, to as f64);
                assert!(d > -180.0 && d <= 180.0, "{} -> {} gave {}", from, to, d);
            }
        }
        assert_eq!(angle_difference(0.0, 180.0), 180.0);
        assert_eq!(angle_difference(0.0, -180.0), 180.0);
    }

    #[test]
    fn pointer_angle_quadrants() {
        let c = Point::new(100.0, 100.0);
        assert_eq!(pointer_angle_deg(c, Point::new(200.0, 100.0)), 0.0);
        assert!((pointer_angle_deg(c, Point::new(100.0, 200.0)) - 90.0).abs() < 1e-9);
        assert!((pointer_angle_deg(c, Point::new(0.0, 100.0)) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn chord_inside_and_outside_radius() {
        assert_eq!(chord_half_height(5.0, 3.0), 4.0);
        assert_eq!(chord_half_height(5.0, 0.0), 5.0);
        assert_eq!(chord_half_height(5.0, 5.0), 0.0);
        let outside = chord_half_height(5.0, 9.0);
        assert_eq!(outside, 0.0);
        assert!(!outside.is_nan());
    }

    #[test]
    fn guide_positions_even_spacing() {
        let xs = guide_positions(0.0, 90.0, 8);
        assert_eq!(xs.len(), 8);
        assert_eq!(xs[0], 10.0);
        assert_eq!(xs[7], 80.0);
        for w in xs.windows(2) {
            assert!((w[1] - w[0] - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn dash_segments_clip_last() {
        let d = dash_segments(0.0, 22.0, 5.0, 5.0);
        assert_eq!(d, vec![(0.0, 5.0), (10.0, 15.0), (20.0, 22.0)]);
        assert!(dash_segments(10.0, 10.0, 5.0, 5.0).is_empty());
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let r = Rect::centered(Point::new(0.0, 0.0), 10.0, 4.0);
        assert!(r.contains(Point::new(5.0, 2.0)));
        assert!(r.contains(Point::new(-5.0, -2.0)));
        assert!(!r.contains(Point::new(5.01, 0.0)));
    }
}
