//! Cut lines, the cutting guide, and the flash shown on each accepted cut.
//!
//! A cut is recorded relative to the dough centre and moves rigidly with the
//! dough afterwards. Its vertical extent follows the circular outline of the
//! dough: half-height `sqrt(max(0, R² − d²))` for visual radius `R` and
//! offset `d` from the centre.

use crate::config::Tuning;
use crate::dough::Dough;
use crate::geometry::{chord_half_height, dash_segments, guide_positions, Point};

/// Peak alpha of a fresh cut flash.
const FLASH_ALPHA: f64 = 0.8;
pub const FLASH_WIDTH: f64 = 10.0;

// ════════════════════════════════════════════════════════════════════════════
// CutLine
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, PartialEq)]
pub struct CutLine {
    /// Offset from the dough centre when the cut was made. Never changes.
    pub relative_x:           f64,
    /// `|relative_x|` at creation; fixes the drawn height of the cut.
    pub distance_from_center: f64,
    /// Where the cut is drawn now.
    pub current_x:            f64,
}

impl CutLine {
    pub fn new(x: f64, dough: &Dough) -> Self {
        let relative_x = x - dough.x;
        CutLine {
            relative_x,
            distance_from_center: relative_x.abs(),
            current_x: x,
        }
    }

    pub fn half_height(&self, dough: &Dough, radius_factor: f64) -> f64 {
        chord_half_height(dough.visual_radius(radius_factor), self.distance_from_center)
    }

    /// Top and bottom end points of the cut as drawn on `dough`.
    pub fn endpoints(&self, dough: &Dough, radius_factor: f64) -> (Point, Point) {
        let h = self.half_height(dough, radius_factor);
        (
            Point::new(self.current_x, dough.y - h),
            Point::new(self.current_x, dough.y + h),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// CutRejection
// ════════════════════════════════════════════════════════════════════════════

/// Why a pointer sample did not produce a cut. Rejections are silent to the
/// player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CutRejection {
    /// Motion was not a clear vertical swipe.
    NotVertical { dx: f64, dy: f64 },
    /// Within `min_cut_distance` of the cut at `existing_x`.
    TooClose { existing_x: f64 },
    /// Pointer outside the dough's bounding box.
    OutsideDough,
    /// All required cuts already made.
    BoardFull,
}

// ════════════════════════════════════════════════════════════════════════════
// CutBoard
// ════════════════════════════════════════════════════════════════════════════

/// The cuts made on the current dough.
#[derive(Clone, Debug, Default)]
pub struct CutBoard {
    lines: Vec<CutLine>,
}

impl CutBoard {
    pub fn new() -> Self {
        CutBoard::default()
    }

    /// Decide whether the move `prev → p` cuts `dough`. On success returns
    /// the x position of the new cut.
    pub fn evaluate(
        &self,
        prev: Point,
        p: Point,
        dough: &Dough,
        tuning: &Tuning,
    ) -> Result<f64, CutRejection> {
        if self.lines.len() >= tuning.required_cuts {
            return Err(CutRejection::BoardFull);
        }

        let dx = (p.x - prev.x).abs();
        let dy = (p.y - prev.y).abs();
        if !(dy > dx && dy > tuning.min_cut_swipe) {
            return Err(CutRejection::NotVertical { dx, dy });
        }

        let x = p.x;
        if let Some(existing) = self
            .lines
            .iter()
            .find(|c| (c.current_x - x).abs() < tuning.min_cut_distance)
        {
            return Err(CutRejection::TooClose { existing_x: existing.current_x });
        }

        if !dough.bounds().contains(p) {
            return Err(CutRejection::OutsideDough);
        }
        Ok(x)
    }

    /// Record a cut at `x`. Callers check [`CutBoard::evaluate`] first.
    pub fn add(&mut self, x: f64, dough: &Dough) -> &CutLine {
        self.lines.push(CutLine::new(x, dough));
        &self.lines[self.lines.len() - 1]
    }

    /// Move every cut to `dough_x + relative_x`. Shapes are left untouched.
    pub fn reproject(&mut self, dough_x: f64) {
        for line in &mut self.lines {
            line.current_x = dough_x + line.relative_x;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CutLine] { &self.lines }
    pub fn len(&self) -> usize        { self.lines.len() }
    pub fn is_empty(&self) -> bool    { self.lines.is_empty() }
}

// ════════════════════════════════════════════════════════════════════════════
// CuttingGuide
// ════════════════════════════════════════════════════════════════════════════

/// One dashed vertical hint line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideLine {
    pub x:      f64,
    pub top:    f64,
    pub bottom: f64,
}

/// Evenly spaced hints across the dough, shown only while cutting.
#[derive(Clone, Debug, Default)]
pub struct CuttingGuide {
    lines:   Vec<GuideLine>,
    visible: bool,
}

impl CuttingGuide {
    /// Lay out `tuning.required_cuts` guides over the dough as it is now and
    /// make them visible.
    pub fn show(&mut self, dough: &Dough, tuning: &Tuning) {
        let radius = dough.visual_radius(tuning.dough_radius_factor);
        let bounds = dough.bounds();
        self.lines = guide_positions(bounds.left(), bounds.w, tuning.required_cuts)
            .into_iter()
            .map(|x| {
                let h = chord_half_height(radius, (x - dough.x).abs());
                GuideLine { x, top: dough.y - h, bottom: dough.y + h }
            })
            .collect();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool  { self.visible }
    pub fn lines(&self) -> &[GuideLine] { &self.lines }

    /// Dash segments `(x, y0, y1)` of every guide line.
    pub fn dashes(&self, dash: f64, gap: f64) -> Vec<(f64, f64, f64)> {
        self.lines
            .iter()
            .flat_map(|g| {
                dash_segments(g.top, g.bottom, dash, gap)
                    .into_iter()
                    .map(move |(y0, y1)| (g.x, y0, y1))
            })
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// CutFlash
// ════════════════════════════════════════════════════════════════════════════

/// White bar flashed over a fresh cut; fades out over a few frames.
#[derive(Clone, Debug, PartialEq)]
pub struct CutFlash {
    pub x:           f64,
    pub y:           f64,
    pub height:      f64,
    pub frames_left: u32,
    pub frames:      u32,
}

impl CutFlash {
    pub fn new(cut: &CutLine, dough: &Dough, tuning: &Tuning) -> Self {
        let frames = tuning.cut_flash_frames.max(1);
        CutFlash {
            x:           cut.current_x,
            y:           dough.y,
            height:      cut.half_height(dough, tuning.dough_radius_factor) * 2.0,
            frames_left: frames,
            frames,
        }
    }

    pub fn alpha(&self) -> f64 {
        FLASH_ALPHA * self.frames_left as f64 / self.frames as f64
    }

    /// Age one frame. Returns false once fully faded.
    pub fn tick(&mut self) -> bool {
        self.frames_left = self.frames_left.saturating_sub(1);
        self.frames_left > 0
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
