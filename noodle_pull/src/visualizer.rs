//! Software-rendered visualizer using `minifb`.
//!
//! Layout (default 640×960 canvas, resizable):
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ [DEBUG]           (dough     │
//! │ debug panel        peeks in) │
//! │                              │
//! │          ( dough )           │
//! │     ╎  ╎  ╎  ╎  ╎  ╎  ╎  ╎   │  guides while cutting
//! │   instruction / subtitle     │
//! │          [Noodles: n]        │
//! │   [██████ progress ░░░░░]    │
//! └──────────────────────────────┘
//! ```
//!
//! [`Canvas`] rasterizes [`DrawCommand`]s into a `u32` framebuffer and has no
//! window of its own; [`Visualizer`] owns the window, samples the mouse and
//! keyboard into [`WindowInput`]s and presents the canvas.

use std::ops::Range;
use std::sync::mpsc::Sender;

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, ScaleMode, Window, WindowOptions};
use noodle_core::geometry::Rect;
use noodle_core::scene::{DrawCommand, TextAnchor};
use noodle_core::Point;
use tracing::warn;

use crate::pointer::WindowInput;

const TARGET_FPS:        usize = 60;
const DOUGH_RING_WIDTH:  f64   = 3.0;
/// Spoke length relative to the dough radius; the spoke shows the spin.
const DOUGH_SPOKE_RATIO: f64   = 0.6;
/// Glyph cells are 3×5 plus one column of spacing.
const GLYPH_ADVANCE:     usize = 4;
const GLYPH_ROWS:        usize = 5;
/// Text size (px) per glyph scale step.
const TEXT_SIZE_PER_SCALE: f64 = 8.0;

// ════════════════════════════════════════════════════════════════════════════
// Canvas
// ════════════════════════════════════════════════════════════════════════════

/// Off-screen 0xRRGGBB framebuffer.
pub struct Canvas {
    buf: Vec<u32>,
    w:   usize,
    h:   usize,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        Canvas { buf: vec![0; w * h], w, h }
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.buf = vec![0; w * h];
    }

    pub fn width(&self)  -> usize  { self.w }
    pub fn height(&self) -> usize  { self.h }
    pub fn pixels(&self) -> &[u32] { &self.buf }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.w && y < self.h).then(|| self.buf[y * self.w + x])
    }

    /// Paint `cmds` in order.
    pub fn draw(&mut self, cmds: &[DrawCommand]) {
        for cmd in cmds {
            match cmd {
                DrawCommand::Clear { color } => self.buf.fill(*color),
                DrawCommand::Dough { center, radius, rotation, fill, stroke } => {
                    self.fill_circle(*center, *radius, *fill, 1.0);
                    self.ring(*center, *radius, DOUGH_RING_WIDTH, *stroke, 1.0);
                    let tip = Point::new(
                        center.x + radius * DOUGH_SPOKE_RATIO * rotation.cos(),
                        center.y + radius * DOUGH_SPOKE_RATIO * rotation.sin(),
                    );
                    self.line(*center, tip, DOUGH_RING_WIDTH, *stroke, 1.0);
                }
                DrawCommand::FillRect { rect, color, alpha } => self.fill_rect(*rect, *color, *alpha),
                DrawCommand::StrokeRect { rect, width, color, alpha } => {
                    self.stroke_rect(*rect, *width, *color, *alpha)
                }
                DrawCommand::FillCircle { center, radius, color, alpha } => {
                    self.fill_circle(*center, *radius, *color, *alpha)
                }
                DrawCommand::Line { from, to, width, color, alpha } => {
                    self.line(*from, *to, *width, *color, *alpha)
                }
                DrawCommand::Polyline { points, width, color, alpha } => {
                    for pair in points.windows(2) {
                        self.line(pair[0], pair[1], *width, *color, *alpha);
                    }
                }
                DrawCommand::Text { at, text, size, color, anchor } => {
                    self.text(*at, text, *size, *color, *anchor)
                }
            }
        }
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    fn blend_pixel(&mut self, x: usize, y: usize, color: u32, alpha: f64) {
        if x < self.w && y < self.h {
            let i = y * self.w + x;
            self.buf[i] = blend(self.buf[i], color, alpha);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: u32, alpha: f64) {
        for y in span(rect.top(), rect.bottom(), self.h) {
            for x in span(rect.left(), rect.right(), self.w) {
                self.blend_pixel(x, y, color, alpha);
            }
        }
    }

    /// Border drawn inside `rect`, `width` px thick.
    fn stroke_rect(&mut self, rect: Rect, width: f64, color: u32, alpha: f64) {
        let t = width.min(rect.w / 2.0).min(rect.h / 2.0).max(1.0);
        let inner_h = (rect.h - 2.0 * t).max(0.0);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, t), color, alpha);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.w, t), color, alpha);
        self.fill_rect(Rect::new(rect.x, rect.y + t, t, inner_h), color, alpha);
        self.fill_rect(Rect::new(rect.right() - t, rect.y + t, t, inner_h), color, alpha);
    }

    fn fill_circle(&mut self, c: Point, r: f64, color: u32, alpha: f64) {
        self.annulus(c, 0.0, r, color, alpha);
    }

    fn ring(&mut self, c: Point, r: f64, width: f64, color: u32, alpha: f64) {
        self.annulus(c, (r - width).max(0.0), r, color, alpha);
    }

    fn annulus(&mut self, c: Point, inner: f64, outer: f64, color: u32, alpha: f64) {
        for y in span(c.y - outer, c.y + outer, self.h) {
            for x in span(c.x - outer, c.x + outer, self.w) {
                let dx = x as f64 + 0.5 - c.x;
                let dy = y as f64 + 0.5 - c.y;
                let d2 = dx * dx + dy * dy;
                if d2 <= outer * outer && d2 >= inner * inner {
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    /// Thick segment: every pixel whose centre lies within `width / 2` of it.
    fn line(&mut self, a: Point, b: Point, width: f64, color: u32, alpha: f64) {
        let half = (width / 2.0).max(0.5);
        let ys = span(a.y.min(b.y) - half, a.y.max(b.y) + half, self.h);
        let xs = span(a.x.min(b.x) - half, a.x.max(b.x) + half, self.w);
        for y in ys {
            for x in xs.clone() {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if distance_to_segment(p, a, b) <= half {
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    /// Minimal bitmap font: 3×5 glyphs, scaled up by whole pixels.
    fn text(&mut self, at: Point, text: &str, size: f64, color: u32, anchor: TextAnchor) {
        let s = ((size / TEXT_SIZE_PER_SCALE).round() as usize).max(1);
        let (w, h) = text_extent(text, s);
        let origin = match anchor {
            TextAnchor::TopLeft => at,
            TextAnchor::Center  => Point::new(at.x - w as f64 / 2.0, at.y - h as f64 / 2.0),
        };
        let cell = s as f64;
        for (i, ch) in text.chars().enumerate() {
            let cx = origin.x + (i * GLYPH_ADVANCE * s) as f64;
            for (row, &bits) in char_glyph(ch).iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        let px = Rect::new(cx + col as f64 * cell, origin.y + row as f64 * cell, cell, cell);
                        self.fill_rect(px, color, 1.0);
                    }
                }
            }
        }
    }
}

/// Pixel indices covered by `[lo, hi)`, clipped to `0..limit`.
fn span(lo: f64, hi: f64, limit: usize) -> Range<usize> {
    let clip = |v: f64| v.round().clamp(0.0, limit as f64) as usize;
    clip(lo)..clip(hi)
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    let t = if len2 > 0.0 {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (qx, qy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - qx).powi(2) + (p.y - qy).powi(2)).sqrt()
}

/// Width and height in pixels of `text` at glyph scale `s`.
fn text_extent(text: &str, s: usize) -> (usize, usize) {
    let n = text.chars().count();
    ((n * GLYPH_ADVANCE).saturating_sub(1) * s, GLYPH_ROWS * s)
}

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window:   Window,
    canvas:   Canvas,
    input_tx: Sender<WindowInput>,
}

impl Visualizer {
    pub fn new(input_tx: Sender<WindowInput>, width: usize, height: usize) -> Result<Self, String> {
        let mut window = Window::new(
            "Noodle Pull",
            width, height,
            WindowOptions {
                resize: true,
                scale_mode: ScaleMode::UpperLeft,
                ..WindowOptions::default()
            },
        ).map_err(|e| e.to_string())?;

        window.set_target_fps(TARGET_FPS);

        Ok(Visualizer {
            window,
            canvas: Canvas::new(width, height),
            input_tx,
        })
    }

    /// Returns false when the window should close.
    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Sample keyboard, window size and mouse; forward them as
    /// [`WindowInput`]s. Returns false when the user asked to quit.
    pub fn poll_input(&mut self) -> bool {
        if !self.window.is_open() { return false; }

        let one_shot = |k: Key| self.window.is_key_pressed(k, KeyRepeat::No);

        if one_shot(Key::Q) || one_shot(Key::Escape) {
            let _ = self.input_tx.send(WindowInput::QuitKey);
            return false;
        }
        if one_shot(Key::Tab) {
            let _ = self.input_tx.send(WindowInput::DebugKey);
        }

        let (w, h) = self.window.get_size();
        if w > 0 && h > 0 && (w, h) != (self.canvas.width(), self.canvas.height()) {
            self.canvas.resize(w, h);
            let _ = self.input_tx.send(WindowInput::Resized { width: w, height: h });
        }

        let pos = self
            .window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x as f64, y as f64));
        let down = self.window.get_mouse_down(MouseButton::Left);
        let _ = self.input_tx.send(WindowInput::Sample { pos, down });

        true
    }

    /// Render one frame.
    pub fn render(&mut self, cmds: &[DrawCommand]) {
        self.canvas.draw(cmds);
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if let Err(e) = self.window.update_with_buffer(self.canvas.pixels(), w, h) {
            warn!(error = %e, width = w, height = h, "framebuffer update failed");
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' | 'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '%' => [0b101, 0b001, 0b010, 0b100, 0b101],
        '(' => [0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => [0b100, 0b010, 0b010, 0b010, 0b100],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _   => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

/// Alpha-blend `src` over `dst`. `alpha` = 0.0 → all `dst`, 1.0 → all `src`.
fn blend(dst: u32, src: u32, alpha: f64) -> u32 {
    let t = alpha.clamp(0.0, 1.0);
    let lerp = |cd: u32, cs: u32| (cd as f64 * (1.0 - t) + cs as f64 * t).round() as u32;
    let dr = (dst >> 16) & 0xFF; let sr = (src >> 16) & 0xFF;
    let dg = (dst >>  8) & 0xFF; let sg = (src >>  8) & 0xFF;
    let db =  dst        & 0xFF; let sb =  src        & 0xFF;
    (lerp(dr, sr) << 16) | (lerp(dg, sg) << 8) | lerp(db, sb)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints_and_midpoint() {
        assert_eq!(blend(0x000000, 0xFFFFFF, 0.0), 0x000000);
        assert_eq!(blend(0x000000, 0xFFFFFF, 1.0), 0xFFFFFF);
        assert_eq!(blend(0x000000, 0xFF0000, 0.5), 0x800000);
        assert_eq!(blend(0x123456, 0xABCDEF, 7.0), 0xABCDEF);
    }

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut c = Canvas::new(10, 10);
        c.draw(&[DrawCommand::FillRect { rect: Rect::new(-5.0, 8.0, 8.0, 10.0), color: 0xFF0000, alpha: 1.0 }]);
        assert_eq!(c.pixel(0, 9), Some(0xFF0000));
        assert_eq!(c.pixel(2, 8), Some(0xFF0000));
        assert_eq!(c.pixel(3, 8), Some(0));
        assert_eq!(c.pixel(0, 7), Some(0));
        assert_eq!(c.pixel(10, 0), None);
    }

    #[test]
    fn vertical_line_width() {
        let mut c = Canvas::new(20, 20);
        c.draw(&[DrawCommand::Line {
            from: Point::new(10.0, 2.0),
            to: Point::new(10.0, 18.0),
            width: 4.0,
            color: 0xFFFFFF,
            alpha: 1.0,
        }]);
        let lit: Vec<usize> = (0..20).filter(|&x| c.pixel(x, 10) == Some(0xFFFFFF)).collect();
        assert_eq!(lit, vec![8, 9, 10, 11]);
    }

    #[test]
    fn circle_is_round() {
        let mut c = Canvas::new(40, 40);
        c.draw(&[DrawCommand::FillCircle { center: Point::new(20.0, 20.0), radius: 10.0, color: 0x00FF00, alpha: 1.0 }]);
        assert_eq!(c.pixel(20, 20), Some(0x00FF00));
        assert_eq!(c.pixel(20, 11), Some(0x00FF00));
        assert_eq!(c.pixel(11, 11), Some(0));
    }

    #[test]
    fn clear_then_translucent_rect() {
        let mut c = Canvas::new(4, 4);
        c.draw(&[
            DrawCommand::Clear { color: 0x000000 },
            DrawCommand::FillRect { rect: Rect::new(0.0, 0.0, 4.0, 4.0), color: 0x0000FF, alpha: 0.5 },
        ]);
        assert!(c.pixels().iter().all(|&p| p == 0x000080));
    }

    #[test]
    fn centered_text_straddles_anchor() {
        let (w, h) = text_extent("0%", 2);
        assert_eq!((w, h), (14, 10));
        let mut c = Canvas::new(40, 40);
        c.draw(&[DrawCommand::Text {
            at: Point::new(20.0, 20.0),
            text: "8".into(),
            size: 16.0,
            color: 0xFFFFFF,
            anchor: TextAnchor::Center,
        }]);
        // '8' is 6×10 at scale 2: x 17..23, y 15..25; its top row is solid.
        assert_eq!(c.pixel(17, 15), Some(0xFFFFFF));
        assert_eq!(c.pixel(22, 15), Some(0xFFFFFF));
        assert_eq!(c.pixel(16, 15), Some(0));
    }

    #[test]
    fn stroke_rect_leaves_interior() {
        let mut c = Canvas::new(20, 20);
        c.draw(&[DrawCommand::StrokeRect { rect: Rect::new(2.0, 2.0, 10.0, 10.0), width: 2.0, color: 0xFFFFFF, alpha: 1.0 }]);
        assert_eq!(c.pixel(2, 2), Some(0xFFFFFF));
        assert_eq!(c.pixel(11, 6), Some(0xFFFFFF));
        assert_eq!(c.pixel(6, 6), Some(0));
    }
}
