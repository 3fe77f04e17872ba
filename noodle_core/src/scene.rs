//! Declarative draw payload.
//!
//! [`compose`] turns the machine's current state into an ordered list of
//! [`DrawCommand`]s (painter's order, back to front). Renderers only
//! rasterize; no game decision is made past this point.

use crate::cut::FLASH_WIDTH;
use crate::geometry::{Point, Rect};
use crate::layout::PROGRESS_BAR_H;
use crate::machine::NoodleMachine;

// ════════════════════════════════════════════════════════════════════════════
// Palette (0xRRGGBB)
// ════════════════════════════════════════════════════════════════════════════

pub const BACKGROUND:     u32 = 0x000000;
pub const DOUGH_FILL:     u32 = 0xF5E6C8;
pub const DOUGH_STROKE:   u32 = 0xE6D2A8;
pub const GUIDE_COLOR:    u32 = 0x00FFFF;
pub const CUT_COLOR:      u32 = 0xFFFFFF;
pub const CUT_SHADOW:     u32 = 0x000000;
pub const PANEL_FILL:     u32 = 0x333333;
pub const PANEL_STROKE:   u32 = 0x555555;
pub const PROGRESS_FILL:  u32 = 0x00AAFF;
pub const TEXT_COLOR:     u32 = 0xFFFFFF;
pub const SUBTITLE_COLOR: u32 = 0xAAAAAA;

/// Radius of the drawn dough relative to its display height.
const DOUGH_DRAW_RATIO: f64 = 0.4;
const TRAIL_DOT_RADIUS: f64 = 8.0;
const CUT_SHADOW_OFFSET: f64 = 2.0;

// ════════════════════════════════════════════════════════════════════════════
// DrawCommand
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Center,
    TopLeft,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { color: u32 },
    /// The dough sprite. `rotation` is radians.
    Dough { center: Point, radius: f64, rotation: f64, fill: u32, stroke: u32 },
    FillRect { rect: Rect, color: u32, alpha: f64 },
    StrokeRect { rect: Rect, width: f64, color: u32, alpha: f64 },
    FillCircle { center: Point, radius: f64, color: u32, alpha: f64 },
    Line { from: Point, to: Point, width: f64, color: u32, alpha: f64 },
    Polyline { points: Vec<Point>, width: f64, color: u32, alpha: f64 },
    Text { at: Point, text: String, size: f64, color: u32, anchor: TextAnchor },
}

fn text(at: Point, s: impl Into<String>, size: f64, color: u32, anchor: TextAnchor) -> DrawCommand {
    DrawCommand::Text { at, text: s.into(), size, color, anchor }
}

// ════════════════════════════════════════════════════════════════════════════
// compose
// ════════════════════════════════════════════════════════════════════════════

pub fn compose(m: &NoodleMachine) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(128);
    out.push(DrawCommand::Clear { color: BACKGROUND });

    let dough = m.dough();
    out.push(DrawCommand::Dough {
        center:   dough.position(),
        radius:   dough.display_height() * DOUGH_DRAW_RATIO,
        rotation: dough.rotation,
        fill:     DOUGH_FILL,
        stroke:   DOUGH_STROKE,
    });

    let tuning = m.tuning();
    if m.guide().is_visible() {
        for (x, y0, y1) in m.guide().dashes(tuning.guide_dash, tuning.guide_gap) {
            out.push(DrawCommand::Line {
                from:  Point::new(x, y0),
                to:    Point::new(x, y1),
                width: 2.0,
                color: GUIDE_COLOR,
                alpha: 0.7,
            });
        }
    }

    for cut in m.cuts().lines() {
        let (top, bottom) = cut.endpoints(dough, tuning.dough_radius_factor);
        out.push(DrawCommand::Line { from: top, to: bottom, width: 4.0, color: CUT_COLOR, alpha: 0.9 });
        out.push(DrawCommand::Line {
            from:  Point::new(top.x + CUT_SHADOW_OFFSET, top.y),
            to:    Point::new(bottom.x + CUT_SHADOW_OFFSET, bottom.y),
            width: 2.0,
            color: CUT_SHADOW,
            alpha: 0.5,
        });
        out.push(DrawCommand::Line { from: top, to: bottom, width: 6.0, color: CUT_COLOR, alpha: 0.3 });
    }

    for flash in m.flashes() {
        out.push(DrawCommand::FillRect {
            rect:  Rect::centered(Point::new(flash.x, flash.y), FLASH_WIDTH, flash.height),
            color: CUT_COLOR,
            alpha: flash.alpha(),
        });
    }

    compose_trail(m, &mut out);
    compose_hud(m, &mut out);
    out
}

fn compose_trail(m: &NoodleMachine, out: &mut Vec<DrawCommand>) {
    let trail = m.trail();
    if trail.is_empty() {
        return;
    }
    let color = m.phase().trail_color();
    for (center, alpha) in trail.faded() {
        out.push(DrawCommand::FillCircle { center, radius: TRAIL_DOT_RADIUS, color, alpha });
    }
    if trail.len() > 1 {
        out.push(DrawCommand::Polyline {
            points: trail.points().copied().collect(),
            width:  4.0,
            color,
            alpha:  0.5,
        });
    }
}

fn compose_hud(m: &NoodleMachine, out: &mut Vec<DrawCommand>) {
    let layout = m.layout();
    let phase = m.phase();

    // Progress bar
    let progress = m.progress_display();
    out.push(DrawCommand::FillRect { rect: layout.progress_bar, color: PANEL_FILL, alpha: 1.0 });
    out.push(DrawCommand::StrokeRect {
        rect:  layout.progress_bar,
        width: 2.0,
        color: PANEL_STROKE,
        alpha: 1.0,
    });
    let fill_w = layout.progress_bar.w * progress.fraction.clamp(0.0, 1.0);
    if fill_w > 0.0 {
        out.push(DrawCommand::FillRect {
            rect: Rect::new(
                layout.progress_fill.x,
                layout.progress_fill.y - PROGRESS_BAR_H / 2.0,
                fill_w,
                PROGRESS_BAR_H,
            ),
            color: PROGRESS_FILL,
            alpha: 1.0,
        });
    }
    out.push(text(layout.progress_text, progress.label, 20.0, TEXT_COLOR, TextAnchor::Center));

    // Instructions
    out.push(text(layout.instruction, phase.instruction(), 24.0, TEXT_COLOR, TextAnchor::Center));
    out.push(text(layout.subtitle, phase.subtitle(), 18.0, SUBTITLE_COLOR, TextAnchor::Center));

    // Completed-dough counter
    out.push(DrawCommand::FillRect { rect: layout.counter_box, color: PANEL_FILL, alpha: 0.8 });
    out.push(DrawCommand::StrokeRect {
        rect:  layout.counter_box,
        width: 2.0,
        color: PANEL_STROKE,
        alpha: 1.0,
    });
    out.push(text(layout.counter_title, "Noodles:", 16.0, TEXT_COLOR, TextAnchor::Center));
    out.push(text(layout.counter_value, m.completed().to_string(), 24.0, TEXT_COLOR, TextAnchor::Center));

    // Debug panel, then its button on top
    if m.debug_visible() {
        let panel = layout.debug_panel;
        out.push(DrawCommand::FillRect { rect: panel, color: BACKGROUND, alpha: 0.7 });
        out.push(text(
            Point::new(panel.x + 10.0, panel.y + 10.0),
            "DEBUG INFO",
            16.0,
            TEXT_COLOR,
            TextAnchor::TopLeft,
        ));
        for (i, line) in m.debug_lines().into_iter().enumerate() {
            out.push(text(
                Point::new(panel.x + 10.0, panel.y + 35.0 + 25.0 * i as f64),
                line,
                14.0,
                TEXT_COLOR,
                TextAnchor::TopLeft,
            ));
        }
    }
    out.push(DrawCommand::FillRect { rect: layout.debug_button, color: PROGRESS_FILL, alpha: 0.8 });
    out.push(DrawCommand::StrokeRect {
        rect:  layout.debug_button,
        width: 4.0,
        color: TEXT_COLOR,
        alpha: 1.0,
    });
    out.push(text(layout.debug_button.center(), "DEBUG", 20.0, TEXT_COLOR, TextAnchor::Center));
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(cmds: &[DrawCommand]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn lines_of_color(cmds: &[DrawCommand], wanted: u32) -> usize {
        cmds.iter()
            .filter(|c| matches!(c, DrawCommand::Line { color, .. } if *color == wanted))
            .count()
    }

    #[test]
    fn initial_scene() {
        let m = NoodleMachine::default();
        let cmds = compose(&m);
        assert_eq!(cmds[0], DrawCommand::Clear { color: BACKGROUND });
        assert!(matches!(cmds[1], DrawCommand::Dough { radius, .. } if radius == 80.0));
        let t = texts(&cmds);
        assert!(t.contains(&"Drag DOWN anywhere to pull dough!"));
        assert!(t.contains(&"0%"));
        assert!(t.contains(&"Noodles:"));
        assert!(!t.contains(&"DEBUG INFO"));
        assert_eq!(lines_of_color(&cmds, GUIDE_COLOR), 0);
    }

    #[test]
    fn trail_is_drawn_in_phase_color() {
        let mut m = NoodleMachine::default();
        m.pointer_down(Point::new(300.0, 300.0));
        m.pointer_move(Point::new(300.0, 310.0));
        m.pointer_move(Point::new(300.0, 320.0));
        let cmds = compose(&m);
        let dots: Vec<f64> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { color, alpha, .. } if *color == 0x00FF00 => Some(*alpha),
                _ => None,
            })
            .collect();
        assert_eq!(dots.len(), 3);
        assert_eq!(dots[0], 0.0);
        assert!(cmds.iter().any(|c| matches!(c, DrawCommand::Polyline { points, .. } if points.len() == 3)));
    }

    #[test]
    fn debug_panel_when_toggled() {
        let mut m = NoodleMachine::default();
        m.toggle_debug();
        let cmds = compose(&m);
        let t = texts(&cmds);
        assert!(t.contains(&"DEBUG INFO"));
        assert!(t.contains(&"State: PULLING_DOUGH"));
    }
}
