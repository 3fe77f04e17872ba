//! Scripted gestures for one complete dough cycle.
//!
//! [`cycle_script`] is pure: it works out from the canvas, dough size and
//! tuning how long each drag must be, and returns the pointer events a
//! player would produce. Steps are sized so no gesture spills into the next
//! phase's meaning (rotation chords stay shorter than a cut swipe, pull and
//! push samples never move the other way).

use noodle_core::dough::DoughAnchors;
use noodle_core::geometry::guide_positions;
use noodle_core::{DoughSize, Point, Tuning, Viewport};

use crate::pointer::PointerEvent;

/// Pointer travel per pull or push sample.
const DRAG_STEP: f64 = 20.0;
const MAX_ORBIT_RADIUS: f64 = 150.0;
const MAX_ORBIT_STEP_DEG: f64 = 10.0;

/// Events for pull, rotate, cut and push, each gesture ending in `Up`.
pub fn cycle_script(viewport: Viewport, dough: DoughSize, tuning: &Tuning) -> Vec<PointerEvent> {
    let anchors = DoughAnchors::compute(viewport, dough);
    let mut out = Vec::new();
    pull(&mut out, viewport, anchors, tuning);
    orbit(&mut out, viewport, tuning);
    cut(&mut out, viewport, anchors, dough, tuning);
    push(&mut out, viewport, anchors, tuning);
    out
}

/// `n` samples from `start`, `step` apart, followed by a release.
fn drag(out: &mut Vec<PointerEvent>, start: Point, step: Point, n: usize) {
    out.push(PointerEvent::Down(start));
    for i in 1..=n {
        let k = i as f64;
        out.push(PointerEvent::Move(Point::new(start.x + step.x * k, start.y + step.y * k)));
    }
    out.push(PointerEvent::Up);
}

/// Samples needed to cover `distance` at `per_sample`, plus one spare that
/// lands harmlessly after the phase has changed.
fn samples_for(distance: f64, per_sample: f64) -> usize {
    (distance.max(0.0) / per_sample).floor() as usize + 1
}

fn pull(out: &mut Vec<PointerEvent>, vp: Viewport, anchors: DoughAnchors, tuning: &Tuning) {
    let n = samples_for(anchors.center_y - anchors.start_y, DRAG_STEP * tuning.pull_sensitivity);
    drag(out, Point::new(vp.width / 2.0, vp.height * 0.1), Point::new(0.0, DRAG_STEP), n);
}

/// Circle around the screen centre. The step angle stays under the jump
/// filter, and the radius keeps each chord below a cut swipe so the
/// sample that finishes the rotation cannot also cut.
fn orbit(out: &mut Vec<PointerEvent>, vp: Viewport, tuning: &Tuning) {
    let step = MAX_ORBIT_STEP_DEG.min(tuning.max_angle_step / 2.0);
    let chord_limit = 0.8 * tuning.min_cut_swipe / (2.0 * (step / 2.0).to_radians().sin());
    let radius = MAX_ORBIT_RADIUS
        .min(chord_limit)
        .min(vp.width.min(vp.height) * 0.3);
    let c = vp.center();
    let at = |deg: f64| {
        let r = deg.to_radians();
        Point::new(c.x + radius * r.cos(), c.y + radius * r.sin())
    };

    let n = samples_for(tuning.max_rotation_progress, step * tuning.progress_per_degree());
    out.push(PointerEvent::Down(at(0.0)));
    for i in 1..=n {
        out.push(PointerEvent::Move(at(step * i as f64)));
    }
    out.push(PointerEvent::Up);
}

/// One short vertical swipe through the dough at every guide position.
fn cut(out: &mut Vec<PointerEvent>, vp: Viewport, anchors: DoughAnchors, dough: DoughSize, tuning: &Tuning) {
    let scale = 1.0 + tuning.max_scale_growth;
    let width = dough.width * scale;
    let left = vp.width / 2.0 - width / 2.0;
    let half = tuning.min_cut_swipe * 0.75;
    for x in guide_positions(left, width, tuning.required_cuts) {
        out.push(PointerEvent::Down(Point::new(x, anchors.center_y - half)));
        out.push(PointerEvent::Move(Point::new(x, anchors.center_y + half)));
        out.push(PointerEvent::Up);
    }
}

/// Push right along a line low on the canvas. The spare sample is a pure
/// rightward move, which the following pull ignores.
fn push(out: &mut Vec<PointerEvent>, vp: Viewport, anchors: DoughAnchors, tuning: &Tuning) {
    let n = samples_for(anchors.end_x - vp.width / 2.0, DRAG_STEP * tuning.move_sensitivity);
    drag(out, Point::new(vp.width * 0.05, vp.height * 0.75), Point::new(DRAG_STEP, 0.0), n);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downs(script: &[PointerEvent]) -> usize {
        script.iter().filter(|e| matches!(e, PointerEvent::Down(_))).count()
    }

    #[test]
    fn gestures_are_balanced() {
        let script = cycle_script(Viewport::default(), DoughSize::default(), &Tuning::default());
        let ups = script.iter().filter(|e| **e == PointerEvent::Up).count();
        // pull + orbit + eight cuts + push
        assert_eq!(downs(&script), 11);
        assert_eq!(ups, 11);
        assert_eq!(script.last(), Some(&PointerEvent::Up));
    }

    #[test]
    fn pull_samples_only_move_down() {
        let script = cycle_script(Viewport::default(), DoughSize::default(), &Tuning::default());
        let mut last_y = f64::MIN;
        for e in script.iter().take_while(|e| **e != PointerEvent::Up) {
            let p = match e {
                PointerEvent::Down(p) | PointerEvent::Move(p) => *p,
                _ => continue,
            };
            assert!(p.y > last_y);
            last_y = p.y;
        }
    }

    #[test]
    fn orbit_chords_are_shorter_than_a_swipe() {
        let t = Tuning::default();
        let mut out = Vec::new();
        orbit(&mut out, Viewport::default(), &t);
        let pts: Vec<Point> = out
            .iter()
            .filter_map(|e| match e {
                PointerEvent::Down(p) | PointerEvent::Move(p) => Some(*p),
                _ => None,
            })
            .collect();
        for w in pts.windows(2) {
            assert!((w[1].y - w[0].y).abs() < t.min_cut_swipe);
        }
    }

    #[test]
    fn fewer_cuts_fewer_swipes() {
        let mut t = Tuning::default();
        t.required_cuts = 3;
        let script = cycle_script(Viewport::default(), DoughSize::default(), &t);
        assert_eq!(downs(&script), 6);
    }
}
