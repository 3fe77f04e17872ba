//! The gesture state machine.
//!
//! [`NoodleMachine`] owns every piece of mutable game state: the
//! [`StateMachineContext`], the dough, the cut board, the cutting guide, the
//! gesture trail and the HUD layout. Pointer events are fed in arrival order;
//! [`NoodleMachine::frame`] runs once per rendered frame after all queued
//! events. Every handler runs to completion, so a phase change is never
//! observed half-applied.
//!
//! | Phase | Accepted gesture | Progress | Exit |
//! |---|---|---|---|
//! | `PullingDough` | downward drag | dough y | y reaches the centre anchor |
//! | `RotatingDough` | circular drag around screen centre | rotation progress | progress saturates |
//! | `CuttingNoodles` | vertical swipe on the dough | cut count | all cuts made |
//! | `MovingToFinish` | rightward drag | dough x | x passes the end anchor |

use tracing::{debug, info, trace};

use crate::config::{DoughSize, Tuning, Viewport};
use crate::cut::{CutBoard, CutFlash, CuttingGuide};
use crate::dough::{Dough, DoughAnchors};
use crate::error::{ConfigError, InvariantViolation};
use crate::geometry::{angle_difference, pointer_angle_deg, Point};
use crate::layout::HudLayout;
use crate::phase::Phase;
use crate::trail::GestureTrail;

// ════════════════════════════════════════════════════════════════════════════
// StateMachineContext
// ════════════════════════════════════════════════════════════════════════════

/// Phase and per-phase progress. Counters are only meaningful in their own
/// phase and are zeroed when a cycle completes.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StateMachineContext {
    pub phase:                 Phase,
    pub rotation_progress:     f64,
    pub cuts_made:             usize,
    /// Degrees, around the screen centre.
    pub last_pointer_angle:    f64,
    /// `None` while no drag is active.
    pub last_pointer_position: Option<Point>,
}

// ════════════════════════════════════════════════════════════════════════════
// MachineEvent
// ════════════════════════════════════════════════════════════════════════════

/// Something observable that an input caused.
#[derive(Clone, Debug, PartialEq)]
pub enum MachineEvent {
    PhaseChanged { from: Phase, to: Phase },
    CutMade { x: f64, cuts_made: usize },
    DoughCompleted { completed: u64 },
}

/// What the progress bar shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressDisplay {
    /// 0.0–1.0 share of the bar that is filled.
    pub fraction: f64,
    pub label:    String,
}

// ════════════════════════════════════════════════════════════════════════════
// NoodleMachine
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct NoodleMachine {
    tuning:        Tuning,
    viewport:      Viewport,
    anchors:       DoughAnchors,

    ctx:           StateMachineContext,
    dough:         Dough,
    cuts:          CutBoard,
    guide:         CuttingGuide,
    flashes:       Vec<CutFlash>,
    trail:         GestureTrail,
    dragging:      bool,
    completed:     u64,

    layout:        HudLayout,
    laid_out_for:  Viewport,
    debug_visible: bool,
}

impl Default for NoodleMachine {
    fn default() -> Self {
        NoodleMachine::build(Viewport::default(), DoughSize::default(), Tuning::default())
    }
}

impl NoodleMachine {
    /// Create the scene: dough peeking in at the top, centred horizontally.
    pub fn new(viewport: Viewport, size: DoughSize, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            return Err(ConfigError::Invalid {
                field:  "viewport",
                reason: format!("{}x{} is not a drawable canvas", viewport.width, viewport.height),
            });
        }
        if !(size.width > 0.0 && size.height > 0.0) {
            return Err(ConfigError::Invalid {
                field:  "dough_size",
                reason: format!("{}x{} is not a drawable sprite", size.width, size.height),
            });
        }
        Ok(NoodleMachine::build(viewport, size, tuning))
    }

    fn build(viewport: Viewport, size: DoughSize, tuning: Tuning) -> Self {
        let anchors = DoughAnchors::compute(viewport, size);
        let dough = Dough::new(viewport.width / 2.0, anchors.start_y, size);
        let trail = GestureTrail::new(tuning.trail_capacity);
        info!(
            width = viewport.width,
            height = viewport.height,
            start_y = anchors.start_y,
            center_y = anchors.center_y,
            end_x = anchors.end_x,
            "noodle scene created"
        );
        NoodleMachine {
            layout: HudLayout::compute(viewport.width, viewport.height, anchors.center_y),
            laid_out_for: viewport,
            tuning,
            viewport,
            anchors,
            ctx: StateMachineContext::default(),
            dough,
            cuts: CutBoard::new(),
            guide: CuttingGuide::default(),
            flashes: Vec::new(),
            trail,
            dragging: false,
            completed: 0,
            debug_visible: false,
        }
    }

    // ── pointer input ────────────────────────────────────────────────────

    /// Start a drag at `p`. A press on the debug button toggles the debug
    /// panel instead.
    pub fn pointer_down(&mut self, p: Point) {
        if self.layout.debug_button.contains(p) {
            self.toggle_debug();
            return;
        }
        self.dragging = true;
        self.ctx.last_pointer_position = Some(p);
        self.ctx.last_pointer_angle = pointer_angle_deg(self.viewport.center(), p);
        self.trail.clear();
        self.trail.push(p);
    }

    /// Feed one drag sample. Ignored unless a drag is active.
    pub fn pointer_move(&mut self, p: Point) -> Vec<MachineEvent> {
        let mut events = Vec::new();
        if !self.dragging {
            return events;
        }
        self.trail.push(p);

        match self.ctx.phase {
            Phase::PullingDough   => self.handle_pull(p, &mut events),
            Phase::RotatingDough  => self.handle_rotate(p, &mut events),
            Phase::CuttingNoodles => self.handle_cut(p, &mut events),
            Phase::MovingToFinish => self.handle_move(p, &mut events),
        }

        self.ctx.last_pointer_position = Some(p);
        events
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
        self.ctx.last_pointer_position = None;
    }

    /// Pointer left the canvas; ends the drag like a release.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Record a new canvas size. The HUD follows on the next [`frame`].
    ///
    /// [`frame`]: NoodleMachine::frame
    pub fn resize(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Viewport::new(width, height);
        }
    }

    /// Once per frame, after the frame's input events.
    pub fn frame(&mut self) {
        if !self.dragging {
            self.trail.decay();
        }

        if self.ctx.phase == Phase::MovingToFinish && !self.cuts.is_empty() {
            self.cuts.reproject(self.dough.x);
        }

        self.flashes.retain_mut(|f| f.tick());

        if self.viewport != self.laid_out_for {
            self.layout = HudLayout::compute(
                self.viewport.width,
                self.viewport.height,
                self.anchors.center_y,
            );
            self.laid_out_for = self.viewport;
            debug!(width = self.viewport.width, height = self.viewport.height, "layout recomputed");
        }
    }

    pub fn toggle_debug(&mut self) {
        self.debug_visible = !self.debug_visible;
        debug!(visible = self.debug_visible, "debug panel toggled");
    }

    // ── phase handlers ───────────────────────────────────────────────────

    fn handle_pull(&mut self, p: Point, events: &mut Vec<MachineEvent>) {
        let Some(last) = self.ctx.last_pointer_position else { return };
        if p.y <= last.y {
            return;
        }
        let dy = p.y - last.y;
        let (start, center) = (self.anchors.start_y, self.anchors.center_y);
        self.dough.y = (self.dough.y + dy * self.tuning.pull_sensitivity)
            .max(start)
            .min(center);

        if self.dough.y >= center {
            self.dough.y = center;
            self.transition(Phase::RotatingDough, events);
        }
    }

    fn handle_rotate(&mut self, p: Point, events: &mut Vec<MachineEvent>) {
        let angle = pointer_angle_deg(self.viewport.center(), p);
        let delta = angle_difference(self.ctx.last_pointer_angle, angle);
        self.ctx.last_pointer_angle = angle;

        if delta.abs() >= self.tuning.max_angle_step {
            trace!(delta, "rotation step discarded as a jump");
            return;
        }

        let max = self.tuning.max_rotation_progress;
        self.ctx.rotation_progress += delta.abs() * self.tuning.progress_per_degree();
        self.dough.rotation += delta * self.tuning.rotation_per_degree;
        let fraction = (self.ctx.rotation_progress / max).min(1.0);
        self.dough.set_scale(1.0 + fraction * self.tuning.max_scale_growth);

        if self.ctx.rotation_progress >= max {
            self.ctx.rotation_progress = max;
            self.transition(Phase::CuttingNoodles, events);
            self.guide.show(&self.dough, &self.tuning);
        }
    }

    fn handle_cut(&mut self, p: Point, events: &mut Vec<MachineEvent>) {
        let Some(last) = self.ctx.last_pointer_position else { return };
        let x = match self.cuts.evaluate(last, p, &self.dough, &self.tuning) {
            Ok(x) => x,
            Err(reason) => {
                trace!(?reason, x = p.x, y = p.y, "cut rejected");
                return;
            }
        };

        let line = self.cuts.add(x, &self.dough);
        self.flashes.push(CutFlash::new(line, &self.dough, &self.tuning));
        self.ctx.cuts_made += 1;
        debug!(x, cuts_made = self.ctx.cuts_made, required = self.tuning.required_cuts, "cut made");
        events.push(MachineEvent::CutMade { x, cuts_made: self.ctx.cuts_made });

        if self.ctx.cuts_made >= self.tuning.required_cuts {
            self.guide.hide();
            self.transition(Phase::MovingToFinish, events);
        }
    }

    fn handle_move(&mut self, p: Point, events: &mut Vec<MachineEvent>) {
        let Some(last) = self.ctx.last_pointer_position else { return };
        if p.x <= last.x {
            return;
        }
        self.dough.x += (p.x - last.x) * self.tuning.move_sensitivity;
        self.cuts.reproject(self.dough.x);

        if self.dough.x >= self.anchors.end_x {
            self.completed += 1;
            info!(completed = self.completed, "dough completed");
            events.push(MachineEvent::DoughCompleted { completed: self.completed });
            self.reset_cycle(events);
        }
    }

    /// Fresh dough at the start pose; every per-cycle artifact dropped.
    fn reset_cycle(&mut self, events: &mut Vec<MachineEvent>) {
        self.dough.reset(self.viewport.width / 2.0, self.anchors.start_y);
        self.cuts.clear();
        self.flashes.clear();
        self.guide.hide();
        self.ctx.cuts_made = 0;
        self.ctx.rotation_progress = 0.0;
        self.transition(Phase::PullingDough, events);
    }

    fn transition(&mut self, to: Phase, events: &mut Vec<MachineEvent>) {
        let from = self.ctx.phase;
        debug_assert_eq!(from.next(), to, "phases only advance");
        self.ctx.phase = to;
        info!(%from, %to, "phase changed");
        events.push(MachineEvent::PhaseChanged { from, to });
    }

    // ── invariants ───────────────────────────────────────────────────────

    /// Verify the guarded state. Any error here is a defect in the handlers.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let required = self.tuning.required_cuts;
        if self.ctx.cuts_made > required {
            return Err(InvariantViolation::TooManyCuts { made: self.ctx.cuts_made, required });
        }
        if self.ctx.cuts_made != self.cuts.len() {
            return Err(InvariantViolation::CutCountMismatch {
                counted: self.ctx.cuts_made,
                stored:  self.cuts.len(),
            });
        }
        let max = self.tuning.max_rotation_progress;
        if !(0.0..=max).contains(&self.ctx.rotation_progress) {
            return Err(InvariantViolation::RotationOutOfRange {
                progress: self.ctx.rotation_progress,
                max,
            });
        }
        if self.ctx.phase == Phase::PullingDough
            && !(self.anchors.start_y..=self.anchors.center_y).contains(&self.dough.y)
        {
            return Err(InvariantViolation::DoughOutsidePullRange {
                y:      self.dough.y,
                start:  self.anchors.start_y,
                center: self.anchors.center_y,
            });
        }
        if self.dough.scale < 1.0 {
            return Err(InvariantViolation::ScaleBelowOne { scale: self.dough.scale });
        }
        if self.trail.len() > self.trail.capacity() {
            return Err(InvariantViolation::TrailOverCapacity {
                len:      self.trail.len(),
                capacity: self.trail.capacity(),
            });
        }
        if matches!(self.ctx.phase, Phase::PullingDough | Phase::RotatingDough) && !self.cuts.is_empty() {
            return Err(InvariantViolation::StrayCuts { count: self.cuts.len(), phase: self.ctx.phase });
        }
        Ok(())
    }

    // ── derived presentation state ───────────────────────────────────────

    /// Rotation percentage until the first cut, then the cut count.
    pub fn progress_display(&self) -> ProgressDisplay {
        let showing_cuts = match self.ctx.phase {
            Phase::PullingDough | Phase::RotatingDough => false,
            Phase::CuttingNoodles                      => self.ctx.cuts_made > 0,
            Phase::MovingToFinish                      => true,
        };
        if showing_cuts {
            let required = self.tuning.required_cuts;
            ProgressDisplay {
                fraction: self.ctx.cuts_made as f64 / required as f64,
                label:    format!("{}/{} cuts", self.ctx.cuts_made, required),
            }
        } else {
            let fraction = self.ctx.rotation_progress / self.tuning.max_rotation_progress;
            ProgressDisplay {
                fraction,
                label: format!("{}%", (fraction * 100.0).floor() as u32),
            }
        }
    }

    /// Lines of the debug panel, below its title.
    pub fn debug_lines(&self) -> [String; 3] {
        let progress = if self.ctx.phase == Phase::CuttingNoodles {
            format!("Cuts: {}/{}", self.ctx.cuts_made, self.tuning.required_cuts)
        } else {
            format!(
                "Progress: {:.1}/{}",
                self.ctx.rotation_progress, self.tuning.max_rotation_progress
            )
        };
        [
            format!("State: {}", self.ctx.phase),
            format!(
                "Dough Position: X:{}, Y:{}",
                self.dough.x.round(),
                self.dough.y.round()
            ),
            progress,
        ]
    }

    // ── accessors ────────────────────────────────────────────────────────

    pub fn phase(&self)         -> Phase                { self.ctx.phase }
    pub fn context(&self)       -> &StateMachineContext { &self.ctx }
    pub fn dough(&self)         -> &Dough               { &self.dough }
    pub fn cuts(&self)          -> &CutBoard            { &self.cuts }
    pub fn guide(&self)         -> &CuttingGuide        { &self.guide }
    pub fn flashes(&self)       -> &[CutFlash]          { &self.flashes }
    pub fn trail(&self)         -> &GestureTrail        { &self.trail }
    pub fn completed(&self)     -> u64                  { self.completed }
    pub fn viewport(&self)      -> Viewport             { self.viewport }
    pub fn anchors(&self)       -> DoughAnchors         { self.anchors }
    pub fn layout(&self)        -> &HudLayout           { &self.layout }
    pub fn tuning(&self)        -> &Tuning              { &self.tuning }
    pub fn is_dragging(&self)   -> bool                 { self.dragging }
    pub fn debug_visible(&self) -> bool                 { self.debug_visible }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> NoodleMachine {
        NoodleMachine::default()
    }

    /// Drag from `from` through `to` in `steps` equal moves.
    fn drag(m: &mut NoodleMachine, from: Point, to: Point, steps: usize) -> Vec<MachineEvent> {
        m.pointer_down(from);
        let mut events = Vec::new();
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let p = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            events.extend(m.pointer_move(p));
            m.check_invariants().unwrap();
        }
        m.pointer_up();
        events
    }

    fn pull_to_center(m: &mut NoodleMachine) {
        drag(m, Point::new(320.0, 100.0), Point::new(320.0, 400.0), 30);
        assert_eq!(m.phase(), Phase::RotatingDough);
    }

    /// Circular drag around the screen centre, `step_deg` per sample.
    fn circle(m: &mut NoodleMachine, step_deg: f64, samples: usize) -> Vec<MachineEvent> {
        let c = m.viewport().center();
        let at = |deg: f64| {
            let r = deg.to_radians();
            Point::new(c.x + 150.0 * r.cos(), c.y + 150.0 * r.sin())
        };
        m.pointer_down(at(0.0));
        let mut events = Vec::new();
        for i in 1..=samples {
            events.extend(m.pointer_move(at(step_deg * i as f64)));
            m.check_invariants().unwrap();
        }
        m.pointer_up();
        events
    }

    fn swipe_at(m: &mut NoodleMachine, x: f64) -> Vec<MachineEvent> {
        let y = m.dough().y;
        m.pointer_down(Point::new(x, y - 40.0));
        let events = m.pointer_move(Point::new(x, y + 40.0));
        m.pointer_up();
        m.check_invariants().unwrap();
        events
    }

    #[test]
    fn starts_pulling_with_dough_peeking() {
        let m = machine();
        assert_eq!(m.phase(), Phase::PullingDough);
        assert_eq!(m.dough().position(), Point::new(320.0, -50.0));
        m.check_invariants().unwrap();
    }

    #[test]
    fn new_rejects_unbounded_trail_and_dash() {
        let huge_trail = Tuning { trail_capacity: usize::MAX, ..Tuning::default() };
        assert!(matches!(
            NoodleMachine::new(Viewport::default(), DoughSize::default(), huge_trail),
            Err(ConfigError::Invalid { field: "trail_capacity", .. })
        ));
        let tiny_dash = Tuning { guide_dash: 1e-9, guide_gap: 0.0, ..Tuning::default() };
        assert!(matches!(
            NoodleMachine::new(Viewport::default(), DoughSize::default(), tiny_dash),
            Err(ConfigError::Invalid { field: "guide_dash", .. })
        ));
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut m = machine();
        assert!(m.pointer_move(Point::new(320.0, 900.0)).is_empty());
        assert_eq!(m.dough().y, -50.0);
        assert!(m.trail().is_empty());
    }

    #[test]
    fn upward_pull_is_ignored() {
        let mut m = machine();
        drag(&mut m, Point::new(320.0, 500.0), Point::new(320.0, 100.0), 10);
        assert_eq!(m.dough().y, -50.0);
        assert_eq!(m.phase(), Phase::PullingDough);
    }

    #[test]
    fn pull_scales_by_sensitivity() {
        let mut m = machine();
        m.pointer_down(Point::new(0.0, 0.0));
        m.pointer_move(Point::new(0.0, 10.0));
        assert_eq!(m.dough().y, -35.0);
    }

    #[test]
    fn pull_snaps_to_center_and_rotates() {
        let mut m = machine();
        let events = drag(&mut m, Point::new(320.0, 0.0), Point::new(320.0, 900.0), 3);
        assert_eq!(m.dough().y, 320.0);
        assert_eq!(
            events,
            vec![MachineEvent::PhaseChanged { from: Phase::PullingDough, to: Phase::RotatingDough }]
        );
    }

    #[test]
    fn rotation_jump_is_discarded() {
        let mut m = machine();
        pull_to_center(&mut m);
        let c = m.viewport().center();
        m.pointer_down(Point::new(c.x - 100.0, c.y - 1.0)); // ~ -179.4°
        m.pointer_move(Point::new(c.x + 100.0, c.y));       // 0°
        assert_eq!(m.context().rotation_progress, 0.0);
        assert_eq!(m.dough().rotation, 0.0);
    }

    #[test]
    fn rotation_across_seam_counts_small_step() {
        let mut m = machine();
        pull_to_center(&mut m);
        let c = m.viewport().center();
        let at = |deg: f64| {
            let r = deg.to_radians();
            Point::new(c.x + 100.0 * r.cos(), c.y + 100.0 * r.sin())
        };
        m.pointer_down(at(179.0));
        m.pointer_move(at(-179.0));
        assert!((m.context().rotation_progress - 2.0 * 0.35).abs() < 1e-9);
        assert!((m.dough().rotation - 0.02).abs() < 1e-9);
    }

    #[test]
    fn rotation_saturates_and_shows_guide() {
        let mut m = machine();
        pull_to_center(&mut m);
        let events = circle(&mut m, 10.0, 40);
        assert!(events.contains(&MachineEvent::PhaseChanged {
            from: Phase::RotatingDough,
            to:   Phase::CuttingNoodles,
        }));
        assert_eq!(m.context().rotation_progress, 100.0);
        assert_eq!(m.dough().scale, 1.5);
        assert!(m.guide().is_visible());
        assert_eq!(m.guide().lines().len(), 8);
    }

    #[test]
    fn scale_grows_with_progress() {
        let mut m = machine();
        pull_to_center(&mut m);
        circle(&mut m, 10.0, 10); // 10 valid steps of 10° → 35 progress
        assert!((m.context().rotation_progress - 35.0).abs() < 1e-9);
        assert!((m.dough().scale - 1.175).abs() < 1e-9);
        assert_eq!(m.phase(), Phase::RotatingDough);
    }

    #[test]
    fn eight_cuts_move_to_finish() {
        let mut m = machine();
        pull_to_center(&mut m);
        circle(&mut m, 10.0, 40);
        let xs: Vec<f64> = m.guide().lines().iter().map(|g| g.x).collect();
        for (i, x) in xs.iter().enumerate() {
            let events = swipe_at(&mut m, *x);
            assert!(events.contains(&MachineEvent::CutMade { x: *x, cuts_made: i + 1 }));
        }
        assert_eq!(m.phase(), Phase::MovingToFinish);
        assert_eq!(m.cuts().len(), 8);
        assert!(!m.guide().is_visible());
        assert_eq!(m.flashes().len(), 8);
    }

    #[test]
    fn cut_too_close_is_rejected() {
        let mut m = machine();
        pull_to_center(&mut m);
        circle(&mut m, 10.0, 40);
        swipe_at(&mut m, 320.0);
        assert!(swipe_at(&mut m, 335.0).is_empty());
        assert_eq!(m.context().cuts_made, 1);
    }

    #[test]
    fn progress_display_switches_to_cuts() {
        let mut m = machine();
        assert_eq!(m.progress_display().label, "0%");
        pull_to_center(&mut m);
        circle(&mut m, 10.0, 9);
        assert_eq!(m.progress_display().label, "31%");
        circle(&mut m, 10.0, 40);
        assert_eq!(m.progress_display().label, "100%");
        swipe_at(&mut m, 320.0);
        let p = m.progress_display();
        assert_eq!(p.label, "1/8 cuts");
        assert_eq!(p.fraction, 0.125);
    }

    #[test]
    fn trail_decays_only_when_idle() {
        let mut m = machine();
        m.pointer_down(Point::new(10.0, 10.0));
        for i in 0..5 {
            m.pointer_move(Point::new(10.0, 10.0 - i as f64));
        }
        assert_eq!(m.trail().len(), 6);
        m.frame();
        assert_eq!(m.trail().len(), 6);
        m.pointer_up();
        for remaining in (0..6).rev() {
            m.frame();
            assert_eq!(m.trail().len(), remaining);
        }
    }

    #[test]
    fn debug_button_press_toggles_without_drag() {
        let mut m = machine();
        m.pointer_down(Point::new(60.0, 60.0));
        assert!(m.debug_visible());
        assert!(!m.is_dragging());
        m.pointer_down(Point::new(60.0, 60.0));
        assert!(!m.debug_visible());
    }

    #[test]
    fn debug_lines_follow_phase() {
        let mut m = machine();
        assert_eq!(m.debug_lines()[0], "State: PULLING_DOUGH");
        assert_eq!(m.debug_lines()[1], "Dough Position: X:320, Y:-50");
        assert_eq!(m.debug_lines()[2], "Progress: 0.0/100");
        pull_to_center(&mut m);
        circle(&mut m, 10.0, 40);
        assert_eq!(m.debug_lines()[2], "Cuts: 0/8");
    }

    #[test]
    fn resize_applies_on_next_frame() {
        let mut m = machine();
        m.resize(1000.0, 600.0);
        assert_eq!(m.layout().progress_text.x, 320.0);
        m.frame();
        assert_eq!(m.layout().progress_text, Point::new(500.0, 520.0));
        // Anchors stay put.
        assert_eq!(m.anchors().center_y, 320.0);
    }

    #[test]
    fn new_rejects_bad_inputs() {
        let mut t = Tuning::default();
        t.trail_capacity = 0;
        assert!(NoodleMachine::new(Viewport::default(), DoughSize::default(), t).is_err());
        assert!(NoodleMachine::new(
            Viewport::new(0.0, 100.0),
            DoughSize::default(),
            Tuning::default()
        )
        .is_err());
    }
}
