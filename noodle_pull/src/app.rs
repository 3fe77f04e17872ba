//! Top-level application loop.
//!
//! One [`NoodleMachine`] is the single writer of game state. Pointer sources
//! run on their own threads and feed one channel; each frame the loop drains
//! that channel in arrival order, runs [`NoodleMachine::frame`], and renders
//! the composed scene.

use std::sync::mpsc::{self, TryRecvError};
use std::time::Duration;

use noodle_core::scene::compose;
use noodle_core::{ConfigError, DoughSize, MachineEvent, NoodleMachine, Tuning, Viewport};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::autoplay::cycle_script;
use crate::pointer::{attach_pointer_source, PointerEvent, ScriptedPointerSource, WindowPointerSource};
use crate::visualizer::Visualizer;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Scripted play settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Autoplay {
    pub cycles: u32,
    /// Pause after each scripted event.
    pub delay:  Duration,
}

impl Default for Autoplay {
    fn default() -> Self {
        Autoplay { cycles: 1, delay: Duration::from_millis(16) }
    }
}

/// Configuration for the full application.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub viewport:    Viewport,
    pub dough:       DoughSize,
    pub tuning:      Tuning,
    pub autoplay:    Option<Autoplay>,
    /// Close after this many frames.
    pub frame_limit: Option<u64>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("window: {0}")]
    Window(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ════════════════════════════════════════════════════════════════════════════
// Event dispatch
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one pointer event to the machine.
pub fn apply(machine: &mut NoodleMachine, event: PointerEvent) -> (Flow, Vec<MachineEvent>) {
    let events = match event {
        PointerEvent::Down(p) => {
            machine.pointer_down(p);
            Vec::new()
        }
        PointerEvent::Move(p) => machine.pointer_move(p),
        PointerEvent::Up => {
            machine.pointer_up();
            Vec::new()
        }
        PointerEvent::Leave => {
            machine.pointer_leave();
            Vec::new()
        }
        PointerEvent::Resize { width, height } => {
            machine.resize(width, height);
            Vec::new()
        }
        PointerEvent::ToggleDebug => {
            machine.toggle_debug();
            Vec::new()
        }
        PointerEvent::Quit => return (Flow::Quit, Vec::new()),
    };
    (Flow::Continue, events)
}

/// Scripted source playing `auto.cycles` complete cycles.
pub fn autoplay_source(cfg: &AppConfig, auto: &Autoplay) -> ScriptedPointerSource {
    ScriptedPointerSource::new(cycle_script(cfg.viewport, cfg.dough, &cfg.tuning), auto.delay)
        .repeat(auto.cycles)
}

// ════════════════════════════════════════════════════════════════════════════
// run(): the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application.
///
/// Creates the machine, the visualizer and the pointer sources (window
/// always, script with autoplay) and drives the event/render loop at ~60 fps.
pub fn run(cfg: AppConfig) -> Result<(), AppError> {
    let mut machine = NoodleMachine::new(cfg.viewport, cfg.dough, cfg.tuning.clone())?;

    // ── Pointer channel ───────────────────────────────────────────────────
    let (tx, rx) = mpsc::channel::<PointerEvent>();
    let (win_tx, win_rx) = mpsc::channel();
    attach_pointer_source(WindowPointerSource { rx: win_rx }, tx.clone());
    if let Some(auto) = &cfg.autoplay {
        let source = autoplay_source(&cfg, auto);
        info!(cycles = auto.cycles, events = source.len(), "autoplay started");
        attach_pointer_source(source, tx.clone());
    }
    drop(tx);

    // ── Visualizer (owns the window and the window input sender) ─────────
    let mut vis = Visualizer::new(win_tx, cfg.viewport.width as usize, cfg.viewport.height as usize)
        .map_err(AppError::Window)?;

    // ── Main loop ─────────────────────────────────────────────────────────
    let mut frames: u64 = 0;
    while vis.is_open() {
        // 1. Poll window input
        if !vis.poll_input() { break; }

        // 2. Drain pointer events
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    let (flow, events) = apply(&mut machine, event);
                    if flow == Flow::Quit {
                        info!(completed = machine.completed(), "quit requested");
                        return Ok(());
                    }
                    for e in events {
                        debug!(?e, "machine event");
                    }
                }
                Err(TryRecvError::Empty)        => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        // 3. Per-frame logic
        machine.frame();
        if let Err(v) = machine.check_invariants() {
            warn!(%v, "machine invariant broken");
        }

        // 4. Render
        vis.render(&compose(&machine));

        frames += 1;
        if cfg.frame_limit.is_some_and(|limit| frames >= limit) {
            info!(frames, completed = machine.completed(), "frame limit reached");
            break;
        }
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use noodle_core::{Phase, Point};

    #[test]
    fn quit_stops_dispatch() {
        let mut m = NoodleMachine::default();
        assert_eq!(apply(&mut m, PointerEvent::Quit).0, Flow::Quit);
    }

    #[test]
    fn pull_through_dispatch() {
        let mut m = NoodleMachine::default();
        apply(&mut m, PointerEvent::Down(Point::new(320.0, 100.0)));
        let (flow, events) = apply(&mut m, PointerEvent::Move(Point::new(320.0, 600.0)));
        assert_eq!(flow, Flow::Continue);
        assert_eq!(
            events,
            vec![MachineEvent::PhaseChanged { from: Phase::PullingDough, to: Phase::RotatingDough }]
        );
    }

    #[test]
    fn leave_and_resize_reach_machine() {
        let mut m = NoodleMachine::default();
        apply(&mut m, PointerEvent::Down(Point::new(320.0, 100.0)));
        apply(&mut m, PointerEvent::Leave);
        assert!(!m.is_dragging());
        apply(&mut m, PointerEvent::Resize { width: 800.0, height: 600.0 });
        assert_eq!(m.viewport(), Viewport::new(800.0, 600.0));
        apply(&mut m, PointerEvent::ToggleDebug);
        assert!(m.debug_visible());
    }

    #[test]
    fn script_repeats_per_cycle() {
        let cfg = AppConfig::default();
        let once = |cycles| autoplay_source(&cfg, &Autoplay { cycles, ..Autoplay::default() });
        let one = once(1).len();
        assert!(one > 0);
        assert_eq!(once(3).len(), one * 3);
        assert!(once(0).is_empty());
    }

    #[test]
    fn max_cycles_builds_one_cycle_only() {
        let cfg = AppConfig::default();
        let one = autoplay_source(&cfg, &Autoplay::default()).len();
        let source = autoplay_source(&cfg, &Autoplay { cycles: u32::MAX, ..Autoplay::default() });
        assert_eq!(source.len(), one * u64::from(u32::MAX));
        assert_eq!(source.events().take(one as usize).count(), one as usize);
    }
}
