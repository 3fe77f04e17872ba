//! Pointer input, from the window or from a script.
//!
//! The public interface is [`PointerEvent`] delivered over a `mpsc` channel.
//! The main loop does not need to know whether events came from the mouse or
//! from autoplay.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use noodle_core::Point;
use tracing::debug;

// ════════════════════════════════════════════════════════════════════════════
// PointerEvent
// ════════════════════════════════════════════════════════════════════════════

/// One input for the noodle machine, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Button pressed at a position.
    Down(Point),
    /// Pointer moved while the button is held.
    Move(Point),
    /// Button released.
    Up,
    /// Pointer left the canvas.
    Leave,
    /// Canvas changed size.
    Resize { width: f64, height: f64 },
    ToggleDebug,
    Quit,
}

// ════════════════════════════════════════════════════════════════════════════
// PointerSource trait: unified interface for window and script
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`PointerEvent`]s over a channel.
pub trait PointerSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<PointerEvent>);
}

// ════════════════════════════════════════════════════════════════════════════
// Spawn helpers
// ════════════════════════════════════════════════════════════════════════════

/// Spawn a pointer source on its own thread and return the receiving end.
pub fn spawn_pointer_source<P: PointerSource>(source: P) -> Receiver<PointerEvent> {
    let (tx, rx) = mpsc::channel();
    attach_pointer_source(source, tx);
    rx
}

/// Spawn a pointer source that sends into an existing channel, so several
/// sources share one receiver.
pub fn attach_pointer_source<P: PointerSource>(source: P, tx: Sender<PointerEvent>) {
    thread::spawn(move || Box::new(source).run(tx));
}

// ════════════════════════════════════════════════════════════════════════════
// WindowPointerSource: mouse/keyboard sampled by the visualizer
// ════════════════════════════════════════════════════════════════════════════

/// Raw per-frame input sampled from the window.
#[derive(Clone, Debug, PartialEq)]
pub enum WindowInput {
    /// Mouse state this frame. `pos` is `None` while the cursor is outside.
    Sample { pos: Option<Point>, down: bool },
    Resized { width: usize, height: usize },
    DebugKey,
    QuitKey,
}

/// Edge detection over [`WindowInput::Sample`]s: the window only reports
/// levels, the machine wants transitions.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    down: bool,
    last: Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        PointerTracker::default()
    }

    pub fn translate(&mut self, input: WindowInput) -> Vec<PointerEvent> {
        let mut out = Vec::new();
        match input {
            WindowInput::Sample { pos: None, .. } => {
                if self.down {
                    out.push(PointerEvent::Leave);
                }
                self.down = false;
                self.last = None;
            }
            WindowInput::Sample { pos: Some(p), down } => {
                match (self.down, down) {
                    (false, true) => out.push(PointerEvent::Down(p)),
                    (true, true) if self.last != Some(p) => out.push(PointerEvent::Move(p)),
                    (true, false) => out.push(PointerEvent::Up),
                    _ => {}
                }
                self.down = down;
                self.last = Some(p);
            }
            WindowInput::Resized { width, height } => out.push(PointerEvent::Resize {
                width:  width as f64,
                height: height as f64,
            }),
            WindowInput::DebugKey => out.push(PointerEvent::ToggleDebug),
            WindowInput::QuitKey  => out.push(PointerEvent::Quit),
        }
        out
    }

    pub fn is_down(&self) -> bool { self.down }
}

/// Pointer source driven by [`WindowInput`] samples from the visualizer.
///
/// The visualizer sends raw samples here; this translator turns them into
/// `PointerEvent`s. This decouples the window loop from gesture semantics.
pub struct WindowPointerSource {
    pub rx: Receiver<WindowInput>,
}

impl PointerSource for WindowPointerSource {
    fn run(self: Box<Self>, tx: Sender<PointerEvent>) {
        let mut tracker = PointerTracker::new();
        for input in self.rx {
            for event in tracker.translate(input) {
                let quit = event == PointerEvent::Quit;
                if tx.send(event).is_err() || quit {
                    return;
                }
            }
        }
        debug!("window input closed");
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ScriptedPointerSource: autoplay
// ════════════════════════════════════════════════════════════════════════════

/// Replays one cycle of events `repeat` times with a pause after each event.
///
/// Repeats are streamed from the single cycle, so the repeat count costs no
/// memory.
pub struct ScriptedPointerSource {
    cycle:  Vec<PointerEvent>,
    repeat: u32,
    delay:  Duration,
}

impl ScriptedPointerSource {
    pub fn new(cycle: Vec<PointerEvent>, delay: Duration) -> Self {
        ScriptedPointerSource { cycle, repeat: 1, delay }
    }

    pub fn repeat(mut self, times: u32) -> Self {
        self.repeat = times;
        self
    }

    /// Total events sent over all repeats.
    pub fn len(&self) -> u64        { self.cycle.len() as u64 * u64::from(self.repeat) }
    pub fn is_empty(&self) -> bool  { self.len() == 0 }

    /// Every event in send order.
    pub fn events(&self) -> impl Iterator<Item = PointerEvent> + '_ {
        (0..self.repeat).flat_map(move |_| self.cycle.iter().cloned())
    }
}

impl PointerSource for ScriptedPointerSource {
    fn run(self: Box<Self>, tx: Sender<PointerEvent>) {
        for event in self.events() {
            if tx.send(event).is_err() {
                return;
            }
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
        debug!(events = self.len(), "script finished");
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
