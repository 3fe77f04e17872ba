//! # noodle_pull
//!
//! Windowed host for [`noodle_core`]: the mouse drives the noodle machine,
//! and a software framebuffer shows the dough, its cuts, the gesture trail
//! and the HUD.
//!
//! ## Input
//!
//! | Input | Event |
//! |---|---|
//! | Left button press | pointer down |
//! | Mouse motion while held | pointer move |
//! | Left button release | pointer up |
//! | Cursor leaves the window | pointer leave (ends the drag) |
//! | Click the DEBUG button, or `Tab` | toggle debug panel |
//! | `Q` / `Escape` | quit |
//!
//! ## Autoplay
//!
//! `--autoplay` replays scripted gestures from [`autoplay::cycle_script`] on
//! their own thread, so a full cycle can be watched without touching the
//! mouse. Both sources feed the same channel; the main loop is the only
//! writer of game state.

pub mod pointer;
pub mod autoplay;
pub mod visualizer;
pub mod app;
