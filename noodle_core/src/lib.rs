//! # noodle_core
//!
//! The gesture state machine behind a hand-pulled noodle mini-game. A single
//! piece of dough is pulled down, spun, cut and pushed off screen by pointer
//! drags alone.
//!
//! ## Gesture → Action mapping
//!
//! | Phase | Gesture | Effect |
//! |---|---|---|
//! | Pulling | drag down | dough follows at 1.5× until it reaches the centre line |
//! | Rotating | circle around the screen centre | dough spins and grows to 1.5×; progress to 100 |
//! | Cutting | quick vertical swipe on the dough | one cut line per swipe, 8 needed |
//! | Moving | drag right | dough and its cuts slide off; counter +1, next dough |
//!
//! ## Quick start
//!
//! ```rust
//! use noodle_core::{NoodleMachine, Phase, Point};
//!
//! let mut machine = NoodleMachine::default();
//! machine.pointer_down(Point::new(320.0, 100.0));
//! for i in 1..=30 {
//!     machine.pointer_move(Point::new(320.0, 100.0 + 20.0 * i as f64));
//! }
//! machine.pointer_up();
//! machine.frame();
//! assert_eq!(machine.phase(), Phase::RotatingDough);
//!
//! let commands = noodle_core::scene::compose(&machine);
//! assert!(!commands.is_empty());
//! ```
//!
//! The crate never draws or reads input devices itself. Hosts feed pointer
//! events on one thread, call [`NoodleMachine::frame`] once per frame, and
//! rasterize the [`scene::DrawCommand`]s.

pub mod config;
pub mod cut;
pub mod dough;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod machine;
pub mod phase;
pub mod scene;
pub mod trail;

pub use config::{DoughSize, Tuning, Viewport};
pub use cut::{CutLine, CutRejection};
pub use error::{ConfigError, InvariantViolation};
pub use geometry::Point;
pub use machine::{MachineEvent, NoodleMachine, ProgressDisplay, StateMachineContext};
pub use phase::Phase;
