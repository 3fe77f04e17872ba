//! The four phases of one noodle cycle.

use std::fmt;

/// Exactly one phase is active at a time. Phases only advance; the last one
/// wraps back to [`Phase::PullingDough`] when a dough is completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    PullingDough,
    RotatingDough,
    CuttingNoodles,
    MovingToFinish,
}

impl Phase {
    pub fn next(self) -> Phase {
        match self {
            Phase::PullingDough   => Phase::RotatingDough,
            Phase::RotatingDough  => Phase::CuttingNoodles,
            Phase::CuttingNoodles => Phase::MovingToFinish,
            Phase::MovingToFinish => Phase::PullingDough,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::PullingDough   => "PULLING_DOUGH",
            Phase::RotatingDough  => "ROTATING_DOUGH",
            Phase::CuttingNoodles => "CUTTING_NOODLES",
            Phase::MovingToFinish => "MOVING_TO_FINISH",
        }
    }

    /// Gesture-trail colour, 0xRRGGBB.
    pub fn trail_color(self) -> u32 {
        match self {
            Phase::PullingDough   => 0x00FF00,
            Phase::RotatingDough  => 0x0000FF,
            Phase::CuttingNoodles => 0xFF0000,
            Phase::MovingToFinish => 0xFF00FF,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Phase::PullingDough   => "Drag DOWN anywhere to pull dough!",
            Phase::RotatingDough  => "Make CIRCULAR motions to rotate dough!",
            Phase::CuttingNoodles => "Cut the dough!",
            Phase::MovingToFinish => "Drag RIGHT to finish the dough!",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Phase::PullingDough   => "(You can drag anywhere on screen)",
            Phase::RotatingDough  => "(Rotate anywhere on screen)",
            Phase::CuttingNoodles => "(Swipe UP or DOWN directly on the dough)",
            Phase::MovingToFinish => "(Swipe right anywhere on screen)",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
