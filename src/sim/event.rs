use std::fmt;

use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Run outcome
// ---------------------------------------------------------------------------

/// How a run ended. The diagnostic line is the `Display` of this value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Every requested step ran.
    Completed { steps: usize },
    /// Initial position already inside the central body; no stepping.
    StartedInsideBody { radius: f64 },
    /// Crossed the central-body radius at `step` (1-based); that sample is the last one kept.
    Impact { step: usize, radius: f64 },
}

impl Outcome {
    /// True when the trajectory was cut short by the central body.
    pub fn terminated_early(&self) -> bool {
        !matches!(self, Outcome::Completed { .. })
    }

    /// Short machine-friendly tag (`completed`, `started_inside_body`, `impact`).
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Completed { .. } => "completed",
            Outcome::StartedInsideBody { .. } => "started_inside_body",
            Outcome::Impact { .. } => "impact",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Completed { steps } => write!(f, "Simulation completed: {} steps", steps),
            Outcome::StartedInsideBody { radius } => write!(
                f,
                "Initial position is inside the central body (r = {:.6e}); nothing to simulate",
                radius
            ),
            Outcome::Impact { step, radius } => write!(
                f,
                "Impact with central body at step {} (r = {:.6e})",
                step, radius
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Boundary detection
// ---------------------------------------------------------------------------

/// Detects positions strictly inside the central-body radius.
/// A position exactly on the surface is outside.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceContact {
    radius_squared: f64,
}

impl SurfaceContact {
    pub fn new(radius: f64) -> Self {
        Self { radius_squared: radius * radius }
    }

    pub fn inside(&self, pos: &Vector2<f64>) -> bool {
        pos.norm_squared() < self.radius_squared
    }
}
