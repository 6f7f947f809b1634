use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Planar state: position and velocity about the central body
// ---------------------------------------------------------------------------

/// Position and velocity in the orbital plane.
/// Frame: Cartesian, origin at the centre of the central body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub pos: Vector2<f64>,    // [x, y]
    pub vel: Vector2<f64>,    // [vx, vy]
}

impl State {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            vel: Vector2::new(vx, vy),
        }
    }

    /// Offset this state by a derivative scaled by dt (used inside RK4).
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
        }
    }

    /// Distance from the origin.
    pub fn radius(&self) -> f64 {
        self.pos.norm()
    }

    /// Squared distance from the origin. Boundary checks compare this
    /// against the squared body radius to avoid a square root.
    pub fn radius_squared(&self) -> f64 {
        self.pos.norm_squared()
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    pub fn is_finite(&self) -> bool {
        self.pos.iter().chain(self.vel.iter()).all(|c| c.is_finite())
    }
}

// ---------------------------------------------------------------------------
// State derivative (dp/dt, dv/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deriv {
    pub dpos: Vector2<f64>,   // velocity
    pub dvel: Vector2<f64>,   // acceleration
}
