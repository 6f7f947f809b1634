use nalgebra::Vector2;

use crate::dynamics::state::State;

/// Newtonian gravitational constant, m^3 / (kg s^2).
pub const G_NEWTON: f64 = 6.674_30e-11;
/// Earth mass, kg.
pub const M_EARTH: f64 = 5.972_2e24;
/// Mean Earth radius, m.
pub const R_EARTH: f64 = 6_371_000.0;

// ---------------------------------------------------------------------------
// Point-mass gravity (inertial frame, body at origin)
// ---------------------------------------------------------------------------

/// Inverse-square acceleration toward the origin: `-mu / r^3 * pos`.
///
/// At exactly the origin the field is singular; acceleration is defined as
/// zero there. The value is not physical and nothing should depend on it.
pub fn point_mass_accel(pos: &Vector2<f64>, mu: f64) -> Vector2<f64> {
    let r2 = pos.norm_squared();
    if r2 == 0.0 {
        return Vector2::zeros();
    }
    let r = r2.sqrt();
    let r3 = r2 * r;
    pos * (-mu / r3)
}

/// Speed of a circular orbit of radius `r`.
pub fn circular_speed(mu: f64, r: f64) -> f64 {
    (mu / r).sqrt()
}

/// Period of a circular orbit of radius `r`.
pub fn circular_period(mu: f64, r: f64) -> f64 {
    2.0 * std::f64::consts::PI * (r.powi(3) / mu).sqrt()
}

/// Specific orbital energy: v^2/2 - mu/r.
/// Undefined at the origin; returns negative infinity there when mu > 0.
pub fn specific_energy(state: &State, mu: f64) -> f64 {
    0.5 * state.vel.norm_squared() - mu / state.radius()
}

/// Specific angular momentum (z component of r x v).
pub fn specific_angular_momentum(state: &State) -> f64 {
    state.pos.perp(&state.vel)
}
