use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Net propulsion / drag (linear in velocity)
// ---------------------------------------------------------------------------

/// Net velocity-proportional factor. Positive boosts, negative damps.
pub fn net_factor(thrust_coefficient: f64, drag_coefficient: f64) -> f64 {
    thrust_coefficient - drag_coefficient
}

/// Acceleration from the net propulsion/drag term: `factor * vel`.
///
/// This is a linear model, not quadratic aerodynamic drag. With no other
/// forces the speed evolves as `v0 * exp(factor * t)`.
pub fn net_accel(vel: &Vector2<f64>, factor: f64) -> Vector2<f64> {
    vel * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_opposes_velocity() {
        let v = Vector2::new(3.0, -4.0);
        let a = net_accel(&v, net_factor(0.0, 0.5));
        assert!(a.dot(&v) < 0.0);
        assert_eq!(a, Vector2::new(-1.5, 2.0));
    }

    #[test]
    fn balanced_thrust_and_drag_cancel() {
        let a = net_accel(&Vector2::new(10.0, 10.0), net_factor(0.2, 0.2));
        assert_eq!(a, Vector2::zeros());
    }
}
