use nalgebra::Vector2;

use crate::dynamics::state::{Deriv, State};
use crate::physics::{gravity, propulsion};
use crate::scenario::SimParams;

// ---------------------------------------------------------------------------
// Equations of motion (planar point mass)
// ---------------------------------------------------------------------------

/// Compute state derivatives for a given state and parameter set.
///
/// Forces modeled:
///   1. Gravity — inverse-square, toward the origin
///   2. Net propulsion/drag — (thrust_coefficient - drag_coefficient) * velocity
///
/// Exactly at the origin the total acceleration is zero.
pub fn derivatives(state: &State, params: &SimParams) -> Deriv {
    if state.radius_squared() == 0.0 {
        return Deriv {
            dpos: state.vel,
            dvel: Vector2::zeros(),
        };
    }

    let a_gravity = gravity::point_mass_accel(&state.pos, params.mu());
    let a_net = propulsion::net_accel(&state.vel, params.net_factor());

    Deriv {
        dpos: state.vel,
        dvel: a_gravity + a_net,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::SimParamsBuilder;

    #[test]
    fn position_rate_is_velocity() {
        let p = SimParamsBuilder::new().build();
        let s = State::new(1.0, 2.0, -3.0, 0.5);
        assert_eq!(derivatives(&s, &p).dpos, Vector2::new(-3.0, 0.5));
    }

    #[test]
    fn gravity_plus_net_factor() {
        // mu = 8, r = 2 -> gravity factor = -8 / 8 = -1; net = 0.5 - 0.25
        let p = SimParamsBuilder::new()
            .g(2.0)
            .central_mass(4.0)
            .thrust_coefficient(0.5)
            .drag_coefficient(0.25)
            .build();
        let s = State::new(2.0, 0.0, 0.0, 4.0);
        let d = derivatives(&s, &p);
        assert!((d.dvel.x - (-2.0)).abs() < 1e-12, "ax = {}", d.dvel.x);
        assert!((d.dvel.y - 1.0).abs() < 1e-12, "ay = {}", d.dvel.y);
    }

    #[test]
    fn origin_has_zero_acceleration() {
        // Thrust is ignored at the singular point too.
        let p = SimParamsBuilder::new().thrust_coefficient(1.0).build();
        let s = State::new(0.0, 0.0, 1.5, -2.0);
        let d = derivatives(&s, &p);
        assert_eq!(d.dpos, Vector2::new(1.5, -2.0));
        assert_eq!(d.dvel, Vector2::zeros());
    }
}
