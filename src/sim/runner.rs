use tracing::{debug, warn};

use crate::dynamics::state::State;
use crate::scenario::SimParams;
use super::error::SimError;
use super::event::{Outcome, SurfaceContact};
use super::integrator::rk4_step;
use super::trajectory::Trajectory;

/// Everything one run produces. Owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SimResult {
    pub trajectory: Trajectory,
    /// Last full state (the impact state when the run terminated early).
    pub final_state: State,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// Simulation driver
// ---------------------------------------------------------------------------

/// Run from the initial state for up to `params.steps` increments.
///
/// Stops early (keeping the offending sample) when the body passes inside the
/// central-body radius. Only invalid parameters produce an `Err`; a short
/// trajectory is a valid result, see [`SimResult::outcome`].
pub fn simulate(params: &SimParams) -> Result<SimResult, SimError> {
    params.validate()?;

    let mut state = params.initial;
    let contact = SurfaceContact::new(params.central_body_radius);

    let mut trajectory = Trajectory::with_capacity(params.dt, params.steps + 1);
    trajectory.push(state.pos);

    debug!(steps = params.steps, dt = params.dt, mu = params.mu(), "starting simulation");

    if contact.inside(&state.pos) {
        let outcome = Outcome::StartedInsideBody { radius: state.radius() };
        warn!("{}", outcome);
        return Ok(SimResult { trajectory, final_state: state, outcome });
    }

    for i in 0..params.steps {
        state = rk4_step(&state, params, params.dt);
        trajectory.push(state.pos);

        // Central body impact
        if contact.inside(&state.pos) {
            let outcome = Outcome::Impact { step: i + 1, radius: state.radius() };
            warn!("{}", outcome);
            return Ok(SimResult { trajectory, final_state: state, outcome });
        }
    }

    let outcome = Outcome::Completed { steps: params.steps };
    debug!(samples = trajectory.len(), "{}", outcome);
    Ok(SimResult { trajectory, final_state: state, outcome })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{presets, SimParamsBuilder};

    #[test]
    fn zero_steps_gives_initial_point_only() {
        let p = SimParamsBuilder::new().steps(0).build();
        let r = simulate(&p).unwrap();
        assert_eq!(r.trajectory.len(), 1);
        assert_eq!(r.trajectory.points[0], p.initial.pos);
        assert_eq!(r.outcome, Outcome::Completed { steps: 0 });
    }

    #[test]
    fn start_inside_body_does_not_step() {
        let p = SimParamsBuilder::new()
            .initial(State::new(0.05, 0.0, 0.0, 1.0))
            .central_body_radius(0.1)
            .steps(100)
            .build();
        let r = simulate(&p).unwrap();
        assert_eq!(r.trajectory.len(), 1);
        assert_eq!(r.final_state, p.initial);
        assert!(matches!(r.outcome, Outcome::StartedInsideBody { .. }));
    }

    #[test]
    fn start_at_origin_with_zero_radius_steps_through_singularity() {
        let p = SimParamsBuilder::new()
            .initial(State::new(0.0, 0.0, 1.0, 0.0))
            .central_body_radius(0.0)
            .steps(10)
            .build();
        let r = simulate(&p).unwrap();
        assert_eq!(r.trajectory.len(), 11);
        assert!(r.trajectory.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn unit_orbit_completes() {
        let p = presets::unit_circle();
        let r = simulate(&p).unwrap();
        assert_eq!(r.trajectory.len(), 629);
        assert_eq!(r.outcome, Outcome::Completed { steps: 628 });
        let last = r.trajectory.last().unwrap();
        assert!((last.x - 1.0).abs() < 1e-3, "final x = {}", last.x);
        // 628 * 0.01 falls 0.0032 rad short of a full revolution
        assert!(last.y.abs() < 5e-3, "final y = {}", last.y);
    }

    #[test]
    fn decaying_orbit_hits_surface() {
        let p = presets::decaying_orbit();
        let r = simulate(&p).unwrap();
        match r.outcome {
            Outcome::Impact { step, radius } => {
                assert_eq!(r.trajectory.len(), step + 1);
                assert!(radius < p.central_body_radius);
            }
            other => panic!("expected impact, got {:?}", other),
        }
        assert!(r.trajectory.len() < p.steps + 1);
    }

    #[test]
    fn invalid_dt_is_rejected_not_simulated() {
        let p = SimParamsBuilder::new().dt(0.0).build();
        assert_eq!(simulate(&p), Err(SimError::InvalidTimeStep(0.0)));
    }

    #[test]
    fn capacity_covers_full_run() {
        let p = SimParamsBuilder::new().steps(50).build();
        let r = simulate(&p).unwrap();
        assert!(r.trajectory.points.capacity() >= 51);
        assert_eq!(r.trajectory.len(), 51);
    }
}
