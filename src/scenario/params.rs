use crate::dynamics::state::State;
use crate::physics::propulsion;
use crate::sim::error::SimError;

/// Largest step count a single run accepts. The trajectory reserves
/// `steps + 1` points up front (16 bytes each), so this caps a run at ~160 MB.
pub const MAX_STEPS: usize = 10_000_000;

// ---------------------------------------------------------------------------
// Simulation parameters (one record per run)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    pub initial: State,
    pub g: f64,                    // gravitational constant
    pub central_mass: f64,         // M
    pub thrust_coefficient: f64,   // 1/s
    pub drag_coefficient: f64,     // 1/s
    pub central_body_radius: f64,  // termination radius
    pub dt: f64,                   // fixed increment, s
    pub steps: usize,              // maximum number of increments
}

impl SimParams {
    /// Standard gravitational parameter mu = G * M.
    pub fn mu(&self) -> f64 {
        self.g * self.central_mass
    }

    /// Net linear propulsion/drag factor.
    pub fn net_factor(&self) -> f64 {
        propulsion::net_factor(self.thrust_coefficient, self.drag_coefficient)
    }

    /// Simulated time if every step runs.
    pub fn duration(&self) -> f64 {
        self.steps as f64 * self.dt
    }

    /// Change the increment while keeping the simulated time, recomputing
    /// the step count as floor(duration / dt), at least one.
    pub fn rescale_dt(&mut self, dt: f64) -> Result<(), SimError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(dt));
        }
        let duration = self.duration();
        self.steps = checked_steps_for_duration(duration, dt)
            .ok_or(SimError::TooManySteps { steps: steps_for_duration(duration, dt), max: MAX_STEPS })?;
        self.dt = dt;
        Ok(())
    }

    /// Reject configurations the integrator cannot meaningfully run.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        if self.steps > MAX_STEPS {
            return Err(SimError::TooManySteps { steps: self.steps, max: MAX_STEPS });
        }
        let fields = [
            ("g", self.g),
            ("central_mass", self.central_mass),
            ("thrust_coefficient", self.thrust_coefficient),
            ("drag_coefficient", self.drag_coefficient),
            ("central_body_radius", self.central_body_radius),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SimError::NonFinite { field, value });
            }
        }
        if self.central_body_radius < 0.0 {
            return Err(SimError::NegativeRadius(self.central_body_radius));
        }
        if !self.initial.is_finite() {
            return Err(SimError::NonFiniteInitialState);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Parameter builder
// ---------------------------------------------------------------------------

pub struct SimParamsBuilder {
    initial: State,
    g: f64,
    central_mass: f64,
    thrust_coefficient: f64,
    drag_coefficient: f64,
    central_body_radius: f64,
    dt: f64,
    steps: usize,
}

impl SimParamsBuilder {
    /// Starts from a unit circular orbit in normalized units (mu = 1).
    pub fn new() -> Self {
        Self {
            initial: State::new(1.0, 0.0, 0.0, 1.0),
            g: 1.0,
            central_mass: 1.0,
            thrust_coefficient: 0.0,
            drag_coefficient: 0.0,
            central_body_radius: 0.1,
            dt: 0.01,
            steps: 628,
        }
    }

    pub fn initial(mut self, v: State) -> Self { self.initial = v; self }
    pub fn g(mut self, v: f64) -> Self { self.g = v; self }
    pub fn central_mass(mut self, v: f64) -> Self { self.central_mass = v; self }
    pub fn thrust_coefficient(mut self, v: f64) -> Self { self.thrust_coefficient = v; self }
    pub fn drag_coefficient(mut self, v: f64) -> Self { self.drag_coefficient = v; self }
    pub fn central_body_radius(mut self, v: f64) -> Self { self.central_body_radius = v; self }
    pub fn dt(mut self, v: f64) -> Self { self.dt = v; self }
    pub fn steps(mut self, v: usize) -> Self { self.steps = v; self }

    /// Derive the step count from a total simulated time: floor(duration / dt), at least 1.
    /// Call after `dt`.
    pub fn duration(mut self, duration: f64) -> Self {
        self.steps = steps_for_duration(duration, self.dt);
        self
    }

    pub fn build(self) -> SimParams {
        SimParams {
            initial: self.initial,
            g: self.g,
            central_mass: self.central_mass,
            thrust_coefficient: self.thrust_coefficient,
            drag_coefficient: self.drag_coefficient,
            central_body_radius: self.central_body_radius,
            dt: self.dt,
            steps: self.steps,
        }
    }
}

impl Default for SimParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of whole increments in `duration`, clamped to at least one.
/// Degenerate inputs (non-positive or non-finite) also give one step;
/// callers that need to reject them check before calling.
pub fn steps_for_duration(duration: f64, dt: f64) -> usize {
    let n = (duration / dt).floor();
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        1
    }
}

/// Like [`steps_for_duration`], but `None` when the count exceeds [`MAX_STEPS`].
pub fn checked_steps_for_duration(duration: f64, dt: f64) -> Option<usize> {
    let n = (duration / dt).floor();
    if n.is_finite() && n > MAX_STEPS as f64 {
        None
    } else {
        Some(steps_for_duration(duration, dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_are_valid() {
        let p = SimParamsBuilder::new().build();
        assert!(p.validate().is_ok());
        assert_eq!(p.mu(), 1.0);
        assert_eq!(p.steps, 628);
    }

    #[test]
    fn net_factor_is_thrust_minus_drag() {
        let p = SimParamsBuilder::new()
            .thrust_coefficient(0.3)
            .drag_coefficient(0.1)
            .build();
        assert!((p.net_factor() - 0.2).abs() < 1e-15);
    }

    #[test]
    fn zero_and_negative_dt_rejected() {
        for dt in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let p = SimParamsBuilder::new().dt(dt).build();
            assert!(
                matches!(p.validate(), Err(SimError::InvalidTimeStep(_))),
                "dt={} should be rejected",
                dt
            );
        }
    }

    #[test]
    fn non_finite_fields_rejected() {
        let p = SimParamsBuilder::new().central_mass(f64::NAN).build();
        match p.validate() {
            Err(SimError::NonFinite { field, .. }) => assert_eq!(field, "central_mass"),
            other => panic!("expected NonFinite, got {:?}", other),
        }

        let p = SimParamsBuilder::new()
            .initial(State::new(1.0, f64::INFINITY, 0.0, 0.0))
            .build();
        assert_eq!(p.validate(), Err(SimError::NonFiniteInitialState));
    }

    #[test]
    fn negative_radius_rejected() {
        let p = SimParamsBuilder::new().central_body_radius(-1.0).build();
        assert_eq!(p.validate(), Err(SimError::NegativeRadius(-1.0)));
    }

    #[test]
    fn steps_from_duration_round_down_with_floor_of_one() {
        assert_eq!(steps_for_duration(10.0, 0.3), 33);
        assert_eq!(steps_for_duration(0.001, 1.0), 1);
        assert_eq!(steps_for_duration(0.0, 1.0), 1);
        let p = SimParamsBuilder::new().dt(0.5).duration(100.0).build();
        assert_eq!(p.steps, 200);
        assert!((p.duration() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn oversized_step_count_rejected() {
        let p = SimParamsBuilder::new().steps(usize::MAX).build();
        assert_eq!(
            p.validate(),
            Err(SimError::TooManySteps { steps: usize::MAX, max: MAX_STEPS })
        );
        let p = SimParamsBuilder::new().steps(MAX_STEPS).build();
        assert!(p.validate().is_ok());
        let p = SimParamsBuilder::new().steps(MAX_STEPS + 1).build();
        assert!(p.validate().is_err());
    }

    #[test]
    fn huge_duration_saturates_but_fails_validation() {
        // 1e30 / 1.0 saturates to usize::MAX; it must never reach the runner.
        let p = SimParamsBuilder::new().dt(1.0).duration(1e30).build();
        assert_eq!(p.steps, usize::MAX);
        assert!(matches!(p.validate(), Err(SimError::TooManySteps { .. })));
        assert!(matches!(
            crate::sim::simulate(&p),
            Err(SimError::TooManySteps { .. })
        ));
    }

    #[test]
    fn checked_steps_respects_ceiling() {
        assert_eq!(checked_steps_for_duration(100.0, 0.5), Some(200));
        assert_eq!(checked_steps_for_duration(0.1, 1.0), Some(1));
        assert_eq!(checked_steps_for_duration(1e30, 1.0), None);
        assert_eq!(checked_steps_for_duration(1e15, 1.0), None);
    }

    #[test]
    fn rescale_dt_keeps_duration() {
        let mut p = SimParamsBuilder::new().dt(1.0).steps(5545).build();
        p.rescale_dt(10.0).unwrap();
        assert_eq!(p.dt, 10.0);
        assert_eq!(p.steps, 554);

        let mut p = SimParamsBuilder::new().dt(1.0).steps(100).build();
        p.rescale_dt(0.1).unwrap();
        assert!((999..=1000).contains(&p.steps), "got {}", p.steps);

        let mut p = SimParamsBuilder::new().dt(1.0).steps(10).build();
        assert_eq!(p.rescale_dt(0.0), Err(SimError::InvalidTimeStep(0.0)));
        assert_eq!((p.dt, p.steps), (1.0, 10));

        let mut p = SimParamsBuilder::new().dt(1.0).steps(1_000_000).build();
        assert!(matches!(p.rescale_dt(1e-6), Err(SimError::TooManySteps { .. })));
        assert_eq!(p.steps, 1_000_000);
    }
}
