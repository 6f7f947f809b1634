use thiserror::Error;

/// Configuration defects rejected before any stepping happens.
///
/// A body hitting the central body is not an error; see [`crate::sim::Outcome`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
    #[error("parameter `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("central body radius must not be negative, got {0}")]
    NegativeRadius(f64),
    #[error("step count {steps} exceeds the limit of {max}")]
    TooManySteps { steps: usize, max: usize },
    #[error("initial position and velocity must be finite")]
    NonFiniteInitialState,
}
