//! Scenario loading from YAML and from free-text form fields.
//!
//! A scenario file looks like:
//!
//! ```yaml
//! name: "unit circle"
//! initial: { x: 1.0, y: 0.0, vx: 0.0, vy: 1.0 }
//! body: { g: 1.0, mass: 1.0, radius: 0.1 }
//! propulsion: { thrust_coefficient: 0.0, drag_coefficient: 0.0 }
//! integration: { dt: 0.01, steps: 628 }
//! ```
//!
//! `propulsion` may be omitted. `integration` takes exactly one of `steps`
//! or `duration` (total simulated time, rounded down to whole steps, min 1).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::dynamics::state::State;
use crate::physics::gravity::{G_NEWTON, R_EARTH};
use crate::sim::SimError;
use super::params::{checked_steps_for_duration, SimParams, SimParamsBuilder};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("integration needs exactly one of `steps` or `duration`")]
    StepsOrDuration,
    #[error(transparent)]
    Sim(#[from] SimError),
}

// ---------------------------------------------------------------------------
// YAML scenario
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug, Clone)]
pub struct InitialConfig {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub g: f64,       // gravitational constant
    pub mass: f64,    // central body mass
    pub radius: f64,  // termination radius
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PropulsionConfig {
    #[serde(default)]
    pub thrust_coefficient: f64,
    #[serde(default)]
    pub drag_coefficient: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct IntegrationConfig {
    pub dt: f64,
    pub steps: Option<usize>,
    pub duration: Option<f64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub initial: InitialConfig,
    pub body: BodyConfig,
    #[serde(default)]
    pub propulsion: PropulsionConfig,
    pub integration: IntegrationConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: ScenarioConfig = serde_yaml::from_reader(reader)?;
        info!(path = %path.display(), name = config.name.as_deref().unwrap_or("unnamed"), "loaded scenario");
        Ok(config)
    }

    /// Build validated simulation parameters.
    pub fn to_params(&self) -> Result<SimParams, ConfigError> {
        let i = &self.integration;
        let builder = SimParamsBuilder::new()
            .initial(State::new(self.initial.x, self.initial.y, self.initial.vx, self.initial.vy))
            .g(self.body.g)
            .central_mass(self.body.mass)
            .central_body_radius(self.body.radius)
            .thrust_coefficient(self.propulsion.thrust_coefficient)
            .drag_coefficient(self.propulsion.drag_coefficient)
            .dt(i.dt);

        let builder = match (i.steps, i.duration) {
            (Some(steps), None) => builder.steps(steps),
            (None, Some(duration)) => {
                if !duration.is_finite() || duration <= 0.0 {
                    return Err(ConfigError::InvalidField {
                        field: "duration",
                        value: duration.to_string(),
                    });
                }
                let steps = checked_steps_for_duration(duration, i.dt).ok_or_else(|| {
                    ConfigError::InvalidField {
                        field: "duration",
                        value: duration.to_string(),
                    }
                })?;
                builder.steps(steps)
            }
            _ => return Err(ConfigError::StepsOrDuration),
        };

        let params = builder.build();
        params.validate()?;
        Ok(params)
    }
}

// ---------------------------------------------------------------------------
// Form inputs (GUI text fields / CLI)
// ---------------------------------------------------------------------------

/// Gravitational constant used by form-driven runs.
pub const DEFAULT_G: f64 = G_NEWTON;
/// Central body radius used by form-driven runs.
pub const DEFAULT_BODY_RADIUS: f64 = R_EARTH;
/// Starting altitude above the surface, m.
pub const DEFAULT_ALTITUDE: f64 = 400_000.0;
/// Fixed increment for form-driven runs, s.
pub const DEFAULT_DT: f64 = 1.0;

/// Raw text of the user-editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInputs {
    pub central_mass: String,
    pub initial_speed: String,
    pub total_time: String,
    pub drag_coefficient: String,
    pub thrust_coefficient: String,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            central_mass: "5.9722e24".into(),
            initial_speed: "7670".into(),
            total_time: "5600".into(),
            drag_coefficient: "0".into(),
            thrust_coefficient: "0".into(),
        }
    }
}

impl FormInputs {
    /// Parse every field; the first malformed one is reported and nothing is built.
    ///
    /// The body starts at `(R + DEFAULT_ALTITUDE, 0)` moving along +y at the
    /// given speed. Steps are `floor(total_time / DEFAULT_DT)`, at least one;
    /// a total time needing more than `MAX_STEPS` increments is rejected.
    pub fn to_params(&self) -> Result<SimParams, ConfigError> {
        let central_mass = parse_field("central mass", &self.central_mass)?;
        let speed = parse_field("initial speed", &self.initial_speed)?;
        let total_time = parse_field("total time", &self.total_time)?;
        let drag = parse_field("drag coefficient", &self.drag_coefficient)?;
        let thrust = parse_field("thrust coefficient", &self.thrust_coefficient)?;

        if total_time <= 0.0 {
            return Err(ConfigError::InvalidField {
                field: "total time",
                value: self.total_time.clone(),
            });
        }

        let steps = checked_steps_for_duration(total_time, DEFAULT_DT).ok_or_else(|| {
            ConfigError::InvalidField {
                field: "total time",
                value: self.total_time.clone(),
            }
        })?;

        let params = SimParamsBuilder::new()
            .initial(State::new(DEFAULT_BODY_RADIUS + DEFAULT_ALTITUDE, 0.0, 0.0, speed))
            .g(DEFAULT_G)
            .central_mass(central_mass)
            .central_body_radius(DEFAULT_BODY_RADIUS)
            .drag_coefficient(drag)
            .thrust_coefficient(thrust)
            .dt(DEFAULT_DT)
            .steps(steps)
            .build();
        params.validate()?;
        Ok(params)
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<f64, ConfigError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::InvalidField { field, value: text.to_string() }),
    }
}
