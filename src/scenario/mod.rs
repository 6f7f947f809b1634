pub mod params;
pub mod presets;
pub mod config;

pub use params::{checked_steps_for_duration, steps_for_duration, SimParams, SimParamsBuilder, MAX_STEPS};
pub use config::{ConfigError, FormInputs, ScenarioConfig};
