use crate::dynamics::state::State;
use crate::physics::gravity::{circular_period, circular_speed, G_NEWTON, M_EARTH, R_EARTH};
use super::params::{SimParams, SimParamsBuilder};

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

pub const NAMES: [&str; 4] = ["unit-circle", "low-earth-orbit", "decaying-orbit", "escape-burn"];

/// Look up a preset by its CLI name.
pub fn by_name(name: &str) -> Option<SimParams> {
    match name {
        "unit-circle" => Some(unit_circle()),
        "low-earth-orbit" => Some(low_earth_orbit()),
        "decaying-orbit" => Some(decaying_orbit()),
        "escape-burn" => Some(escape_burn()),
        _ => None,
    }
}

/// Unit circular orbit in normalized units (mu = 1), ~one revolution.
pub fn unit_circle() -> SimParams {
    SimParamsBuilder::new()
        .initial(State::new(1.0, 0.0, 0.0, 1.0))
        .g(1.0)
        .central_mass(1.0)
        .central_body_radius(0.1)
        .dt(0.01)
        .steps(628)
        .build()
}

/// 400 km circular Earth orbit, one period at 1 s steps.
pub fn low_earth_orbit() -> SimParams {
    let mu = G_NEWTON * M_EARTH;
    let r = R_EARTH + 400_000.0;
    SimParamsBuilder::new()
        .initial(State::new(r, 0.0, 0.0, circular_speed(mu, r)))
        .g(G_NEWTON)
        .central_mass(M_EARTH)
        .central_body_radius(R_EARTH)
        .dt(1.0)
        .duration(circular_period(mu, r))
        .build()
}

/// Unit orbit with net drag; spirals in and hits a body of radius 0.5.
pub fn decaying_orbit() -> SimParams {
    SimParamsBuilder::new()
        .initial(State::new(1.0, 0.0, 0.0, 1.0))
        .drag_coefficient(0.05)
        .central_body_radius(0.5)
        .dt(0.01)
        .steps(2_000)
        .build()
}

/// Unit orbit with net thrust; spirals outward.
pub fn escape_burn() -> SimParams {
    SimParamsBuilder::new()
        .initial(State::new(1.0, 0.0, 0.0, 1.0))
        .thrust_coefficient(0.1)
        .central_body_radius(0.1)
        .dt(0.01)
        .steps(3_000)
        .build()
}
