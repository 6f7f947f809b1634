pub mod dynamics;
pub mod physics;
pub mod scenario;
pub mod sim;
pub mod io;

// Flat re-exports for the common entry points
pub use dynamics::state::State;
pub use scenario::{SimParams, SimParamsBuilder};
pub use sim::{simulate, Outcome, SimError, SimResult, Trajectory};
