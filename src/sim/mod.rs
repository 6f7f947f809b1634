pub mod integrator;
pub mod runner;
pub mod event;
pub mod error;
pub mod trajectory;
pub mod worker;

pub use runner::{simulate, SimResult};
pub use integrator::rk4_step;
pub use event::Outcome;
pub use error::SimError;
pub use trajectory::Trajectory;
pub use worker::SimWorker;
