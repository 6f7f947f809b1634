pub mod gravity;
pub mod propulsion;

pub use gravity::{point_mass_accel, specific_angular_momentum, specific_energy};
pub use propulsion::{net_accel, net_factor};
