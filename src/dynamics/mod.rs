pub mod state;
pub mod derivatives;

pub use state::{Deriv, State};
pub use derivatives::derivatives;
