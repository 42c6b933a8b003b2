//! Transfer façade crate: scenario evaluation and sweeps over the impulsive estimators.

pub mod plan;
pub mod sweep;

pub use facade::*;
pub use orbital_impulsive as impulsive;
pub use orbital_propulsion as propulsion;

mod facade;
