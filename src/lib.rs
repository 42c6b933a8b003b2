//! Closed-form impulsive transfer calculator.
//!
//! The math lives in small crates that perform no I/O: `orbits` (two-body relations),
//! `impulsive` (Hohmann and bi-elliptic delta-v), and `propulsion` (propellant budgets).
//! Configuration, scenario evaluation, and export are layered on top so front-ends (the
//! `orbital` CLI, plotting tools) share the same pipeline.

pub use orbital_config as config;
pub use orbital_core as core;
pub use orbital_export as export;
pub use orbital_impulsive as impulsive;
pub use orbital_orbits as orbits;
pub use orbital_propulsion as propulsion;
pub use orbital_transfer as transfer;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
