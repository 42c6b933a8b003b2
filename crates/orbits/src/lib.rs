//! Closed-form two-body orbit relations used by the impulsive transfer estimators.
//!
//! Every function here is a direct evaluation of a textbook formula. Inputs are never
//! checked: radii must be positive and elliptical formulas need `0 <= e < 1`. Out-of-domain
//! arguments propagate as NaN or infinity rather than failing.

pub mod elements;

pub use elements::{ConicKind, Ellipse, OrbitalElements};

use std::f64::consts::PI;

/// Eccentricity of an ellipse with periapsis `r_p` and apoapsis `r_ap` (km).
pub fn eccentricity(r_p: f64, r_ap: f64) -> f64 {
    (r_ap - r_p) / (r_p + r_ap)
}

/// Polar orbit equation: distance from the central body at true anomaly `theta` (rad).
///
/// Diverges where `1 + e cos(theta) = 0`, i.e. along the asymptotes of a hyperbola or parabola.
pub fn orbit_formula(u: f64, h: f64, e: f64, theta: f64) -> f64 {
    (h.powi(2) / u) * (1.0 / (1.0 + e * theta.cos()))
}

/// Period (s) of an ellipse with semi-major axis `a` (km).
pub fn ellipse_period_a(u: f64, a: f64) -> f64 {
    (2.0 * PI * a.powf(1.5)) / u.sqrt()
}

/// Period (s) of an ellipse with angular momentum `h` (km²/s) and eccentricity `e`.
pub fn ellipse_period_he(u: f64, h: f64, e: f64) -> f64 {
    ((2.0 * PI) / u.powi(2)) * (h / (1.0 - e.powi(2)).sqrt()).powi(3)
}

/// Semi-major axis (km) of an ellipse from its apsides.
pub fn ellipse_semi_major_axis(r_p: f64, r_ap: f64) -> f64 {
    (r_p + r_ap) / 2.0
}

/// Specific angular momentum (km²/s) of an ellipse from its apsides.
pub fn ellipse_angular_mom(u: f64, r_p: f64, r_ap: f64) -> f64 {
    (u * 2.0).sqrt() * ((r_p * r_ap) / (r_p + r_ap)).sqrt()
}
