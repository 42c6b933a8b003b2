//! Immutable orbit descriptions built on the closed-form helpers.

use super::{
    eccentricity, ellipse_angular_mom, ellipse_period_a, ellipse_period_he,
    ellipse_semi_major_axis, orbit_formula,
};

/// Coplanar orbit described by its apsides (km from the central body's center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub periapsis_km: f64,
    pub apoapsis_km: f64,
}

impl Ellipse {
    pub fn new(periapsis_km: f64, apoapsis_km: f64) -> Self {
        Self {
            periapsis_km,
            apoapsis_km,
        }
    }

    /// Circular orbit of radius `radius_km`.
    pub fn circular(radius_km: f64) -> Self {
        Self::new(radius_km, radius_km)
    }

    pub fn eccentricity(&self) -> f64 {
        eccentricity(self.periapsis_km, self.apoapsis_km)
    }

    pub fn semi_major_axis(&self) -> f64 {
        ellipse_semi_major_axis(self.periapsis_km, self.apoapsis_km)
    }

    pub fn angular_momentum(&self, u: f64) -> f64 {
        ellipse_angular_mom(u, self.periapsis_km, self.apoapsis_km)
    }

    /// Speed at periapsis (km/s).
    pub fn periapsis_speed(&self, u: f64) -> f64 {
        self.angular_momentum(u) / self.periapsis_km
    }

    /// Speed at apoapsis (km/s).
    pub fn apoapsis_speed(&self, u: f64) -> f64 {
        self.angular_momentum(u) / self.apoapsis_km
    }

    /// Orbital period (s).
    pub fn period(&self, u: f64) -> f64 {
        ellipse_period_a(u, self.semi_major_axis())
    }
}

/// Conic section family implied by an eccentricity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConicKind {
    Circle,
    Ellipse,
    Parabola,
    Hyperbola,
}

impl ConicKind {
    pub fn from_eccentricity(e: f64) -> Self {
        if e == 0.0 {
            ConicKind::Circle
        } else if e < 1.0 {
            ConicKind::Ellipse
        } else if e == 1.0 {
            ConicKind::Parabola
        } else {
            ConicKind::Hyperbola
        }
    }

    /// Closed conics repeat; open ones have no period or apoapsis.
    pub fn is_closed(self) -> bool {
        matches!(self, ConicKind::Circle | ConicKind::Ellipse)
    }
}

/// The six classical orbital elements, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub angular_momentum_km2_s: f64,
    pub inclination_rad: f64,
    pub raan_rad: f64,
    pub eccentricity: f64,
    pub arg_periapsis_rad: f64,
    pub true_anomaly_rad: f64,
}

impl OrbitalElements {
    pub fn conic(&self) -> ConicKind {
        ConicKind::from_eccentricity(self.eccentricity)
    }

    /// Current distance from the central body (km).
    pub fn radius(&self, u: f64) -> f64 {
        orbit_formula(
            u,
            self.angular_momentum_km2_s,
            self.eccentricity,
            self.true_anomaly_rad,
        )
    }

    pub fn periapsis_radius(&self, u: f64) -> f64 {
        orbit_formula(u, self.angular_momentum_km2_s, self.eccentricity, 0.0)
    }

    /// Apoapsis radius, or `None` for open conics.
    pub fn apoapsis_radius(&self, u: f64) -> Option<f64> {
        self.conic().is_closed().then(|| {
            orbit_formula(
                u,
                self.angular_momentum_km2_s,
                self.eccentricity,
                std::f64::consts::PI,
            )
        })
    }

    /// Orbital period, or `None` for open conics.
    pub fn period(&self, u: f64) -> Option<f64> {
        self.conic()
            .is_closed()
            .then(|| ellipse_period_he(u, self.angular_momentum_km2_s, self.eccentricity))
    }

    /// Apsides of a closed orbit as an [`Ellipse`].
    pub fn ellipse(&self, u: f64) -> Option<Ellipse> {
        self.apoapsis_radius(u)
            .map(|apoapsis| Ellipse::new(self.periapsis_radius(u), apoapsis))
    }
}
