//! Analytic estimators for impulsive transfers between coplanar conics.
//!
//! Provides Hohmann (ellipse-to-ellipse, hyperbola-to-ellipse, circle-to-circle) and bi-elliptic
//! transfer calculators. Burns are reported as non-negative magnitudes and totals are plain sums;
//! nothing here optimizes or ranks alternatives. Inputs are trusted as given, so degenerate radii
//! surface as NaN or infinity in the result.

use orbital_orbits::{Ellipse, ellipse_period_a};

/// Two-burn transfer: enter the transfer orbit, then leave it onto the destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferBurns {
    pub dv_enter_km_s: f64,
    pub dv_exit_km_s: f64,
    pub dv_total_km_s: f64, // dv_enter + dv_exit
    pub tof_seconds: f64,   // half period of the transfer ellipse
}

impl TransferBurns {
    fn new(dv_enter_km_s: f64, dv_exit_km_s: f64, transfer: &Ellipse, u: f64) -> Self {
        Self {
            dv_enter_km_s,
            dv_exit_km_s,
            dv_total_km_s: dv_enter_km_s + dv_exit_km_s,
            tof_seconds: half_period(transfer, u),
        }
    }
}

impl From<TransferBurns> for (f64, f64, f64) {
    fn from(burns: TransferBurns) -> Self {
        (burns.dv_enter_km_s, burns.dv_exit_km_s, burns.dv_total_km_s)
    }
}

/// Both tangent transfers between two ellipses. The caller picks one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseTransferOptions {
    /// Leave orbit 1 at its periapsis, arrive at orbit 2's apoapsis.
    pub periapsis_to_apoapsis: TransferBurns,
    /// Leave orbit 1 at its apoapsis, arrive at orbit 2's periapsis.
    pub apoapsis_to_periapsis: TransferBurns,
}

impl From<EllipseTransferOptions> for ((f64, f64, f64), (f64, f64, f64)) {
    fn from(options: EllipseTransferOptions) -> Self {
        (
            options.periapsis_to_apoapsis.into(),
            options.apoapsis_to_periapsis.into(),
        )
    }
}

/// Three-burn bi-elliptic transfer through an intermediate apex radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiEllipticBurns {
    pub dv1_km_s: f64,
    pub dv2_km_s: f64,
    pub dv3_km_s: f64,
    pub dv_total_km_s: f64,
    pub tof_seconds: f64,
}

impl From<BiEllipticBurns> for (f64, f64, f64, f64) {
    fn from(burns: BiEllipticBurns) -> Self {
        (
            burns.dv1_km_s,
            burns.dv2_km_s,
            burns.dv3_km_s,
            burns.dv_total_km_s,
        )
    }
}

fn half_period(orbit: &Ellipse, u: f64) -> f64 {
    ellipse_period_a(u, orbit.semi_major_axis()) / 2.0
}

/// Hohmann transfer between two elliptical orbits, evaluated along both tangent paths.
///
/// Inputs:
/// - `r1_p`, `r1_ap`: apsides of the starting orbit (km)
/// - `r2_p`, `r2_ap`: apsides of the destination orbit (km)
/// - `u`: gravitational parameter of the central body (km^3/s^2)
pub fn hohmann_transfer_etoe(
    r1_p: f64,
    r1_ap: f64,
    r2_p: f64,
    r2_ap: f64,
    u: f64,
) -> EllipseTransferOptions {
    let origin = Ellipse::new(r1_p, r1_ap);
    let destination = Ellipse::new(r2_p, r2_ap);

    // Path 1 spans origin periapsis to destination apoapsis
    let transfer_1 = Ellipse::new(r1_p, r2_ap);
    let dv_enter_1 = (transfer_1.periapsis_speed(u) - origin.periapsis_speed(u)).abs();
    let dv_exit_1 = (destination.apoapsis_speed(u) - transfer_1.apoapsis_speed(u)).abs();

    // Path 2 spans destination periapsis to origin apoapsis
    let transfer_2 = Ellipse::new(r2_p, r1_ap);
    let dv_enter_2 = (transfer_2.apoapsis_speed(u) - origin.apoapsis_speed(u)).abs();
    let dv_exit_2 = (destination.periapsis_speed(u) - transfer_2.periapsis_speed(u)).abs();

    EllipseTransferOptions {
        periapsis_to_apoapsis: TransferBurns::new(dv_enter_1, dv_exit_1, &transfer_1, u),
        apoapsis_to_periapsis: TransferBurns::new(dv_enter_2, dv_exit_2, &transfer_2, u),
    }
}

/// Hohmann transfer from a hyperbolic approach onto an elliptical orbit.
///
/// `r_apr` is the closest-approach radius of the hyperbola and `v_apr` the speed there; both are
/// supplied by the caller rather than derived. The transfer ellipse joins `r_p` and `r_apr`.
pub fn hohmann_transfer_htoe(r_apr: f64, v_apr: f64, r_p: f64, r_ap: f64, u: f64) -> TransferBurns {
    let destination = Ellipse::new(r_p, r_ap);
    let transfer = Ellipse::new(r_p, r_apr);

    let dv_enter = (transfer.periapsis_speed(u) - destination.periapsis_speed(u)).abs();
    let dv_exit = (v_apr - transfer.apoapsis_speed(u)).abs();

    TransferBurns::new(dv_enter, dv_exit, &transfer, u)
}

/// Classical Hohmann transfer between two circular coplanar orbits of radii `r_1` and `r_2`.
pub fn hohmann_transfer_ctoc(r_1: f64, r_2: f64, u: f64) -> TransferBurns {
    hohmann_transfer_etoe(r_1, r_1, r_2, r_2, u).periapsis_to_apoapsis
}

/// Bi-elliptic transfer between circular orbits `r_0` and `r_f` through apex radius `r_b`.
///
/// This function does not optimize `r_b`; it evaluates the three burns for the ellipses
/// (r_0 -> r_b) and (r_b -> r_f). For large r_f/r_0 ratios a distant apex can beat Hohmann.
pub fn hohmann_bielliptic_ctoc(r_0: f64, r_f: f64, r_b: f64, u: f64) -> BiEllipticBurns {
    let inner = Ellipse::circular(r_0);
    let outer = Ellipse::circular(r_f);
    let transfer_1 = Ellipse::new(r_0, r_b);
    let transfer_2 = Ellipse::new(r_f, r_b);

    let dv1 = (transfer_1.periapsis_speed(u) - inner.periapsis_speed(u)).abs();
    // at r_b (match velocities)
    let dv2 = (transfer_2.apoapsis_speed(u) - transfer_1.apoapsis_speed(u)).abs();
    let dv3 = (outer.periapsis_speed(u) - transfer_2.periapsis_speed(u)).abs();

    BiEllipticBurns {
        dv1_km_s: dv1,
        dv2_km_s: dv2,
        dv3_km_s: dv3,
        dv_total_km_s: dv1 + dv2 + dv3,
        tof_seconds: half_period(&transfer_1, u) + half_period(&transfer_2, u),
    }
}
