use orbital_transfers::orbits::{
    ConicKind, Ellipse, OrbitalElements, eccentricity, ellipse_angular_mom, ellipse_period_a,
    ellipse_period_he, ellipse_semi_major_axis, orbit_formula,
};

const MU_EARTH: f64 = 398_600.0; // km^3 / s^2

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * b.abs().max(1.0)
}

#[test]
fn eccentricity_stays_in_unit_interval_for_ordered_apsides() {
    let radii = [6_500.0, 7_000.0, 10_000.0, 42_164.0, 384_400.0];
    for &r_p in &radii {
        for &r_ap in radii.iter().filter(|&&r| r >= r_p) {
            let e = eccentricity(r_p, r_ap);
            assert!((0.0..1.0).contains(&e), "e({r_p}, {r_ap}) = {e}");
        }
        assert_eq!(eccentricity(r_p, r_p), 0.0);
    }
}

#[test]
fn semi_major_axis_is_exact_mean() {
    assert_eq!(ellipse_semi_major_axis(7_000.0, 105_000.0), 56_000.0);
    assert_eq!(ellipse_semi_major_axis(6_858.0, 7_178.0), (6_858.0 + 7_178.0) / 2.0);
}

#[test]
fn circular_angular_momentum_matches_sqrt_mu_r() {
    for r in [6_878.0, 22_378.0, 105_000.0] {
        let h = ellipse_angular_mom(MU_EARTH, r, r);
        assert!(rel_close(h, (MU_EARTH * r).sqrt(), 1e-12), "h = {h}");
    }
}

#[test]
fn reference_flight_time_matches_half_period() {
    let half = ellipse_period_a(MU_EARTH, 56_000.0) / 2.0;
    assert!(rel_close(half, 65_942.174_764_703_64, 1e-9), "half = {half}");
}

#[test]
fn period_from_angular_momentum_agrees_with_semi_major_axis() {
    let (r_p, r_ap) = (7_000.0, 105_000.0);
    let h = ellipse_angular_mom(MU_EARTH, r_p, r_ap);
    let e = eccentricity(r_p, r_ap);
    let from_he = ellipse_period_he(MU_EARTH, h, e);
    let from_a = ellipse_period_a(MU_EARTH, ellipse_semi_major_axis(r_p, r_ap));
    assert!(rel_close(from_he, from_a, 1e-9), "{from_he} vs {from_a}");
}

#[test]
fn orbit_formula_recovers_apsides() {
    let (r_p, r_ap) = (6_858.0, 7_178.0);
    let h = ellipse_angular_mom(MU_EARTH, r_p, r_ap);
    let e = eccentricity(r_p, r_ap);
    assert!(rel_close(orbit_formula(MU_EARTH, h, e, 0.0), r_p, 1e-12));
    assert!(rel_close(
        orbit_formula(MU_EARTH, h, e, std::f64::consts::PI),
        r_ap,
        1e-12
    ));
}

#[test]
fn orbit_formula_diverges_at_hyperbolic_asymptote() {
    let e: f64 = 1.5;
    let h = 80_000.0;
    let semi_latus = h * h / MU_EARTH;
    let theta_inf = (-1.0 / e).acos();

    let inside = orbit_formula(MU_EARTH, h, e, theta_inf - 1e-6);
    let beyond = orbit_formula(MU_EARTH, h, e, theta_inf + 1e-6);
    assert!(inside > 1e5 * semi_latus, "r = {inside}");
    assert!(beyond < 0.0, "r = {beyond}");
}

#[test]
fn invalid_inputs_propagate_as_non_finite() {
    assert!(ellipse_angular_mom(MU_EARTH, 0.0, 0.0).is_nan());
    assert!(ellipse_period_he(MU_EARTH, 60_000.0, 1.2).is_nan());
}

#[test]
fn ellipse_record_delegates_to_helpers() {
    let orbit = Ellipse::new(6_858.0, 7_178.0);
    let h = ellipse_angular_mom(MU_EARTH, 6_858.0, 7_178.0);
    assert_eq!(orbit.angular_momentum(MU_EARTH), h);
    assert_eq!(orbit.periapsis_speed(MU_EARTH), h / 6_858.0);
    assert_eq!(orbit.apoapsis_speed(MU_EARTH), h / 7_178.0);
    assert!(orbit.periapsis_speed(MU_EARTH) > orbit.apoapsis_speed(MU_EARTH));
    assert_eq!(Ellipse::circular(7_000.0).eccentricity(), 0.0);
    let transfer = Ellipse::new(7_000.0, 105_000.0);
    assert_eq!(transfer.semi_major_axis(), 56_000.0);
    assert!(rel_close(transfer.period(MU_EARTH) / 2.0, 65_942.174_764_703_64, 1e-9));
}

#[test]
fn orbital_elements_classify_and_measure() {
    let (r_p, r_ap) = (7_000.0, 105_000.0);
    let elliptic = OrbitalElements {
        angular_momentum_km2_s: ellipse_angular_mom(MU_EARTH, r_p, r_ap),
        inclination_rad: 0.4,
        raan_rad: 1.0,
        eccentricity: eccentricity(r_p, r_ap),
        arg_periapsis_rad: 0.2,
        true_anomaly_rad: 0.0,
    };
    assert_eq!(elliptic.conic(), ConicKind::Ellipse);
    assert!(rel_close(elliptic.radius(MU_EARTH), r_p, 1e-12));
    let apsides = elliptic.ellipse(MU_EARTH).expect("closed orbit");
    assert!(rel_close(apsides.periapsis_km, r_p, 1e-12));
    assert!(rel_close(apsides.apoapsis_km, r_ap, 1e-9));
    let period = elliptic.period(MU_EARTH).expect("closed orbit");
    assert!(rel_close(period, 2.0 * 65_942.174_764_703_64, 1e-9));

    let hyperbolic = OrbitalElements {
        eccentricity: 1.5,
        ..elliptic
    };
    assert_eq!(hyperbolic.conic(), ConicKind::Hyperbola);
    assert!(hyperbolic.apoapsis_radius(MU_EARTH).is_none());
    assert!(hyperbolic.period(MU_EARTH).is_none());
    assert_eq!(ConicKind::from_eccentricity(0.0), ConicKind::Circle);
    assert_eq!(ConicKind::from_eccentricity(1.0), ConicKind::Parabola);
}
