use orbital_transfers::core::constants::{EARTH_RADIUS_KM, G0, G0_KM_S2};
use orbital_transfers::core::time::split_duration;
use orbital_transfers::core::units::earth_radius_at;

#[test]
fn standard_gravity_in_km_per_s2() {
    assert!((G0_KM_S2 * 1_000.0 - G0).abs() < 1e-12);
}

#[test]
fn altitude_is_measured_from_mean_radius() {
    assert_eq!(earth_radius_at(0.0), EARTH_RADIUS_KM);
    assert_eq!(earth_radius_at(500.0), 6_878.0);
}

#[test]
fn durations_split_into_days_hours_minutes() {
    assert_eq!(split_duration(65_942.17), (0, 18, 19));
    assert_eq!(split_duration(2.0 * 86_400.0 + 3_660.0), (2, 1, 1));
    assert_eq!(split_duration(-5.0), (0, 0, 0));
}
