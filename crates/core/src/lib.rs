//! Core units, constants, and shared primitives for the orbital transfer workspace.

/// Physical constants. Lengths are in kilometres unless the name says otherwise.
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Standard gravity expressed in km/s², matching delta-v values in km/s.
    pub const G0_KM_S2: f64 = G0 / 1_000.0;
    /// Mean equatorial radius of Earth (km).
    pub const EARTH_RADIUS_KM: f64 = 6_378.0;
    /// Gravitational parameter of Earth (km³/s²).
    pub const EARTH_MU_KM3_S2: f64 = 398_600.0;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::EARTH_RADIUS_KM;

    /// Radius from Earth's center of a point `altitude_km` above the mean surface.
    #[inline]
    pub fn earth_radius_at(altitude_km: f64) -> f64 {
        EARTH_RADIUS_KM + altitude_km
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Split a duration into whole (days, hours, minutes), clamping negatives to zero.
    pub fn split_duration(seconds: f64) -> (i64, i64, i64) {
        let total_seconds = seconds.max(0.0);
        let days = (total_seconds / SECONDS_PER_DAY).floor() as i64;
        let remaining = total_seconds - (days as f64 * SECONDS_PER_DAY);
        let hours = (remaining / 3_600.0).floor() as i64;
        let minutes = ((remaining - hours as f64 * 3_600.0) / 60.0).floor() as i64;
        (days, hours, minutes)
    }
}
