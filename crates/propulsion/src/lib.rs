//! Propellant budgeting for impulsive burns and staged vehicle mass properties.

use orbital_core::constants::G0_KM_S2;

/// Fraction of the initial mass burned to achieve `dv`: `1 - exp(dv / (g0 * isp))`.
///
/// The sign of `g0` selects the convention. Pass standard gravity as a **negative** number, in the
/// same length unit as `dv` (for `dv` in km/s use `-9.80665e-3`), to get a positive fraction in
/// `[0, 1)`. A positive `g0` yields a negative fraction. Nothing is checked; `g0 * isp == 0`
/// produces an infinite exponent.
pub fn mass_consumed(dv: f64, g0: f64, isp: f64) -> f64 {
    1.0 - (dv / (g0 * isp)).exp()
}

/// Propellant fraction for a burn of `dv_km_s` with an engine of `isp_seconds`.
///
/// Same as [`mass_consumed`] with the negative km/s² standard gravity applied for you.
pub fn propellant_fraction(dv_km_s: f64, isp_seconds: f64) -> f64 {
    mass_consumed(dv_km_s, -G0_KM_S2, isp_seconds)
}

/// Propellant mass (kg) burned from `initial_mass_kg` to deliver `dv_km_s`.
pub fn propellant_for_burn(initial_mass_kg: f64, dv_km_s: f64, isp_seconds: f64) -> f64 {
    initial_mass_kg * propellant_fraction(dv_km_s, isp_seconds)
}

/// Effective exhaust speed (km/s) for a specific impulse.
#[inline]
pub fn exhaust_speed_km_s(isp_seconds: f64) -> f64 {
    G0_KM_S2 * isp_seconds
}

/// A single rocket stage, fuelled (`wet`) and empty (`dry`).
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub name: String,
    pub dry_mass_kg: f64,
    pub wet_mass_kg: f64,
    pub isp_seconds: f64,
}

impl Stage {
    pub fn propellant_mass_kg(&self) -> f64 {
        self.wet_mass_kg - self.dry_mass_kg
    }

    /// Ideal rocket-equation delta-v (km/s) while pushing `payload_kg` on top of this stage.
    pub fn ideal_delta_v_km_s(&self, payload_kg: f64) -> f64 {
        let m0 = self.wet_mass_kg + payload_kg;
        let mf = self.dry_mass_kg + payload_kg;
        exhaust_speed_km_s(self.isp_seconds) * (m0 / mf).ln()
    }
}

/// Vehicle with stages in firing order and a payload carried to the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub name: String,
    pub payload_mass_kg: f64,
    pub stages: Vec<Stage>,
}

impl Vehicle {
    /// Total mass at ignition of the first stage.
    pub fn initial_mass_kg(&self) -> f64 {
        self.payload_mass_kg
            + self
                .stages
                .iter()
                .map(|stage| stage.wet_mass_kg)
                .sum::<f64>()
    }

    /// Delta-v contributed by each stage. A stage carries every later stage plus the payload.
    pub fn stage_delta_v_km_s(&self) -> Vec<f64> {
        let mut carried = self.payload_mass_kg;
        let mut budgets: Vec<f64> = self
            .stages
            .iter()
            .rev()
            .map(|stage| {
                let dv = stage.ideal_delta_v_km_s(carried);
                carried += stage.wet_mass_kg;
                dv
            })
            .collect();
        budgets.reverse();
        budgets
    }

    /// Summed ideal delta-v capacity (km/s) across all stages.
    pub fn total_delta_v_km_s(&self) -> f64 {
        self.stage_delta_v_km_s().iter().sum()
    }

    /// Specific impulse of the first stage to fire, if any.
    pub fn first_stage_isp(&self) -> Option<f64> {
        self.stages.first().map(|stage| stage.isp_seconds)
    }
}
