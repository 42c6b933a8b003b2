//! Apex-radius sweep comparing bi-elliptic transfers against the direct Hohmann baseline.

use orbital_impulsive::{hohmann_bielliptic_ctoc, hohmann_transfer_ctoc};
use serde::Serialize;

use crate::plan::PlanError;

/// One apex radius sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub apex_km: f64,
    pub bielliptic_dv_km_s: f64,
    pub hohmann_dv_km_s: f64,
    pub bielliptic_tof_s: f64,
    pub hohmann_tof_s: f64,
}

impl SweepPoint {
    /// True when the bi-elliptic route costs less delta-v than Hohmann at this apex.
    pub fn bielliptic_saves(&self) -> bool {
        self.bielliptic_dv_km_s < self.hohmann_dv_km_s
    }
}

/// Evaluate bi-elliptic transfers `r_0 -> r_f` for `steps` evenly spaced apex radii
/// between `apex_min_km` and `apex_max_km` inclusive. No minimum is searched for.
pub fn bielliptic_sweep(
    r_0: f64,
    r_f: f64,
    apex_min_km: f64,
    apex_max_km: f64,
    steps: usize,
    u: f64,
) -> Result<Vec<SweepPoint>, PlanError> {
    if steps < 2 {
        return Err(PlanError::EmptySweep(steps));
    }

    let baseline = hohmann_transfer_ctoc(r_0, r_f, u);
    let span = apex_max_km - apex_min_km;
    let points = (0..steps)
        .map(|i| {
            let apex_km = apex_min_km + span * i as f64 / (steps - 1) as f64;
            let bi = hohmann_bielliptic_ctoc(r_0, r_f, apex_km, u);
            SweepPoint {
                apex_km,
                bielliptic_dv_km_s: bi.dv_total_km_s,
                hohmann_dv_km_s: baseline.dv_total_km_s,
                bielliptic_tof_s: bi.tof_seconds,
                hohmann_tof_s: baseline.tof_seconds,
            }
        })
        .collect();
    Ok(points)
}
