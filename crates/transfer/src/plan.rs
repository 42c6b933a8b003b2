//! Scenario evaluation: resolve configured orbits against a body and run each transfer.

use log::{debug, info};
use orbital_config::{BodyConfig, ConfigError, ManeuverConfig, ScenarioConfig, VehicleConfig};
use orbital_impulsive::{
    TransferBurns, hohmann_bielliptic_ctoc, hohmann_transfer_ctoc, hohmann_transfer_etoe,
    hohmann_transfer_htoe,
};
use orbital_propulsion::{Vehicle, propellant_fraction};
use serde::Serialize;

use crate::facade::vehicle::{self, VehicleError};

/// Top-level scenario planning error.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("central body '{0}' not found in catalog")]
    UnknownBody(String),
    #[error("vehicle selection failed: {0}")]
    Vehicle(#[from] VehicleError),
    #[error("scenario rejected: {0}")]
    Config(#[from] ConfigError),
    #[error("sweep needs at least two apex samples, got {0}")]
    EmptySweep(usize),
}

/// Delta-v breakdown of a single transfer path.
#[derive(Debug, Clone, Serialize)]
pub struct ManeuverReport {
    pub label: String,
    pub kind: &'static str,
    pub burns_km_s: Vec<f64>,
    pub dv_total_km_s: f64,
    pub tof_seconds: f64,
    pub propellant_fraction: Option<f64>,
    /// Whether this path alone stays within the vehicle's staged capacity.
    pub fits_vehicle: Option<bool>,
}

/// Staged capacity of the vehicle flown in a scenario.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleBudget {
    pub name: String,
    pub initial_mass_kg: f64,
    pub capacity_km_s: f64,
}

/// Evaluated scenario. Alternative paths of one maneuver appear as separate, unranked entries.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub body: String,
    pub mu_km3_s2: f64,
    pub vehicle: Option<VehicleBudget>,
    pub maneuvers: Vec<ManeuverReport>,
}

fn find_body<'a>(bodies: &'a [BodyConfig], name: &str) -> Result<&'a BodyConfig, PlanError> {
    let upper = name.to_uppercase();
    bodies
        .iter()
        .find(|b| b.name.to_uppercase() == upper)
        .ok_or_else(|| PlanError::UnknownBody(name.to_string()))
}

/// Validate `scenario`, then evaluate every maneuver around its central body.
pub fn plan_scenario(
    scenario: &ScenarioConfig,
    bodies: &[BodyConfig],
    vehicles: &[VehicleConfig],
) -> Result<ScenarioReport, PlanError> {
    let body = find_body(bodies, &scenario.body)?;
    scenario.validate(body)?;

    let vehicle: Option<Vehicle> = scenario
        .vehicle
        .as_deref()
        .map(|name| vehicle::select(vehicles, name))
        .transpose()?;
    let isp = scenario
        .isp_seconds
        .or_else(|| vehicle.as_ref().and_then(Vehicle::first_stage_isp));
    let budget = vehicle.as_ref().map(|v| VehicleBudget {
        name: v.name.clone(),
        initial_mass_kg: v.initial_mass_kg(),
        capacity_km_s: v.total_delta_v_km_s(),
    });

    let u = body.mu_km3_s2;
    let mut maneuvers = Vec::new();
    for maneuver in &scenario.maneuvers {
        debug!("evaluating {} '{}'", maneuver.kind(), maneuver.label());
        maneuvers.extend(evaluate(maneuver, body, u));
    }

    for report in &mut maneuvers {
        report.propellant_fraction = isp.map(|isp| propellant_fraction(report.dv_total_km_s, isp));
        report.fits_vehicle = budget
            .as_ref()
            .map(|b| report.dv_total_km_s <= b.capacity_km_s);
    }

    info!(
        "scenario '{}' around {}: {} transfer paths evaluated",
        scenario.name,
        body.name,
        maneuvers.len()
    );

    Ok(ScenarioReport {
        scenario: scenario.name.clone(),
        body: body.name.clone(),
        mu_km3_s2: u,
        vehicle: budget,
        maneuvers,
    })
}

fn two_burn(label: String, kind: &'static str, burns: TransferBurns) -> ManeuverReport {
    ManeuverReport {
        label,
        kind,
        burns_km_s: vec![burns.dv_enter_km_s, burns.dv_exit_km_s],
        dv_total_km_s: burns.dv_total_km_s,
        tof_seconds: burns.tof_seconds,
        propellant_fraction: None,
        fits_vehicle: None,
    }
}

fn evaluate(maneuver: &ManeuverConfig, body: &BodyConfig, u: f64) -> Vec<ManeuverReport> {
    let label = maneuver.label().to_string();
    let kind = maneuver.kind();
    match maneuver {
        ManeuverConfig::EllipseToEllipse { origin, target, .. } => {
            let (r1_p, r1_ap) = origin.resolve(body);
            let (r2_p, r2_ap) = target.resolve(body);
            let options = hohmann_transfer_etoe(r1_p, r1_ap, r2_p, r2_ap, u);
            vec![
                two_burn(
                    format!("{label} (periapsis->apoapsis)"),
                    kind,
                    options.periapsis_to_apoapsis,
                ),
                two_burn(
                    format!("{label} (apoapsis->periapsis)"),
                    kind,
                    options.apoapsis_to_periapsis,
                ),
            ]
        }
        ManeuverConfig::HyperbolaToEllipse {
            approach,
            approach_speed_km_s,
            target,
            ..
        } => {
            let (r_p, r_ap) = target.resolve(body);
            let burns =
                hohmann_transfer_htoe(approach.resolve(body), *approach_speed_km_s, r_p, r_ap, u);
            vec![two_burn(label, kind, burns)]
        }
        ManeuverConfig::Hohmann { initial, target, .. } => {
            let burns = hohmann_transfer_ctoc(initial.resolve(body), target.resolve(body), u);
            vec![two_burn(label, kind, burns)]
        }
        ManeuverConfig::Bielliptic {
            initial,
            target,
            apex,
            ..
        } => {
            let burns = hohmann_bielliptic_ctoc(
                initial.resolve(body),
                target.resolve(body),
                apex.resolve(body),
                u,
            );
            vec![ManeuverReport {
                label,
                kind,
                burns_km_s: vec![burns.dv1_km_s, burns.dv2_km_s, burns.dv3_km_s],
                dv_total_km_s: burns.dv_total_km_s,
                tof_seconds: burns.tof_seconds,
                propellant_fraction: None,
                fits_vehicle: None,
            }]
        }
    }
}
