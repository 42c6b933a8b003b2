use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{debug, info};
use orbital_transfers::config::{load_bodies, load_scenario, load_vehicle_configs};
use orbital_transfers::core::constants::{EARTH_MU_KM3_S2, G0_KM_S2};
use orbital_transfers::core::time::split_duration;
use orbital_transfers::core::units::earth_radius_at;
use orbital_transfers::export::{self, report::ManeuverRow, sweep::SweepRow};
use orbital_transfers::impulsive::{
    TransferBurns, hohmann_bielliptic_ctoc, hohmann_transfer_ctoc, hohmann_transfer_etoe,
    hohmann_transfer_htoe,
};
use orbital_transfers::orbits::ellipse_period_a;
use orbital_transfers::propulsion::{mass_consumed, propellant_fraction};
use orbital_transfers::transfer::{ScenarioReport, bielliptic_sweep, plan_scenario};

const LOG_VAR: &str = "ORBITAL_LOG";

/// Impulsive transfer calculator (Hohmann, bi-elliptic, hyperbolic capture).
#[derive(Parser)]
#[command(author, version, about = "Closed-form impulsive transfer calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hohmann transfer between two ellipses (both tangent paths)
    Etoe {
        /// Periapsis radius of the starting orbit (km)
        #[arg(long)]
        r1_p: f64,
        /// Apoapsis radius of the starting orbit (km)
        #[arg(long)]
        r1_ap: f64,
        /// Periapsis radius of the destination orbit (km)
        #[arg(long)]
        r2_p: f64,
        /// Apoapsis radius of the destination orbit (km)
        #[arg(long)]
        r2_ap: f64,
        /// Gravitational parameter (km^3/s^2), defaults to Earth
        #[arg(long, default_value_t = EARTH_MU_KM3_S2)]
        mu: f64,
    },
    /// Hohmann transfer from a hyperbolic approach onto an ellipse
    Htoe {
        /// Closest-approach radius of the hyperbola (km)
        #[arg(long)]
        r_approach: f64,
        /// Speed at closest approach (km/s)
        #[arg(long)]
        v_approach: f64,
        /// Periapsis radius of the destination orbit (km)
        #[arg(long)]
        r_p: f64,
        /// Apoapsis radius of the destination orbit (km)
        #[arg(long)]
        r_ap: f64,
        #[arg(long, default_value_t = EARTH_MU_KM3_S2)]
        mu: f64,
        /// Specific impulse (s) for a propellant fraction estimate
        #[arg(long)]
        isp: Option<f64>,
    },
    /// Hohmann transfer between two circular orbits
    Hohmann {
        #[arg(long)]
        r1: f64,
        #[arg(long)]
        r2: f64,
        #[arg(long, default_value_t = EARTH_MU_KM3_S2)]
        mu: f64,
    },
    /// Bi-elliptic transfer between two circular orbits through an apex radius
    Bielliptic {
        #[arg(long)]
        r0: f64,
        #[arg(long)]
        rf: f64,
        #[arg(long)]
        rb: f64,
        #[arg(long, default_value_t = EARTH_MU_KM3_S2)]
        mu: f64,
    },
    /// Evaluate a scenario manifest against body and vehicle catalogs
    Scenario {
        /// Scenario file (YAML or TOML)
        path: PathBuf,
        /// Body catalog (YAML list, TOML file, or directory of TOML files)
        #[arg(long, default_value = "configs/bodies")]
        bodies: PathBuf,
        /// Vehicle catalog (YAML list, TOML file, or directory of TOML files)
        #[arg(long, default_value = "configs/vehicles")]
        vehicles: PathBuf,
        /// Write a CSV report ('-' for stdout)
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Write a JSON report ('-' for stdout)
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Sweep bi-elliptic apex radii against the Hohmann baseline (CSV)
    Sweep {
        #[arg(long)]
        r0: f64,
        #[arg(long)]
        rf: f64,
        #[arg(long)]
        apex_min: f64,
        #[arg(long)]
        apex_max: f64,
        #[arg(long, default_value_t = 50)]
        steps: usize,
        #[arg(long, default_value_t = EARTH_MU_KM3_S2)]
        mu: f64,
        /// Output CSV path ('-' for stdout)
        #[arg(long, default_value = "-")]
        output: PathBuf,
    },
    /// Reproduce the reference Earth-orbit calculations
    Reference,
}

fn main() -> anyhow::Result<()> {
    if pretty_env_logger::try_init_custom_env(LOG_VAR).is_err() {
        eprintln!("logger already initialised");
    }
    let cli = Cli::parse();

    match cli.command {
        Command::Etoe {
            r1_p,
            r1_ap,
            r2_p,
            r2_ap,
            mu,
        } => {
            let options = hohmann_transfer_etoe(r1_p, r1_ap, r2_p, r2_ap, mu);
            print_burns("Periapsis -> apoapsis", &options.periapsis_to_apoapsis);
            print_burns("Apoapsis -> periapsis", &options.apoapsis_to_periapsis);
        }
        Command::Htoe {
            r_approach,
            v_approach,
            r_p,
            r_ap,
            mu,
            isp,
        } => {
            let burns = hohmann_transfer_htoe(r_approach, v_approach, r_p, r_ap, mu);
            print_burns("Hyperbola -> ellipse", &burns);
            if let Some(isp) = isp {
                println!(
                    "Propellant     : {:.3}% of initial mass (Isp {isp} s)",
                    propellant_fraction(burns.dv_total_km_s, isp) * 100.0
                );
            }
        }
        Command::Hohmann { r1, r2, mu } => {
            print_burns("Circle -> circle", &hohmann_transfer_ctoc(r1, r2, mu));
        }
        Command::Bielliptic { r0, rf, rb, mu } => {
            let burns = hohmann_bielliptic_ctoc(r0, rf, rb, mu);
            let (d, h, m) = split_duration(burns.tof_seconds);
            println!("=== Bi-elliptic ===");
            println!(
                "Burns          : dv1 = {:.6}, dv2 = {:.6}, dv3 = {:.6} km/s",
                burns.dv1_km_s, burns.dv2_km_s, burns.dv3_km_s
            );
            println!("Total          : Δv = {:.6} km/s", burns.dv_total_km_s);
            println!("Flight time    : {:.1} s ({d}d {h}h {m}m)", burns.tof_seconds);
        }
        Command::Scenario {
            path,
            bodies,
            vehicles,
            csv,
            json,
        } => run_scenario(&path, &bodies, &vehicles, csv, json)?,
        Command::Sweep {
            r0,
            rf,
            apex_min,
            apex_max,
            steps,
            mu,
            output,
        } => {
            let points = bielliptic_sweep(r0, rf, apex_min, apex_max, steps, mu)?;
            let rows: Vec<SweepRow> = points
                .iter()
                .map(|p| SweepRow {
                    apex_km: p.apex_km,
                    bielliptic_dv_km_s: p.bielliptic_dv_km_s,
                    hohmann_dv_km_s: p.hohmann_dv_km_s,
                    bielliptic_tof_s: p.bielliptic_tof_s,
                    hohmann_tof_s: p.hohmann_tof_s,
                })
                .collect();
            let writer = export::writer_for_path(&output)?;
            export::sweep::write_csv(writer, &rows)?;
            let cheaper = points.iter().filter(|p| p.bielliptic_saves()).count();
            info!("{cheaper}/{} apex samples beat the Hohmann baseline", points.len());
        }
        Command::Reference => run_reference(),
    }

    Ok(())
}

fn print_burns(title: &str, burns: &TransferBurns) {
    let (d, h, m) = split_duration(burns.tof_seconds);
    println!("=== {title} ===");
    println!(
        "Burns          : enter = {:.6} km/s, exit = {:.6} km/s",
        burns.dv_enter_km_s, burns.dv_exit_km_s
    );
    println!("Total          : Δv = {:.6} km/s", burns.dv_total_km_s);
    println!("Flight time    : {:.1} s ({d}d {h}h {m}m)", burns.tof_seconds);
}

fn run_scenario(
    path: &Path,
    bodies_path: &Path,
    vehicles_path: &Path,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
) -> anyhow::Result<()> {
    let scenario = load_scenario(path)
        .with_context(|| format!("loading scenario {}", path.display()))?;
    let bodies = load_bodies(bodies_path)
        .with_context(|| format!("loading bodies from {}", bodies_path.display()))?;
    let vehicles = if scenario.vehicle.is_some() {
        load_vehicle_configs(vehicles_path)
            .with_context(|| format!("loading vehicles from {}", vehicles_path.display()))?
    } else {
        Vec::new()
    };
    debug!(
        "{} bodies and {} vehicles available",
        bodies.len(),
        vehicles.len()
    );

    let report = plan_scenario(&scenario, &bodies, &vehicles)?;
    print_report(&report);

    if let Some(csv_path) = csv {
        let rows: Vec<ManeuverRow> = report
            .maneuvers
            .iter()
            .map(|m| {
                ManeuverRow::from_burns(
                    &report.scenario,
                    &m.label,
                    m.kind,
                    &m.burns_km_s,
                    m.dv_total_km_s,
                    m.tof_seconds,
                    m.propellant_fraction,
                )
            })
            .collect();
        export::report::write_csv(export::writer_for_path(&csv_path)?, &rows)?;
        info!("wrote CSV report to {}", csv_path.display());
    }
    if let Some(json_path) = json {
        export::report::write_json(export::writer_for_path(&json_path)?, &report)?;
        info!("wrote JSON report to {}", json_path.display());
    }
    Ok(())
}

fn print_report(report: &ScenarioReport) {
    println!("=== Scenario: {} ({}) ===", report.scenario, report.body);
    if let Some(vehicle) = &report.vehicle {
        println!(
            "Vehicle        : {} ({:.1} kg, capacity Δv = {:.3} km/s)",
            vehicle.name, vehicle.initial_mass_kg, vehicle.capacity_km_s
        );
    }
    for maneuver in &report.maneuvers {
        let burns: Vec<String> = maneuver
            .burns_km_s
            .iter()
            .map(|dv| format!("{dv:.4}"))
            .collect();
        let mut line = format!(
            "{:<40} Δv = {:.4} km/s [{}], TOF = {:.1} s",
            maneuver.label,
            maneuver.dv_total_km_s,
            burns.join(", "),
            maneuver.tof_seconds
        );
        if let Some(fraction) = maneuver.propellant_fraction {
            line.push_str(&format!(", propellant = {:.2}%", fraction * 100.0));
        }
        if maneuver.fits_vehicle == Some(false) {
            line.push_str(" (exceeds vehicle capacity)");
        }
        println!("{line}");
    }
}

fn run_reference() {
    let capture = hohmann_transfer_htoe(
        earth_radius_at(5000.0),
        10.0,
        earth_radius_at(500.0),
        earth_radius_at(500.0),
        EARTH_MU_KM3_S2,
    );
    println!("Delta V total: {}", capture.dv_total_km_s);
    println!(
        "Mass fraction consumed (Isp 250 s): {}",
        mass_consumed(capture.dv_total_km_s, -G0_KM_S2, 250.0)
    );

    let raise = hohmann_transfer_etoe(
        earth_radius_at(480.0),
        earth_radius_at(800.0),
        22378.0,
        22378.0,
        EARTH_MU_KM3_S2,
    );
    println!("Delta V tot1: {}", raise.periapsis_to_apoapsis.dv_total_km_s);
    println!("Delta V tot2: {}", raise.apoapsis_to_periapsis.dv_total_km_s);

    let bielliptic = hohmann_bielliptic_ctoc(7000.0, 105000.0, 210000.0, EARTH_MU_KM3_S2);
    println!("Delta V total (bielliptic): {}", bielliptic.dv_total_km_s);
    println!(
        "Flight time: {}s",
        ellipse_period_a(EARTH_MU_KM3_S2, 56000.0) / 2.0
    );
}
