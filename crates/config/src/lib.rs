//! Configuration models, loaders, and input validation for transfer scenarios.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Central body parsed from catalog files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mu_km3_s2: f64,
    pub radius_km: f64,
}

/// Vehicle configuration parsed from catalog files. Stages are listed in firing order.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VehicleConfig {
    pub name: String,
    #[serde(default)]
    pub payload_mass_kg: f64,
    pub stages: Vec<StageConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StageConfig {
    pub name: String,
    pub dry_mass_kg: f64,
    pub wet_mass_kg: f64,
    pub isp_seconds: f64,
}

/// A radius given either from the body's center or as an altitude above its surface.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum RadiusConfig {
    Radius { radius_km: f64 },
    Altitude { altitude_km: f64 },
}

impl RadiusConfig {
    /// Distance from the center of `body` (km).
    pub fn resolve(&self, body: &BodyConfig) -> f64 {
        match *self {
            RadiusConfig::Radius { radius_km } => radius_km,
            RadiusConfig::Altitude { altitude_km } => body.radius_km + altitude_km,
        }
    }
}

/// Orbit described by its apsides.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    pub periapsis: RadiusConfig,
    pub apoapsis: RadiusConfig,
}

impl OrbitConfig {
    /// Resolved (periapsis, apoapsis) radii in km.
    pub fn resolve(&self, body: &BodyConfig) -> (f64, f64) {
        (self.periapsis.resolve(body), self.apoapsis.resolve(body))
    }
}

/// One maneuver to evaluate inside a scenario.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ManeuverConfig {
    EllipseToEllipse {
        #[serde(default)]
        label: Option<String>,
        origin: OrbitConfig,
        target: OrbitConfig,
    },
    HyperbolaToEllipse {
        #[serde(default)]
        label: Option<String>,
        approach: RadiusConfig,
        approach_speed_km_s: f64,
        target: OrbitConfig,
    },
    Bielliptic {
        #[serde(default)]
        label: Option<String>,
        initial: RadiusConfig,
        target: RadiusConfig,
        apex: RadiusConfig,
    },
    Hohmann {
        #[serde(default)]
        label: Option<String>,
        initial: RadiusConfig,
        target: RadiusConfig,
    },
}

impl ManeuverConfig {
    /// Short identifier of the maneuver family.
    pub fn kind(&self) -> &'static str {
        match self {
            ManeuverConfig::EllipseToEllipse { .. } => "ellipse_to_ellipse",
            ManeuverConfig::HyperbolaToEllipse { .. } => "hyperbola_to_ellipse",
            ManeuverConfig::Bielliptic { .. } => "bielliptic",
            ManeuverConfig::Hohmann { .. } => "hohmann",
        }
    }

    /// Configured label, falling back to the kind.
    pub fn label(&self) -> &str {
        let label = match self {
            ManeuverConfig::EllipseToEllipse { label, .. }
            | ManeuverConfig::HyperbolaToEllipse { label, .. }
            | ManeuverConfig::Bielliptic { label, .. }
            | ManeuverConfig::Hohmann { label, .. } => label.as_deref(),
        };
        label.unwrap_or_else(|| self.kind())
    }
}

/// A named set of maneuvers around a single central body.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    pub body: String,
    #[serde(default)]
    pub vehicle: Option<String>,
    #[serde(default)]
    pub isp_seconds: Option<f64>,
    pub maneuvers: Vec<ManeuverConfig>,
}

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

fn check_positive(what: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{what} must be positive and finite, got {value}")))
    }
}

fn check_orbit(what: &str, orbit: &OrbitConfig, body: &BodyConfig) -> Result<(), ConfigError> {
    let (periapsis, apoapsis) = orbit.resolve(body);
    check_positive(&format!("{what} periapsis radius"), periapsis)?;
    check_positive(&format!("{what} apoapsis radius"), apoapsis)?;
    if apoapsis < periapsis {
        return Err(invalid(format!(
            "{what} apoapsis ({apoapsis} km) lies below periapsis ({periapsis} km)"
        )));
    }
    Ok(())
}

impl BodyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive(&format!("{} gravitational parameter", self.name), self.mu_km3_s2)?;
        if !(self.radius_km.is_finite() && self.radius_km >= 0.0) {
            return Err(invalid(format!(
                "{} radius must be non-negative, got {}",
                self.name, self.radius_km
            )));
        }
        Ok(())
    }
}

impl VehicleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages.is_empty() {
            return Err(invalid(format!("vehicle '{}' has no stages", self.name)));
        }
        if !(self.payload_mass_kg.is_finite() && self.payload_mass_kg >= 0.0) {
            return Err(invalid(format!(
                "vehicle '{}' payload mass must be non-negative",
                self.name
            )));
        }
        for stage in &self.stages {
            check_positive(&format!("stage '{}' dry mass", stage.name), stage.dry_mass_kg)?;
            check_positive(&format!("stage '{}' isp", stage.name), stage.isp_seconds)?;
            if stage.wet_mass_kg < stage.dry_mass_kg {
                return Err(invalid(format!(
                    "stage '{}' wet mass is below its dry mass",
                    stage.name
                )));
            }
        }
        Ok(())
    }
}

impl ScenarioConfig {
    /// Check every radius and speed against `body` before any delta-v is evaluated.
    pub fn validate(&self, body: &BodyConfig) -> Result<(), ConfigError> {
        body.validate()?;
        if self.maneuvers.is_empty() {
            return Err(invalid(format!("scenario '{}' lists no maneuvers", self.name)));
        }
        if let Some(isp) = self.isp_seconds {
            check_positive("scenario isp", isp)?;
        }
        for maneuver in &self.maneuvers {
            let label = maneuver.label();
            match maneuver {
                ManeuverConfig::EllipseToEllipse { origin, target, .. } => {
                    check_orbit(&format!("{label} origin"), origin, body)?;
                    check_orbit(&format!("{label} target"), target, body)?;
                }
                ManeuverConfig::HyperbolaToEllipse {
                    approach,
                    approach_speed_km_s,
                    target,
                    ..
                } => {
                    check_positive(&format!("{label} approach radius"), approach.resolve(body))?;
                    if !(approach_speed_km_s.is_finite() && *approach_speed_km_s >= 0.0) {
                        return Err(invalid(format!(
                            "{label} approach speed must be non-negative, got {approach_speed_km_s}"
                        )));
                    }
                    check_orbit(&format!("{label} target"), target, body)?;
                }
                ManeuverConfig::Bielliptic {
                    initial,
                    target,
                    apex,
                    ..
                } => {
                    check_positive(&format!("{label} initial radius"), initial.resolve(body))?;
                    check_positive(&format!("{label} target radius"), target.resolve(body))?;
                    check_positive(&format!("{label} apex radius"), apex.resolve(body))?;
                }
                ManeuverConfig::Hohmann {
                    initial, target, ..
                } => {
                    check_positive(&format!("{label} initial radius"), initial.resolve(body))?;
                    check_positive(&format!("{label} target radius"), target.resolve(body))?;
                }
            }
        }
        Ok(())
    }
}

/// Load central bodies from a YAML list, a TOML file, or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Load vehicle configurations from a YAML list, a TOML file, or a directory of TOML files.
pub fn load_vehicle_configs<P: AsRef<Path>>(path: P) -> Result<Vec<VehicleConfig>, ConfigError> {
    load_records(path)
}

/// Load a single scenario manifest (TOML by extension, YAML otherwise).
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    debug!("loading scenario from {}", path.display());
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let records = if path.is_dir() {
        read_dir_records(path)?
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        vec![record]
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
