//! Re-exported APIs for consumers of the transfer crate.

pub use crate::plan::{ManeuverReport, PlanError, ScenarioReport, VehicleBudget, plan_scenario};
pub use crate::sweep::{SweepPoint, bielliptic_sweep};
pub use orbital_propulsion::{Stage, Vehicle};

pub mod vehicle {
    use orbital_config::{ConfigError, VehicleConfig};
    use orbital_propulsion::{Stage, Vehicle};
    use thiserror::Error;

    /// Errors surfaced when selecting or converting vehicles.
    #[derive(Debug, Error)]
    pub enum VehicleError {
        #[error("vehicle '{0}' not found in catalog")]
        NotFound(String),
        #[error("vehicle catalog is empty")]
        EmptyCatalog,
        #[error("vehicle configuration rejected: {0}")]
        Invalid(#[from] ConfigError),
    }

    /// Convert a `VehicleConfig` into runtime `Vehicle` representation.
    pub fn from_config(config: &VehicleConfig) -> Result<Vehicle, VehicleError> {
        config.validate()?;
        let stages = config
            .stages
            .iter()
            .map(|stage| Stage {
                name: stage.name.clone(),
                dry_mass_kg: stage.dry_mass_kg,
                wet_mass_kg: stage.wet_mass_kg,
                isp_seconds: stage.isp_seconds,
            })
            .collect();

        Ok(Vehicle {
            name: config.name.clone(),
            payload_mass_kg: config.payload_mass_kg,
            stages,
        })
    }

    /// Select a vehicle from the catalog by name (case-insensitive).
    pub fn select(configs: &[VehicleConfig], requested: &str) -> Result<Vehicle, VehicleError> {
        if configs.is_empty() {
            return Err(VehicleError::EmptyCatalog);
        }

        let upper = requested.to_uppercase();
        let chosen = configs
            .iter()
            .find(|cfg| cfg.name.to_uppercase() == upper)
            .ok_or_else(|| VehicleError::NotFound(requested.to_string()))?;

        from_config(chosen)
    }
}
