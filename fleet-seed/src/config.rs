use crate::{catalog::Catalog, error::SeedError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Owner every generated vehicle is assigned to.
pub const DEFAULT_USER_ID: &str = "dfba8674-979e-41af-917e-49af3bd28343";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub vehicles_path: PathBuf,
    pub telemetry_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            vehicles_path: PathBuf::from("vehicles.csv"),
            telemetry_path: PathBuf::from("vehicle_datas.csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub vehicle_count: usize,
    pub samples_per_vehicle: usize,
    pub user_id: String,
    /// Off by default: random ids would point at geofences that don't exist.
    pub assign_random_geofence: bool,
    pub catalog: Catalog,
    pub output: OutputConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            vehicle_count: 100,
            samples_per_vehicle: 100,
            user_id: DEFAULT_USER_ID.to_string(),
            assign_random_geofence: false,
            catalog: Catalog::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SeedConfig {
    /// Load configuration from an optional `fleet-seed.toml` in the working
    /// directory, falling back to the built-in defaults.
    pub fn load() -> Result<Self, SeedError> {
        Self::build(config::File::with_name("fleet-seed").required(false))
    }

    /// Same as [`load`](SeedConfig::load), reading the overrides from `path`.
    pub fn load_from(path: &Path) -> Result<Self, SeedError> {
        Self::build(config::File::from(path).required(false))
    }

    fn build<S>(file: S) -> Result<Self, SeedError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&SeedConfig::default())?)
            .add_source(file)
            .build()?;

        let config: SeedConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_vehicle_count(mut self, vehicle_count: usize) -> Self {
        self.vehicle_count = vehicle_count;
        self
    }

    pub fn with_samples_per_vehicle(mut self, samples_per_vehicle: usize) -> Self {
        self.samples_per_vehicle = samples_per_vehicle;
        self
    }

    pub fn with_output(mut self, vehicles_path: PathBuf, telemetry_path: PathBuf) -> Self {
        self.output = OutputConfig {
            vehicles_path,
            telemetry_path,
        };
        self
    }

    pub fn validate(&self) -> Result<(), SeedError> {
        if self.vehicle_count == 0 {
            return Err(SeedError::InvalidConfig(
                "vehicle_count must be at least 1".to_string(),
            ));
        }
        if self.samples_per_vehicle == 0 {
            return Err(SeedError::InvalidConfig(
                "samples_per_vehicle must be at least 1".to_string(),
            ));
        }
        if self.catalog.is_empty() {
            return Err(SeedError::InvalidConfig("catalog has no makes".to_string()));
        }
        if let Some(make) = self.catalog.first_empty_make() {
            return Err(SeedError::InvalidConfig(format!("make {make} has no models")));
        }
        Ok(())
    }
}
