//! Generates sample fleet data: a roster of vehicles and a day of simulated
//! GPS telemetry per vehicle, written as two CSV files.
//!
//! ```no_run
//! use fleet_seed::{SeedConfig, run};
//!
//! let config = SeedConfig::default().with_vehicle_count(3);
//! let now = chrono::Local::now().naive_local();
//! let summary = run(&config, 1, now, &mut rand::rng()).unwrap();
//! assert_eq!(summary.samples, 300);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod prompt;
pub mod table;
pub mod telemetry;
pub mod timestamp;
pub mod vehicles;

pub use config::SeedConfig;
pub use error::SeedError;

use chrono::NaiveDateTime;
use log::info;
use rand::Rng;

/// Row counts of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub vehicles: usize,
    pub samples: usize,
}

/// Writes the vehicle roster, then the telemetry generated from that same
/// in-memory roster.
///
/// Both files are replaced. Any write failure aborts the run.
pub fn run<R: Rng + ?Sized>(
    config: &SeedConfig,
    start_id: i64,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<RunSummary, SeedError> {
    config.validate()?;

    info!("Generating {} vehicles starting from id {}", config.vehicle_count, start_id);
    let roster = vehicles::generate_roster(config, start_id, now, rng)?;
    table::write_table(&config.output.vehicles_path, &roster)?;
    info!(
        "Wrote {} vehicles to {}",
        roster.len(),
        config.output.vehicles_path.display()
    );

    let samples = telemetry::generate_telemetry(&roster, config.samples_per_vehicle, now, rng);
    table::write_table(&config.output.telemetry_path, &samples)?;
    info!(
        "Wrote {} telemetry samples to {}",
        samples.len(),
        config.output.telemetry_path.display()
    );

    Ok(RunSummary {
        vehicles: roster.len(),
        samples: samples.len(),
    })
}
