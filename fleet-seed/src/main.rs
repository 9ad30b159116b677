use fleet_seed::{SeedConfig, SeedError, prompt};
use log::info;
use std::io;

fn seed(config: &SeedConfig) -> Result<(), SeedError> {
    let start_id = prompt::read_start_id(&mut io::stdin().lock(), &mut io::stdout())?;

    // One clock read per run: every vehicle shares the same update_at.
    let now = chrono::Local::now().naive_local();
    let summary = fleet_seed::run(config, start_id, now, &mut rand::rng())?;

    info!(
        "Done: {} vehicles, {} telemetry samples",
        summary.vehicles, summary.samples
    );
    Ok(())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = SeedConfig::load().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {}", err);
        eprintln!("Remove or fix fleet-seed.toml to use the built-in defaults.");
        std::process::exit(1);
    });

    if let Err(err) = seed(&config) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
