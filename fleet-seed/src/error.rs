use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a seeding run.
#[derive(Debug, Error)]
pub enum SeedError {
    /// An output file could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// The configuration loaded fine but describes an impossible run.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `start_id + vehicle_count` does not fit in a vehicle id.
    #[error("vehicle ids starting at {start_id} overflow for {count} vehicles")]
    IdRange { start_id: i64, count: usize },

    /// Standard input ended before a usable start id was given.
    #[error("input closed before a starting vehicle id was entered")]
    InputClosed,

    /// Reading the answer or writing the prompt failed.
    #[error("prompt failed: {0}")]
    Prompt(#[source] std::io::Error),
}
