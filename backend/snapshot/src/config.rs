//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use crate::errors::{Result, SnapshotError};

/// Matches the chunk size used for the original redeploy.
pub const DEFAULT_CHUNK_SIZE: usize = 140;

#[derive(Debug, Clone)]
pub struct Config {
    /// `getEvents` export of the legacy token (JSON)
    pub events_file: PathBuf,
    /// Where the chunk plan is written
    pub output_file: PathBuf,
    /// Number of holders per `batch_transfer` call
    pub chunk_size: usize,
    /// Ignore events after this ledger
    pub cutoff_ledger: Option<u64>,
    /// `(old, new)` account pairs
    pub remaps: Vec<(String, String)>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let chunk_size = env_var("CHUNK_SIZE")
            .unwrap_or_else(|_| DEFAULT_CHUNK_SIZE.to_string())
            .parse()
            .map_err(|_| SnapshotError::Config("Invalid CHUNK_SIZE".to_string()))?;
        if chunk_size == 0 {
            return Err(SnapshotError::Config("CHUNK_SIZE must be positive".to_string()));
        }

        let cutoff_ledger = match env_var("CUTOFF_LEDGER") {
            Ok(raw) => Some(
                raw.parse()
                    .map_err(|_| SnapshotError::Config("Invalid CUTOFF_LEDGER".to_string()))?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            events_file: env_var("EVENTS_FILE")
                .map_err(|_| {
                    SnapshotError::Config("EVENTS_FILE environment variable is required".to_string())
                })?
                .into(),
            output_file: env_var("OUTPUT_FILE")
                .unwrap_or_else(|_| "./migration_chunks.json".to_string())
                .into(),
            chunk_size,
            cutoff_ledger,
            remaps: parse_remaps(&env_var("ADDRESS_REMAP").unwrap_or_default())?,
        })
    }
}

/// Parse `old=new,old2=new2`. Blank input yields no remaps.
pub fn parse_remaps(raw: &str) -> Result<Vec<(String, String)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((old, new)) if !old.trim().is_empty() && !new.trim().is_empty() => {
                Ok((old.trim().to_string(), new.trim().to_string()))
            }
            _ => Err(SnapshotError::Config(format!("Invalid ADDRESS_REMAP entry: {pair}"))),
        })
        .collect()
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| SnapshotError::Config(format!("Missing env var: {key}")))
}
