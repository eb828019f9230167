//! SENSO migration planner entry point.
//!
//! Reads a `getEvents` export of the legacy token, folds it into a balance
//! snapshot and writes the `batch_transfer` chunk plan used to redistribute
//! the supply of a redeployed token.

mod chunks;
mod config;
mod errors;
mod events;
mod snapshot;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use events::EventsExport;
use snapshot::Snapshot;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging (RUST_LOG controls verbosity).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load optional .env file (ignored if missing).
    let _ = dotenvy::dotenv();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("{e}"))?;
    info!("Reading events from {}", config.events_file.display());

    let export = EventsExport::load(&config.events_file)?;
    if let Some(closed_at) = events::last_closed_at(&export.events) {
        info!("Export ends at {closed_at}");
    }

    let movements = events::decode_movements(&export.events)?;
    let mut snapshot = Snapshot::fold(&movements, config.cutoff_ledger)?;
    snapshot.remap(&config.remaps);
    snapshot.prune();
    info!(
        "Snapshot: {} holders, {} tokens",
        snapshot.holders(),
        snapshot.total()
    );

    let plan = chunks::plan(&snapshot, config.chunk_size, config.cutoff_ledger)?;
    plan.write(&config.output_file)?;
    info!(
        "Wrote {} chunks to {}",
        plan.chunks.len(),
        config.output_file.display()
    );

    Ok(())
}
