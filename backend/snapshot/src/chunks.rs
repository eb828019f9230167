//! Splitting a snapshot into `batch_transfer` calls.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{Result, SnapshotError};
use crate::snapshot::Snapshot;

/// Arguments of one `batch_transfer` call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub addresses: Vec<String>,
    pub balances: Vec<i128>,
    pub total: i128,
}

/// Everything the operator needs to replay a migration.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkPlan {
    pub generated_at: DateTime<Utc>,
    pub cutoff_ledger: Option<u64>,
    pub chunk_size: usize,
    pub holders: usize,
    /// Amount the caller must hold and approve to the migrator.
    pub total: i128,
    pub chunks: Vec<Chunk>,
}

impl ChunkPlan {
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Split `snapshot` into chunks of at most `chunk_size` holders and check
/// that the chunks carry exactly the snapshot total.
pub fn plan(snapshot: &Snapshot, chunk_size: usize, cutoff_ledger: Option<u64>) -> Result<ChunkPlan> {
    if chunk_size == 0 {
        return Err(SnapshotError::Config("chunk size must be positive".to_string()));
    }

    let entries: Vec<(&String, &i128)> = snapshot.entries().collect();
    let chunks: Vec<Chunk> = entries
        .chunks(chunk_size)
        .enumerate()
        .map(|(index, part)| {
            let addresses = part.iter().map(|(account, _)| (*account).clone()).collect();
            let balances: Vec<i128> = part.iter().map(|(_, balance)| **balance).collect();
            Chunk {
                index,
                addresses,
                total: balances.iter().sum(),
                balances,
            }
        })
        .collect();

    let expected = snapshot.total();
    let actual: i128 = chunks.iter().map(|chunk| chunk.total).sum();
    if actual != expected {
        return Err(SnapshotError::Conservation { expected, actual });
    }

    Ok(ChunkPlan {
        generated_at: Utc::now(),
        cutoff_ledger,
        chunk_size,
        holders: snapshot.holders(),
        total: expected,
        chunks,
    })
}
