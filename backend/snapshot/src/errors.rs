//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event parse error: {0}")]
    EventParse(String),

    #[error("Balance of {account} went negative at ledger {ledger}")]
    NegativeBalance { account: String, ledger: u64 },

    #[error("Chunks carry {actual} tokens but the snapshot holds {expected}")]
    Conservation { expected: i128, actual: i128 },
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
