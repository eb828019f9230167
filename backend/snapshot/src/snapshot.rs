//! Folding decoded movements into a balance snapshot.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::errors::{Result, SnapshotError};
use crate::events::Movement;

/// Spendable balances keyed by strkey as exported, in account order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    balances: BTreeMap<String, i128>,
}

impl Snapshot {
    /// Replay `movements` up to and including `cutoff_ledger`.
    ///
    /// Fails if any balance would go negative, which means the export is
    /// missing events.
    pub fn fold(movements: &[Movement], cutoff_ledger: Option<u64>) -> Result<Self> {
        let mut snapshot = Snapshot::default();
        for movement in movements {
            if cutoff_ledger.is_some_and(|cutoff| movement.ledger > cutoff) {
                break;
            }
            if let Some(from) = &movement.from {
                snapshot.debit(from, movement.amount, movement.ledger)?;
            }
            if let Some(to) = &movement.to {
                *snapshot.balances.entry(to.clone()).or_insert(0) += movement.amount;
            }
        }
        Ok(snapshot)
    }

    fn debit(&mut self, account: &str, amount: i128, ledger: u64) -> Result<()> {
        let balance = self.balances.entry(account.to_string()).or_insert(0);
        *balance -= amount;
        if *balance < 0 {
            return Err(SnapshotError::NegativeBalance {
                account: account.to_string(),
                ledger,
            });
        }
        Ok(())
    }

    /// Move the balance of each `old` account onto its `new` account.
    pub fn remap(&mut self, remaps: &[(String, String)]) {
        for (old, new) in remaps {
            match self.balances.remove(old) {
                Some(balance) => {
                    info!("Remapping {old} -> {new} ({balance})");
                    *self.balances.entry(new.clone()).or_insert(0) += balance;
                }
                None => warn!("Remap source {old} holds nothing"),
            }
        }
    }

    /// Drop accounts with nothing to migrate.
    pub fn prune(&mut self) {
        self.balances.retain(|_, balance| *balance > 0);
    }

    pub fn total(&self) -> i128 {
        self.balances.values().sum()
    }

    pub fn holders(&self) -> usize {
        self.balances.len()
    }

    #[cfg(test)]
    pub fn balance(&self, account: &str) -> i128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &i128)> {
        self.balances.iter()
    }
}
