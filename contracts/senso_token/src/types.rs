//! # Types
//!
//! Data structures shared by the ledger, vesting and role modules.
//!
//! ## Supply accounting
//!
//! The token tracks two counters next to the balance map:
//!
//! - `total_supply`: tokens sitting in spendable balances.
//! - `total_frozen`: tokens minted into vesting buckets and not yet released.
//!
//! Frozen tokens are reserved capacity: every mint is checked against
//! `total_supply + total_frozen + amount <= cap`, and releasing a bucket moves
//! its amount from the second counter into the first without touching the sum.

use soroban_sdk::{contracttype, Env, String};

/// Hard cap of the SENSO token.
pub const SENSO_CAP: i128 = 7_692_000_000;

/// Amount minted to the closed-sale wallet when the token is initialised.
pub const SENSO_CLOSED_SALE_AMOUNT: i128 = 2_000_000_000;

/// Immutable token configuration, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenConfig {
    /// Upper bound for `total_supply + total_frozen`.
    pub cap: i128,
    /// Spendable amount minted to the closed-sale wallet at initialisation.
    pub closed_sale_amount: i128,
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

impl TokenConfig {
    /// Production SENSO parameters (whole tokens, no fractional units).
    pub fn senso(env: &Env) -> Self {
        TokenConfig {
            cap: SENSO_CAP,
            closed_sale_amount: SENSO_CLOSED_SALE_AMOUNT,
            decimals: 0,
            name: String::from_str(env, "SENSOToken"),
            symbol: String::from_str(env, "SENSO"),
        }
    }
}

/// Accumulated frozen amount for one `(beneficiary, freeze_duration)` pair.
///
/// `release_time` is overwritten by every contribution, so stacking a new
/// purchase onto an existing bucket restarts its clock.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrozenBucket {
    pub amount: i128,
    /// Ledger timestamp from which the bucket can be released.
    pub release_time: u64,
}

/// SEP-41 allowance entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    /// Last ledger sequence at which the allowance is still usable.
    pub expiration_ledger: u32,
}

/// Capability sets maintained by the token.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// May call `mint`.
    Minter,
    /// May pause, unpause and manage transfer exemptions.
    Pauser,
}
