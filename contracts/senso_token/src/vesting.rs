//! # Vesting
//!
//! Frozen balances grouped in buckets keyed by `(beneficiary, freeze_duration)`.
//!
//! Contributions with the same duration accumulate in one bucket and reset
//! its `release_time` to `now + freeze_duration`; different durations never
//! merge. A bucket is released in one shot and removed.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage;
use crate::types::FrozenBucket;
use crate::TokenError;

/// Adds `amount` to the bucket and grows `total_frozen`. The cap check is
/// the caller's responsibility.
pub fn freeze(env: &Env, beneficiary: &Address, amount: i128, freeze_duration: u64) -> FrozenBucket {
    let now = env.ledger().timestamp();
    let mut bucket = storage::read_bucket(env, beneficiary, freeze_duration).unwrap_or(FrozenBucket {
        amount: 0,
        release_time: 0,
    });
    bucket.amount += amount;
    bucket.release_time = now.saturating_add(freeze_duration);

    storage::write_bucket(env, beneficiary, freeze_duration, &bucket);
    storage::set_total_frozen(env, storage::get_total_frozen(env) + amount);
    bucket
}

/// Removes a mature bucket and returns its amount. `total_frozen` shrinks by
/// the same amount; crediting the balance is left to the caller.
pub fn release(env: &Env, beneficiary: &Address, freeze_duration: u64) -> i128 {
    let bucket = match storage::read_bucket(env, beneficiary, freeze_duration) {
        Some(bucket) if bucket.amount > 0 && bucket.release_time > 0 => bucket,
        _ => panic_with_error!(env, TokenError::NothingToRelease),
    };
    if env.ledger().timestamp() < bucket.release_time {
        panic_with_error!(env, TokenError::NotMature);
    }

    storage::remove_bucket(env, beneficiary, freeze_duration);
    storage::set_total_frozen(env, storage::get_total_frozen(env) - bucket.amount);
    bucket.amount
}

pub fn frozen_amount(env: &Env, beneficiary: &Address, freeze_duration: u64) -> i128 {
    storage::read_bucket(env, beneficiary, freeze_duration)
        .map(|bucket| bucket.amount)
        .unwrap_or(0)
}

pub fn release_time(env: &Env, beneficiary: &Address, freeze_duration: u64) -> u64 {
    storage::read_bucket(env, beneficiary, freeze_duration)
        .map(|bucket| bucket.release_time)
        .unwrap_or(0)
}
