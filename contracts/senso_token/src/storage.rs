//! # Storage
//!
//! Typed helpers over the three Soroban storage tiers used by the token.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key           | Type          | Description                              |
//! |---------------|---------------|------------------------------------------|
//! | `Config`      | `TokenConfig` | Cap, closed-sale amount, metadata         |
//! | `SaleEngine`  | `Address`     | Only address allowed to release buckets   |
//! | `TotalSupply` | `i128`        | Sum of spendable balances                 |
//! | `TotalFrozen` | `i128`        | Sum of all vesting buckets                |
//! | `Paused`      | `bool`        | Transfer gate                             |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                   | Type           | Description                   |
//! |-----------------------|----------------|-------------------------------|
//! | `Balance(addr)`       | `i128`         | Spendable balance              |
//! | `Role(role, addr)`    | `bool`         | Capability-set membership      |
//! | `Exempt(addr)`        | `bool`         | Pause-gate exemption           |
//! | `Frozen(addr, secs)`  | `FrozenBucket` | Vesting bucket                 |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! ## Temporary storage
//!
//! `Allowance(from, spender)` entries live exactly until their
//! `expiration_ledger`, as SEP-41 prescribes.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{AllowanceValue, FrozenBucket, Role, TokenConfig};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    SaleEngine,
    TotalSupply,
    TotalFrozen,
    Paused,
    Balance(Address),
    Role(Role, Address),
    Exempt(Address),
    Frozen(Address, u64),
    Allowance(Address, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &TokenConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Panics if the token was never initialised.
pub fn get_config(env: &Env) -> TokenConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("token not initialized")
}

pub fn set_sale_engine(env: &Env, engine: &Address) {
    env.storage().instance().set(&DataKey::SaleEngine, engine);
}

pub fn get_sale_engine(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::SaleEngine)
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_total_frozen(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalFrozen)
        .unwrap_or(0)
}

pub fn set_total_frozen(env: &Env, frozen: i128) {
    env.storage().instance().set(&DataKey::TotalFrozen, &frozen);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}

pub fn has_role(env: &Env, role: Role, id: &Address) -> bool {
    let key = DataKey::Role(role, id.clone());
    env.storage()
        .persistent()
        .get::<_, bool>(&key)
        .unwrap_or(false)
}

pub fn set_role(env: &Env, role: Role, id: &Address, member: bool) {
    let key = DataKey::Role(role, id.clone());
    if member {
        env.storage().persistent().set(&key, &true);
        bump_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn is_exempt(env: &Env, id: &Address) -> bool {
    let key = DataKey::Exempt(id.clone());
    env.storage()
        .persistent()
        .get::<_, bool>(&key)
        .unwrap_or(false)
}

pub fn set_exempt(env: &Env, id: &Address, exempt: bool) {
    let key = DataKey::Exempt(id.clone());
    if exempt {
        env.storage().persistent().set(&key, &true);
        bump_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn read_bucket(env: &Env, id: &Address, freeze_duration: u64) -> Option<FrozenBucket> {
    let key = DataKey::Frozen(id.clone(), freeze_duration);
    let bucket = env.storage().persistent().get::<_, FrozenBucket>(&key);
    if bucket.is_some() {
        bump_persistent(env, &key);
    }
    bucket
}

pub fn write_bucket(env: &Env, id: &Address, freeze_duration: u64, bucket: &FrozenBucket) {
    let key = DataKey::Frozen(id.clone(), freeze_duration);
    env.storage().persistent().set(&key, bucket);
    bump_persistent(env, &key);
}

pub fn remove_bucket(env: &Env, id: &Address, freeze_duration: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Frozen(id.clone(), freeze_duration));
}

// ── Temporary Storage Helpers ────────────────────────────────────────

/// Current allowance; expired entries read as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(env: &Env, from: &Address, spender: &Address, allowance: &AllowanceValue) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    env.storage().temporary().set(&key, allowance);

    if allowance.amount > 0 {
        let live_for = allowance
            .expiration_ledger
            .saturating_sub(env.ledger().sequence());
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}
