//! # Storage
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key           | Type          | Description                           |
//! |---------------|---------------|---------------------------------------|
//! | `Owner`       | `Address`     | May approve payers and finalize        |
//! | `Token`       | `Address`     | SENSO token (ledger + vesting)         |
//! | `NativeAsset` | `Address`     | Asset accepted by `buy_tokens`         |
//! | `Wallets`     | `SaleWallets` | Proceeds and reserve wallets           |
//! | `Allocations` | `Allocations` | Tranche amounts                        |
//! | `Finalized`   | `bool`        | One-way sale switch                    |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                           | Type       | Description                 |
//! |-------------------------------|------------|-----------------------------|
//! | `Approval(payer)`             | `Approval` | Native-asset approval        |
//! | `TokenApproval(payer, asset)` | `Approval` | Approval to pay with `asset` |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Allocations, Approval, SaleWallets};

// ── TTL Constants ────────────────────────────────────────────────────

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Token,
    NativeAsset,
    Wallets,
    Allocations,
    Finalized,
    Approval(Address),
    TokenApproval(Address, Address),
}

impl DataKey {
    /// Registry key for `payer`, optionally scoped to a payment token.
    pub fn approval(payer: &Address, asset: Option<&Address>) -> Self {
        match asset {
            Some(asset) => DataKey::TokenApproval(payer.clone(), asset.clone()),
            None => DataKey::Approval(payer.clone()),
        }
    }
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn save_config(
    env: &Env,
    owner: &Address,
    token: &Address,
    native_asset: &Address,
    wallets: &SaleWallets,
    allocations: &Allocations,
) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::NativeAsset, native_asset);
    instance.set(&DataKey::Wallets, wallets);
    instance.set(&DataKey::Allocations, allocations);
    instance.set(&DataKey::Finalized, &false);
    bump_instance(env);
}

fn get_instance<V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>>(env: &Env, key: &DataKey) -> V {
    bump_instance(env);
    env.storage()
        .instance()
        .get(key)
        .expect("crowdsale not initialized")
}

pub fn get_owner(env: &Env) -> Address {
    get_instance(env, &DataKey::Owner)
}

pub fn get_token(env: &Env) -> Address {
    get_instance(env, &DataKey::Token)
}

pub fn get_native_asset(env: &Env) -> Address {
    get_instance(env, &DataKey::NativeAsset)
}

pub fn get_wallets(env: &Env) -> SaleWallets {
    get_instance(env, &DataKey::Wallets)
}

pub fn get_allocations(env: &Env) -> Allocations {
    get_instance(env, &DataKey::Allocations)
}

pub fn is_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

pub fn set_finalized(env: &Env) {
    env.storage().instance().set(&DataKey::Finalized, &true);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn load_approval(env: &Env, key: &DataKey) -> Option<Approval> {
    env.storage().persistent().get(key)
}

pub fn save_approval(env: &Env, key: &DataKey, approval: &Approval) {
    env.storage().persistent().set(key, approval);
    bump_persistent(env, key);
}

pub fn remove_approval(env: &Env, key: &DataKey) {
    env.storage().persistent().remove(key);
}
