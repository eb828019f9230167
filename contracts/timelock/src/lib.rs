//! # Token Timelock
//!
//! Holds tokens for one beneficiary until a fixed release time. The
//! depositor signs the terms, then deposits with a plain transfer to this
//! contract; [`TokenTimelock::release`]
//! then moves the whole balance to the beneficiary. The contract must be
//! exempt from the SENSO pause gate, or the token unpaused, at release.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, symbol_short, token,
    Address, Env,
};


const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum DataKey {
    Depositor,
    Token,
    Beneficiary,
    ReleaseTime,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TimelockError {
    AlreadyInitialized = 1,
    InvalidReleaseTime = 2,
    NotYetReleasable   = 3,
    NothingToRelease   = 4,
}

#[contract]
pub struct TokenTimelock;

fn read<V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>>(env: &Env, key: &DataKey) -> V {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    env.storage()
        .instance()
        .get(key)
        .expect("timelock not initialized")
}

#[contractimpl]
impl TokenTimelock {
    /// Lock `token` for `beneficiary` until `release_time` (unix seconds).
    /// Signed by `depositor`, who is recorded with the terms.
    pub fn initialize(env: Env, depositor: Address, token: Address, beneficiary: Address, release_time: u64) {
        depositor.require_auth();
        let instance = env.storage().instance();
        if instance.has(&DataKey::Token) {
            panic_with_error!(&env, TimelockError::AlreadyInitialized);
        }
        if release_time <= env.ledger().timestamp() {
            panic_with_error!(&env, TimelockError::InvalidReleaseTime);
        }
        instance.set(&DataKey::Depositor, &depositor);
        instance.set(&DataKey::Token, &token);
        instance.set(&DataKey::Beneficiary, &beneficiary);
        instance.set(&DataKey::ReleaseTime, &release_time);
        instance.extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    /// Send everything held to the beneficiary. Anyone may call.
    pub fn release(env: Env) -> i128 {
        let release_time: u64 = read(&env, &DataKey::ReleaseTime);
        if env.ledger().timestamp() < release_time {
            panic_with_error!(&env, TimelockError::NotYetReleasable);
        }

        let token: Address = read(&env, &DataKey::Token);
        let beneficiary: Address = read(&env, &DataKey::Beneficiary);
        let client = token::TokenClient::new(&env, &token);
        let this = env.current_contract_address();
        let amount = client.balance(&this);
        if amount <= 0 {
            panic_with_error!(&env, TimelockError::NothingToRelease);
        }

        client.transfer(&this, &beneficiary, &amount);
        env.events()
            .publish((symbol_short!("released"), beneficiary), amount);
        amount
    }

    pub fn depositor(env: Env) -> Address {
        read(&env, &DataKey::Depositor)
    }

    pub fn token(env: Env) -> Address {
        read(&env, &DataKey::Token)
    }

    pub fn beneficiary(env: Env) -> Address {
        read(&env, &DataKey::Beneficiary)
    }

    pub fn release_time(env: Env) -> u64 {
        read(&env, &DataKey::ReleaseTime)
    }
}
