//! Events emitted by the token.
//!
//! `transfer`, `mint`, `burn` and `approve` follow the SEP-41 topic layout so
//! wallets and indexers can follow balances without knowing about vesting.
//! Vesting, pause and role changes use their own topics.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::Role;

/// Data of a `frozen` event: the bucket state after the contribution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensFrozen {
    pub amount: i128,
    pub bucket_amount: i128,
    pub release_time: u64,
}

pub fn transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"), from, to), amount);
}

pub fn mint(env: &Env, minter: Address, to: Address, amount: i128) {
    env.events().publish((symbol_short!("mint"), minter, to), amount);
}

pub fn burn(env: &Env, from: Address, amount: i128) {
    env.events().publish((symbol_short!("burn"), from), amount);
}

pub fn approve(env: &Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
    env.events().publish(
        (symbol_short!("approve"), from, spender),
        (amount, expiration_ledger),
    );
}

pub fn frozen(env: &Env, to: Address, freeze_duration: u64, data: TokensFrozen) {
    env.events()
        .publish((symbol_short!("frozen"), to, freeze_duration), data);
}

pub fn unfrozen(env: &Env, to: Address, freeze_duration: u64, amount: i128) {
    env.events()
        .publish((symbol_short!("unfrozen"), to, freeze_duration), amount);
}

pub fn paused(env: &Env, by: Address) {
    env.events().publish((symbol_short!("paused"),), by);
}

pub fn unpaused(env: &Env, by: Address) {
    env.events().publish((symbol_short!("unpaused"),), by);
}

pub fn exempt(env: &Env, wallet: Address, exempt: bool) {
    env.events().publish((symbol_short!("exempt"), wallet), exempt);
}

pub fn role_set(env: &Env, role: Role, account: &Address) {
    env.events()
        .publish((symbol_short!("role_set"), account.clone()), role);
}

pub fn role_del(env: &Env, role: Role, account: &Address) {
    env.events()
        .publish((symbol_short!("role_del"), account.clone()), role);
}
