//! # Ledger
//!
//! Balance map, supply counters and the pause gate. Every helper that can
//! fail does so before writing, so callers may chain them freely.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage;
use crate::TokenError;

pub fn check_nonnegative(env: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(env, TokenError::NegativeAmount);
    }
}

/// Rejects movements out of `from` while the token is paused, unless `from`
/// is in the exemption set.
pub fn require_transferable(env: &Env, from: &Address) {
    if storage::is_paused(env) && !storage::is_exempt(env, from) {
        panic_with_error!(env, TokenError::TransferRestricted);
    }
}

/// Rejects a mint that would push `total_supply + total_frozen` past the cap.
pub fn require_within_cap(env: &Env, amount: i128) {
    let cap = storage::get_config(env).cap;
    let reserved = storage::get_total_supply(env) + storage::get_total_frozen(env);
    match reserved.checked_add(amount) {
        Some(next) if next <= cap => {}
        _ => panic_with_error!(env, TokenError::CapExceeded),
    }
}

pub fn spend_balance(env: &Env, from: &Address, amount: i128) {
    let balance = storage::read_balance(env, from);
    if balance < amount {
        panic_with_error!(env, TokenError::InsufficientBalance);
    }
    storage::write_balance(env, from, balance - amount);
}

pub fn receive_balance(env: &Env, to: &Address, amount: i128) {
    let balance = storage::read_balance(env, to);
    storage::write_balance(env, to, balance + amount);
}

pub fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = storage::read_allowance(env, from, spender);
    if allowance.amount < amount {
        panic_with_error!(env, TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        storage::write_allowance(
            env,
            from,
            spender,
            &crate::types::AllowanceValue {
                amount: allowance.amount - amount,
                expiration_ledger: allowance.expiration_ledger,
            },
        );
    }
}

/// Credits `amount` as new spendable supply.
pub fn mint_spendable(env: &Env, to: &Address, amount: i128) {
    receive_balance(env, to, amount);
    storage::set_total_supply(env, storage::get_total_supply(env) + amount);
}

pub fn burn_spendable(env: &Env, from: &Address, amount: i128) {
    spend_balance(env, from, amount);
    storage::set_total_supply(env, storage::get_total_supply(env) - amount);
}

/// Balance-checked move between two accounts. The pause gate is the
/// caller's responsibility.
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
    spend_balance(env, from, amount);
    receive_balance(env, to, amount);
}
