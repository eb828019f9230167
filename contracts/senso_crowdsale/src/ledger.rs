//! Client for the parts of the SENSO token the sale drives.
//!
//! The crowdsale is registered as the token's sale engine, which makes it a
//! minter, a pauser and the only caller allowed to release vesting buckets.

use soroban_sdk::{contractclient, Address, Env};

#[allow(dead_code)]
#[contractclient(name = "LedgerClient")]
pub trait Ledger {
    fn mint(env: Env, minter: Address, to: Address, amount: i128, freeze_duration: u64);
    fn unfreeze(env: Env, caller: Address, beneficiary: Address, freeze_duration: u64) -> i128;
    fn frozen_balance(env: Env, beneficiary: Address, freeze_duration: u64) -> i128;
    fn frozen_release_time(env: Env, beneficiary: Address, freeze_duration: u64) -> u64;
    fn unpause(env: Env, pauser: Address);
    fn paused(env: Env) -> bool;
    fn cap(env: Env) -> i128;
    fn total_supply(env: Env) -> i128;
    fn total_frozen(env: Env) -> i128;
}
