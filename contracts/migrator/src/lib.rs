//! # SENSO Batch Migrator
//!
//! Redistributes balances of a redeployed token in chunks. The caller holds
//! the whole supply, approves this contract as spender, then submits the
//! snapshot as parallel `addresses` / `balances` vectors, one chunk per call.
//!
//! A chunk is all-or-nothing: every precondition is checked before the first
//! transfer, and a failing transfer rolls the whole chunk back.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, symbol_short, token,
    Address, Env, Vec,
};


#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MigratorError {
    LengthMismatch    = 1,
    InvalidAmount     = 2,
    InsufficientFunds = 3,
}

/// Topic: `("migrated", caller)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChunkMigrated {
    pub token: Address,
    pub transfers: u32,
    pub total: i128,
}

#[contract]
pub struct BatchMigrator;

#[contractimpl]
impl BatchMigrator {
    /// Transfer `balances[i]` of `token` from `caller` to `addresses[i]`.
    ///
    /// Zero balances are skipped. Returns the chunk total.
    pub fn batch_transfer(
        env: Env,
        caller: Address,
        token: Address,
        addresses: Vec<Address>,
        balances: Vec<i128>,
    ) -> i128 {
        caller.require_auth();
        if addresses.len() != balances.len() {
            panic_with_error!(&env, MigratorError::LengthMismatch);
        }

        let mut total: i128 = 0;
        for balance in balances.iter() {
            if balance < 0 {
                panic_with_error!(&env, MigratorError::InvalidAmount);
            }
            total = match total.checked_add(balance) {
                Some(sum) => sum,
                None => panic_with_error!(&env, MigratorError::InsufficientFunds),
            };
        }

        let this = env.current_contract_address();
        let client = token::TokenClient::new(&env, &token);
        if client.balance(&caller) < total || client.allowance(&caller, &this) < total {
            panic_with_error!(&env, MigratorError::InsufficientFunds);
        }

        let mut transfers: u32 = 0;
        for (to, balance) in addresses.iter().zip(balances.iter()) {
            if balance == 0 {
                continue;
            }
            client.transfer_from(&this, &caller, &to, &balance);
            transfers += 1;
        }

        env.events().publish(
            (symbol_short!("migrated"), caller),
            ChunkMigrated {
                token,
                transfers,
                total,
            },
        );
        total
    }
}
