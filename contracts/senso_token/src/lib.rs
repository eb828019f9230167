//! # SENSO Token Contract
//!
//! Capped, mintable, pausable SEP-41 token that also keeps vesting buckets
//! ("frozen" balances) on behalf of the crowdsale.
//!
//! | Phase          | Entry Point(s)                                              |
//! |----------------|-------------------------------------------------------------|
//! | Bootstrap      | [`SensoToken::initialize`]                                  |
//! | Supply         | `mint`, `burn`, `burn_from`                                 |
//! | Transfers      | `transfer`, `transfer_from`, `approve`                      |
//! | Pause gate     | `pause`, `unpause`, `set_transfer_exempt`                   |
//! | Roles          | `add_minter`, `renounce_minter`, `add_pauser`, `renounce_pauser` |
//! | Vesting        | `unfreeze` (sale engine only), `frozen_balance`             |
//! | Queries        | `balance`, `cap`, `total_supply`, `total_frozen`, ...       |
//!
//! ## Architecture
//!
//! Balances and the pause gate live in [`ledger`], buckets in [`vesting`],
//! capability sets in [`roles`]; all storage access goes through
//! [`storage`]. This file holds the entry points, their authorization and
//! their events.
//!
//! The token starts paused. While paused only exempted wallets (the
//! closed-sale wallet, plus whatever a pauser adds) can move tokens; the
//! crowdsale unpauses it when the sale is finalized.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String,
};
#[allow(unused_imports)]
use soroban_sdk::token::TokenInterface;

mod events;
mod ledger;
mod roles;
mod storage;
mod types;
mod vesting;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_vesting;

pub use events::TokensFrozen;
pub use types::{
    AllowanceValue, FrozenBucket, Role, TokenConfig, SENSO_CAP, SENSO_CLOSED_SALE_AMOUNT,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized    = 1,
    NegativeAmount        = 2,
    CapExceeded           = 3,
    InsufficientBalance   = 4,
    InsufficientAllowance = 5,
    TransferRestricted    = 6,
    NotMinter             = 7,
    NotPauser             = 8,
    AlreadyPaused         = 9,
    NotPaused             = 10,
    Unauthorized          = 11,
    NothingToRelease      = 12,
    NotMature             = 13,
    InvalidExpiration     = 14,
}

#[contract]
pub struct SensoToken;

#[contractimpl]
impl SensoToken {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the token.
    ///
    /// - `admin` receives the minter and pauser roles and must sign.
    /// - `closed_sale_wallet` receives `config.closed_sale_amount` and is
    ///   exempt from the pause gate.
    /// - `sale_engine`, when given, also receives both roles and becomes the
    ///   only address allowed to release vesting buckets.
    ///
    /// The token starts paused. Panics with `AlreadyInitialized` on a second call.
    pub fn initialize(
        env: Env,
        admin: Address,
        closed_sale_wallet: Address,
        sale_engine: Option<Address>,
        config: TokenConfig,
    ) {
        admin.require_auth();
        if storage::is_initialized(&env) {
            panic_with_error!(&env, TokenError::AlreadyInitialized);
        }
        ledger::check_nonnegative(&env, config.closed_sale_amount);
        if config.cap <= 0 || config.closed_sale_amount > config.cap {
            panic_with_error!(&env, TokenError::CapExceeded);
        }

        storage::set_config(&env, &config);
        roles::grant(&env, Role::Minter, &admin);
        roles::grant(&env, Role::Pauser, &admin);
        if let Some(engine) = &sale_engine {
            roles::grant(&env, Role::Minter, engine);
            roles::grant(&env, Role::Pauser, engine);
            storage::set_sale_engine(&env, engine);
        }

        storage::set_paused(&env, true);
        storage::set_exempt(&env, &closed_sale_wallet, true);

        if config.closed_sale_amount > 0 {
            ledger::mint_spendable(&env, &closed_sale_wallet, config.closed_sale_amount);
            events::mint(&env, admin, closed_sale_wallet, config.closed_sale_amount);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Supply
    // ─────────────────────────────────────────────────────────

    /// Mint `amount` to `to`.
    ///
    /// With `freeze_duration == 0` the amount is spendable immediately;
    /// otherwise it is added to the `(to, freeze_duration)` vesting bucket.
    /// Either way `total_supply + total_frozen` must stay within the cap.
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128, freeze_duration: u64) {
        minter.require_auth();
        roles::require_minter(&env, &minter);
        ledger::check_nonnegative(&env, amount);
        ledger::require_within_cap(&env, amount);

        if freeze_duration == 0 {
            ledger::mint_spendable(&env, &to, amount);
            events::mint(&env, minter, to, amount);
        } else {
            let bucket = vesting::freeze(&env, &to, amount, freeze_duration);
            events::frozen(
                &env,
                to,
                freeze_duration,
                TokensFrozen {
                    amount,
                    bucket_amount: bucket.amount,
                    release_time: bucket.release_time,
                },
            );
        }
    }

    // ─────────────────────────────────────────────────────────
    // Vesting
    // ─────────────────────────────────────────────────────────

    /// Release the `(beneficiary, freeze_duration)` bucket into the
    /// beneficiary's spendable balance.
    ///
    /// Only the sale engine registered at initialisation may call this;
    /// everyone else, including minters, gets `Unauthorized`.
    pub fn unfreeze(env: Env, caller: Address, beneficiary: Address, freeze_duration: u64) -> i128 {
        caller.require_auth();
        match storage::get_sale_engine(&env) {
            Some(engine) if engine == caller => {}
            _ => panic_with_error!(&env, TokenError::Unauthorized),
        }

        let amount = vesting::release(&env, &beneficiary, freeze_duration);
        ledger::mint_spendable(&env, &beneficiary, amount);
        events::unfrozen(&env, beneficiary, freeze_duration, amount);
        amount
    }

    /// Amount currently held in the `(beneficiary, freeze_duration)` bucket.
    pub fn frozen_balance(env: Env, beneficiary: Address, freeze_duration: u64) -> i128 {
        vesting::frozen_amount(&env, &beneficiary, freeze_duration)
    }

    /// Timestamp from which the bucket can be released, `0` if there is none.
    pub fn frozen_release_time(env: Env, beneficiary: Address, freeze_duration: u64) -> u64 {
        vesting::release_time(&env, &beneficiary, freeze_duration)
    }

    // ─────────────────────────────────────────────────────────
    // Pause gate
    // ─────────────────────────────────────────────────────────

    pub fn pause(env: Env, pauser: Address) {
        pauser.require_auth();
        roles::require_pauser(&env, &pauser);
        if storage::is_paused(&env) {
            panic_with_error!(&env, TokenError::AlreadyPaused);
        }
        storage::set_paused(&env, true);
        events::paused(&env, pauser);
    }

    pub fn unpause(env: Env, pauser: Address) {
        pauser.require_auth();
        roles::require_pauser(&env, &pauser);
        if !storage::is_paused(&env) {
            panic_with_error!(&env, TokenError::NotPaused);
        }
        storage::set_paused(&env, false);
        events::unpaused(&env, pauser);
    }

    pub fn paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    /// Add `wallet` to (or remove it from) the set of senders allowed to
    /// move tokens while the token is paused.
    pub fn set_transfer_exempt(env: Env, pauser: Address, wallet: Address, exempt: bool) {
        pauser.require_auth();
        roles::require_pauser(&env, &pauser);
        storage::set_exempt(&env, &wallet, exempt);
        events::exempt(&env, wallet, exempt);
    }

    pub fn is_transfer_exempt(env: Env, wallet: Address) -> bool {
        storage::is_exempt(&env, &wallet)
    }

    // ─────────────────────────────────────────────────────────
    // Roles
    // ─────────────────────────────────────────────────────────

    /// `minter` must already hold the minter role.
    pub fn add_minter(env: Env, minter: Address, account: Address) {
        minter.require_auth();
        roles::require_minter(&env, &minter);
        roles::grant(&env, Role::Minter, &account);
    }

    pub fn renounce_minter(env: Env, account: Address) {
        account.require_auth();
        roles::renounce(&env, Role::Minter, &account);
    }

    /// `pauser` must already hold the pauser role.
    pub fn add_pauser(env: Env, pauser: Address, account: Address) {
        pauser.require_auth();
        roles::require_pauser(&env, &pauser);
        roles::grant(&env, Role::Pauser, &account);
    }

    pub fn renounce_pauser(env: Env, account: Address) {
        account.require_auth();
        roles::renounce(&env, Role::Pauser, &account);
    }

    pub fn is_minter(env: Env, account: Address) -> bool {
        storage::has_role(&env, Role::Minter, &account)
    }

    pub fn is_pauser(env: Env, account: Address) -> bool {
        storage::has_role(&env, Role::Pauser, &account)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn cap(env: Env) -> i128 {
        storage::get_config(&env).cap
    }

    pub fn closed_sale_amount(env: Env) -> i128 {
        storage::get_config(&env).closed_sale_amount
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn total_frozen(env: Env) -> i128 {
        storage::get_total_frozen(&env)
    }

    pub fn sale_engine(env: Env) -> Option<Address> {
        storage::get_sale_engine(&env)
    }
}

#[contractimpl]
impl token::TokenInterface for SensoToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        ledger::check_nonnegative(&env, amount);
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            panic_with_error!(&env, TokenError::InvalidExpiration);
        }

        storage::write_allowance(
            &env,
            &from,
            &spender,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );
        events::approve(&env, from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        ledger::check_nonnegative(&env, amount);
        ledger::require_transferable(&env, &from);

        ledger::move_balance(&env, &from, &to, amount);
        events::transfer(&env, from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        ledger::check_nonnegative(&env, amount);
        ledger::require_transferable(&env, &from);
        if storage::read_balance(&env, &from) < amount {
            panic_with_error!(&env, TokenError::InsufficientBalance);
        }

        ledger::spend_allowance(&env, &from, &spender, amount);
        ledger::move_balance(&env, &from, &to, amount);
        events::transfer(&env, from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        ledger::check_nonnegative(&env, amount);
        ledger::require_transferable(&env, &from);

        ledger::burn_spendable(&env, &from, amount);
        events::burn(&env, from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        ledger::check_nonnegative(&env, amount);
        ledger::require_transferable(&env, &from);
        if storage::read_balance(&env, &from) < amount {
            panic_with_error!(&env, TokenError::InsufficientBalance);
        }

        ledger::spend_allowance(&env, &from, &spender, amount);
        ledger::burn_spendable(&env, &from, amount);
        events::burn(&env, from, amount);
    }

    fn decimals(env: Env) -> u32 {
        storage::get_config(&env).decimals
    }

    fn name(env: Env) -> String {
        storage::get_config(&env).name
    }

    fn symbol(env: Env) -> String {
        storage::get_config(&env).symbol
    }
}
