//! # SENSO Crowdsale Contract
//!
//! Sells SENSO tokens to individually approved payers and closes the sale
//! by locking the reserve tranches and unpausing the token.
//!
//! | Phase         | Entry Point(s)                                         |
//! |---------------|--------------------------------------------------------|
//! | Bootstrap     | [`SensoCrowdsale::initialize`]                         |
//! | Approvals     | `approve`, `token_approve`                             |
//! | Purchases     | `buy_tokens`, `buy_tokens_with_tokens`                 |
//! | Closing       | `finalize`                                             |
//! | Vesting       | `unfreeze_tokens`, `frozen_tokens`                     |
//! | Queries       | `get_approval_rate`, `get_token_approval_best_before`, ... |
//!
//! ## Lifecycle
//!
//! ```text
//! Active ──finalize──► Finalized
//! ```
//!
//! While active, the owner grants single-use approvals and approved payers
//! buy against them. Finalize is one-way: afterwards every approval and
//! purchase entry point fails with `SaleFinalized`, while vesting buckets
//! keep maturing and can be released by anyone.
//!
//! The token must be initialised with this contract as its sale engine.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env};

mod approvals;
mod events;
mod ledger;
mod sale;
mod storage;
mod types;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_finalize;

pub use events::{PayerApproved, SaleClosed, TokensPurchased, TokensUnfrozen};
pub use types::{
    Allocations, Approval, SaleWallets, DAY, NATIVE_APPROVAL_WINDOW, RESERVE_LOCK,
    TOKEN_APPROVAL_WINDOW,
};

use ledger::LedgerClient;
use storage::DataKey;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    AlreadyInitialized    = 1,
    Unauthorized          = 2,
    SaleFinalized         = 3,
    AlreadyFinalized      = 4,
    NotApproved           = 5,
    ApprovalActive        = 6,
    NoActiveApproval      = 7,
    InvalidLimit          = 8,
    InvalidRate           = 9,
    InvalidFreezeParams   = 10,
    RateExceedsLimit      = 11,
    InvalidAmount         = 12,
    LimitExceeded         = 13,
    CapExceeded           = 14,
    PaymentTransferFailed = 15,
    NotMature             = 16,
    NothingToRelease      = 17,
}

#[contract]
pub struct SensoCrowdsale;

#[contractimpl]
impl SensoCrowdsale {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Configure the sale. `owner` approves payers and finalizes.
    ///
    /// `native_asset` is the token accepted by [`SensoCrowdsale::buy_tokens`].
    /// The advisory, user-loyalty and partners reserves are minted here and
    /// stay behind the token's pause gate until [`SensoCrowdsale::finalize`].
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        native_asset: Address,
        wallets: SaleWallets,
        allocations: Allocations,
    ) {
        owner.require_auth();
        if storage::is_initialized(&env) {
            panic_with_error!(&env, SaleError::AlreadyInitialized);
        }
        if !allocations.is_valid() {
            panic_with_error!(&env, SaleError::InvalidAmount);
        }
        storage::save_config(&env, &owner, &token, &native_asset, &wallets, &allocations);
        sale::mint_released_reserve(&env, &token, &wallets, &allocations);
    }

    // ─────────────────────────────────────────────────────────
    // Approvals
    // ─────────────────────────────────────────────────────────

    /// Allow `payer` to buy up to `limit` tokens with the native asset at
    /// `rate` tokens per whole unit, once, within seven days.
    ///
    /// `freeze_share` percent of the purchase is frozen for
    /// `freeze_duration` seconds; both must be zero or both non-zero.
    pub fn approve(
        env: Env,
        caller: Address,
        payer: Address,
        rate: i128,
        limit: i128,
        freeze_share: u32,
        freeze_duration: u64,
    ) -> Approval {
        caller.require_auth();
        sale::require_open(&env);
        sale::require_owner(&env, &caller);

        let native_asset = storage::get_native_asset(&env);
        let approval = approvals::create(
            &env,
            &payer,
            None,
            &native_asset,
            rate,
            limit,
            freeze_share,
            freeze_duration,
        );
        events::approved(&env, PayerApproved::new(&payer, None, &approval));
        approval
    }

    /// Same as [`SensoCrowdsale::approve`] for payments in `asset`, valid
    /// for one day. Approvals for different assets are independent.
    #[allow(clippy::too_many_arguments)]
    pub fn token_approve(
        env: Env,
        caller: Address,
        payer: Address,
        asset: Address,
        rate: i128,
        limit: i128,
        freeze_share: u32,
        freeze_duration: u64,
    ) -> Approval {
        caller.require_auth();
        sale::require_open(&env);
        sale::require_owner(&env, &caller);

        let approval = approvals::create(
            &env,
            &payer,
            Some(&asset),
            &asset,
            rate,
            limit,
            freeze_share,
            freeze_duration,
        );
        events::approved(&env, PayerApproved::new(&payer, Some(asset), &approval));
        approval
    }

    pub fn get_approval(env: Env, payer: Address) -> Approval {
        approvals::require_active(&env, &DataKey::approval(&payer, None))
    }

    pub fn get_approval_rate(env: Env, payer: Address) -> i128 {
        Self::get_approval(env, payer).rate
    }

    pub fn get_approval_best_before(env: Env, payer: Address) -> u64 {
        Self::get_approval(env, payer).best_before
    }

    pub fn get_token_approval(env: Env, payer: Address, asset: Address) -> Approval {
        approvals::require_active(&env, &DataKey::approval(&payer, Some(&asset)))
    }

    pub fn get_token_approval_rate(env: Env, payer: Address, asset: Address) -> i128 {
        Self::get_token_approval(env, payer, asset).rate
    }

    pub fn get_token_approval_best_before(env: Env, payer: Address, asset: Address) -> u64 {
        Self::get_token_approval(env, payer, asset).best_before
    }

    // ─────────────────────────────────────────────────────────
    // Purchases
    // ─────────────────────────────────────────────────────────

    /// Buy tokens for `beneficiary` with `payment` base units of the native
    /// asset. `buyer` must be the approved beneficiary.
    pub fn buy_tokens(env: Env, buyer: Address, beneficiary: Address, payment: i128) -> TokensPurchased {
        buyer.require_auth();
        sale::purchase(&env, &buyer, &beneficiary, None, payment)
    }

    /// Buy tokens paying `payment` base units of `asset`. The beneficiary
    /// must have approved this contract to spend at least `payment`.
    pub fn buy_tokens_with_tokens(
        env: Env,
        buyer: Address,
        beneficiary: Address,
        asset: Address,
        payment: i128,
    ) -> TokensPurchased {
        buyer.require_auth();
        sale::purchase(&env, &buyer, &beneficiary, Some(&asset), payment)
    }

    // ─────────────────────────────────────────────────────────
    // Closing and vesting
    // ─────────────────────────────────────────────────────────

    /// End the sale. Owner only, exactly once.
    pub fn finalize(env: Env, caller: Address) {
        caller.require_auth();
        sale::finalize(&env, &caller);
    }

    pub fn finalized(env: Env) -> bool {
        storage::is_finalized(&env)
    }

    /// Release a mature vesting bucket of `beneficiary`. Anyone may call.
    pub fn unfreeze_tokens(env: Env, beneficiary: Address, freeze_duration: u64) -> i128 {
        sale::unfreeze(&env, &beneficiary, freeze_duration)
    }

    pub fn frozen_tokens(env: Env, beneficiary: Address, freeze_duration: u64) -> i128 {
        LedgerClient::new(&env, &storage::get_token(&env)).frozen_balance(&beneficiary, &freeze_duration)
    }

    // ─────────────────────────────────────────────────────────
    // Configuration queries
    // ─────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    pub fn native_asset(env: Env) -> Address {
        storage::get_native_asset(&env)
    }

    pub fn wallets(env: Env) -> SaleWallets {
        storage::get_wallets(&env)
    }

    pub fn allocations(env: Env) -> Allocations {
        storage::get_allocations(&env)
    }

    /// Upper bound for `total_supply + total_frozen` while the sale runs.
    pub fn sale_cap(env: Env) -> i128 {
        storage::get_allocations(&env).sale_cap()
    }
}
