//! # Sale engine
//!
//! Purchase, finalization and release flows. Each flow validates every
//! precondition (including the payer's funds) before its first write, then
//! applies its effects in a fixed order: consume approval, mint, collect
//! payment, emit.

use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::approvals;
use crate::events::{self, SaleClosed, TokensPurchased, TokensUnfrozen};
use crate::ledger::LedgerClient;
use crate::storage::{self, DataKey};
use crate::types::{Allocations, SaleWallets};
use crate::SaleError;

/// Split of one purchase.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    pub immediate: i128,
    pub frozen: i128,
}

impl Quote {
    pub fn sale_amount(&self) -> i128 {
        self.immediate + self.frozen
    }
}

/// Convert `payment` base units into sale tokens and split off the frozen
/// share. Both divisions round down.
pub fn quote(env: &Env, payment: i128, rate: i128, decimals: u32, limit: i128, freeze_share: u32) -> Quote {
    let sale_amount = match payment.checked_mul(rate) {
        Some(value) => value / approvals::whole_unit(decimals),
        None => panic_with_error!(env, SaleError::LimitExceeded),
    };
    if sale_amount > limit {
        panic_with_error!(env, SaleError::LimitExceeded);
    }
    if sale_amount == 0 {
        panic_with_error!(env, SaleError::InvalidAmount);
    }

    let share = freeze_share as i128;
    let frozen = sale_amount / 100 * share + sale_amount % 100 * share / 100;
    Quote {
        immediate: sale_amount - frozen,
        frozen,
    }
}

pub fn require_open(env: &Env) {
    if storage::is_finalized(env) {
        panic_with_error!(env, SaleError::SaleFinalized);
    }
}

pub fn require_owner(env: &Env, caller: &Address) {
    if *caller != storage::get_owner(env) {
        panic_with_error!(env, SaleError::Unauthorized);
    }
}

/// Buy sale tokens for `beneficiary`, paying `payment` base units of the
/// native asset (`asset == None`) or of `asset`.
pub fn purchase(
    env: &Env,
    buyer: &Address,
    beneficiary: &Address,
    asset: Option<&Address>,
    payment: i128,
) -> TokensPurchased {
    require_open(env);
    if buyer != beneficiary {
        panic_with_error!(env, SaleError::NotApproved);
    }
    let key = DataKey::approval(beneficiary, asset);
    let approval = match approvals::active(env, &key) {
        Some(approval) => approval,
        None => panic_with_error!(env, SaleError::NotApproved),
    };
    if payment <= 0 {
        panic_with_error!(env, SaleError::InvalidAmount);
    }

    let payment_asset = match asset {
        Some(asset) => asset.clone(),
        None => storage::get_native_asset(env),
    };
    let payment_client = token::TokenClient::new(env, &payment_asset);
    let split = quote(
        env,
        payment,
        approval.rate,
        payment_client.decimals(),
        approval.limit,
        approval.freeze_share,
    );

    let ledger = LedgerClient::new(env, &storage::get_token(env));
    let sale_cap = storage::get_allocations(env).sale_cap();
    let reserved = ledger.total_supply() + ledger.total_frozen();
    if !reserved
        .checked_add(split.sale_amount())
        .is_some_and(|total| total <= sale_cap)
    {
        panic_with_error!(env, SaleError::CapExceeded);
    }

    let this = env.current_contract_address();
    if payment_client.balance(beneficiary) < payment
        || (asset.is_some() && payment_client.allowance(beneficiary, &this) < payment)
    {
        panic_with_error!(env, SaleError::PaymentTransferFailed);
    }

    approvals::consume(env, &key);
    if split.immediate > 0 {
        ledger.mint(&this, beneficiary, &split.immediate, &0);
    }
    if split.frozen > 0 {
        ledger.mint(&this, beneficiary, &split.frozen, &approval.freeze_duration);
    }

    let collected_funds = storage::get_wallets(env).collected_funds;
    match asset {
        Some(_) => payment_client.transfer_from(&this, beneficiary, &collected_funds, &payment),
        None => payment_client.transfer(beneficiary, &collected_funds, &payment),
    }

    let purchase = TokensPurchased {
        beneficiary: beneficiary.clone(),
        asset: payment_asset,
        payment,
        immediate: split.immediate,
        frozen: split.frozen,
        freeze_duration: approval.freeze_duration,
    };
    events::purchased(env, purchase.clone());
    purchase
}

/// Mint the advisory, user-loyalty and partners reserves to their wallets.
///
/// Runs once at initialisation. The wallets are not exempt from the pause
/// gate, so the tokens stay restricted until finalize unpauses the token.
pub fn mint_released_reserve(env: &Env, token: &Address, wallets: &SaleWallets, allocations: &Allocations) {
    let ledger = LedgerClient::new(env, token);
    let reserved = ledger.total_supply() + ledger.total_frozen();
    if !reserved
        .checked_add(allocations.released_reserve())
        .is_some_and(|total| total <= ledger.cap())
    {
        panic_with_error!(env, SaleError::CapExceeded);
    }

    let this = env.current_contract_address();
    let released = [
        (&wallets.advisory, allocations.advisory),
        (&wallets.user_loyalty, allocations.user_loyalty),
        (&wallets.partners, allocations.partners),
    ];
    for (wallet, amount) in released {
        if amount > 0 {
            ledger.mint(&this, wallet, &amount, &0);
        }
    }
}

/// Close the sale: lock the remaining reserves and lift the token's pause gate.
pub fn finalize(env: &Env, caller: &Address) {
    require_owner(env, caller);
    if storage::is_finalized(env) {
        panic_with_error!(env, SaleError::AlreadyFinalized);
    }

    let allocations = storage::get_allocations(env);
    let wallets = storage::get_wallets(env);
    let ledger = LedgerClient::new(env, &storage::get_token(env));
    let reserved = ledger.total_supply() + ledger.total_frozen();
    if !reserved
        .checked_add(allocations.locked_reserve())
        .is_some_and(|total| total <= ledger.cap())
    {
        panic_with_error!(env, SaleError::CapExceeded);
    }

    storage::set_finalized(env);

    let this = env.current_contract_address();
    let locked = [
        (wallets.team, allocations.team),
        (wallets.safe_support, allocations.safe_support),
        (wallets.community, allocations.community),
    ];
    for (wallet, amount) in locked {
        if amount > 0 {
            ledger.mint(&this, &wallet, &amount, &allocations.reserve_lock);
        }
    }

    if ledger.paused() {
        ledger.unpause(&this);
    }

    events::finalized(
        env,
        SaleClosed {
            owner: caller.clone(),
            released_reserve: allocations.released_reserve(),
            locked_reserve: allocations.locked_reserve(),
            reserve_lock: allocations.reserve_lock,
        },
    );
}

/// Release a mature vesting bucket through the token.
pub fn unfreeze(env: &Env, beneficiary: &Address, freeze_duration: u64) -> i128 {
    let ledger = LedgerClient::new(env, &storage::get_token(env));
    if ledger.frozen_balance(beneficiary, &freeze_duration) <= 0 {
        panic_with_error!(env, SaleError::NothingToRelease);
    }
    if env.ledger().timestamp() < ledger.frozen_release_time(beneficiary, &freeze_duration) {
        panic_with_error!(env, SaleError::NotMature);
    }

    let amount = ledger.unfreeze(&env.current_contract_address(), beneficiary, &freeze_duration);
    events::unfrozen(
        env,
        TokensUnfrozen {
            beneficiary: beneficiary.clone(),
            freeze_duration,
            amount,
        },
    );
    amount
}
