//! Events emitted by the crowdsale.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::Approval;

/// Topic: `("approved", payer)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayerApproved {
    pub payer: Address,
    /// `None` for the native asset.
    pub asset: Option<Address>,
    pub rate: i128,
    pub limit: i128,
    pub freeze_share: u32,
    pub freeze_duration: u64,
    pub best_before: u64,
}

impl PayerApproved {
    pub fn new(payer: &Address, asset: Option<Address>, approval: &Approval) -> Self {
        PayerApproved {
            payer: payer.clone(),
            asset,
            rate: approval.rate,
            limit: approval.limit,
            freeze_share: approval.freeze_share,
            freeze_duration: approval.freeze_duration,
            best_before: approval.best_before,
        }
    }
}

/// Topic: `("purchase", beneficiary)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensPurchased {
    pub beneficiary: Address,
    pub asset: Address,
    pub payment: i128,
    pub immediate: i128,
    pub frozen: i128,
    pub freeze_duration: u64,
}

/// Topic: `("finalized",)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleClosed {
    pub owner: Address,
    /// Reserve minted at initialisation that the unpause makes transferable.
    pub released_reserve: i128,
    pub locked_reserve: i128,
    pub reserve_lock: u64,
}

/// Topic: `("unfrozen", beneficiary)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensUnfrozen {
    pub beneficiary: Address,
    pub freeze_duration: u64,
    pub amount: i128,
}

pub fn approved(env: &Env, data: PayerApproved) {
    env.events()
        .publish((symbol_short!("approved"), data.payer.clone()), data);
}

pub fn purchased(env: &Env, data: TokensPurchased) {
    env.events()
        .publish((symbol_short!("purchase"), data.beneficiary.clone()), data);
}

pub fn finalized(env: &Env, data: SaleClosed) {
    env.events().publish((symbol_short!("finalized"),), data);
}

pub fn unfrozen(env: &Env, data: TokensUnfrozen) {
    env.events()
        .publish((symbol_short!("unfrozen"), data.beneficiary.clone()), data);
}
