//! # Approval registry
//!
//! At most one live approval per key: `payer` for native-asset purchases and
//! `(payer, asset)` for token purchases. An approval is live while it is
//! stored and `now <= best_before`; purchases consume it by removing it.

use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::storage::{self, DataKey};
use crate::types::{Approval, NATIVE_APPROVAL_WINDOW, TOKEN_APPROVAL_WINDOW};
use crate::SaleError;

/// The live approval under `key`, if any. Expired entries read as absent.
pub fn active(env: &Env, key: &DataKey) -> Option<Approval> {
    storage::load_approval(env, key).filter(|approval| env.ledger().timestamp() <= approval.best_before)
}

/// Like [`active`], but panics with `NoActiveApproval`.
pub fn require_active(env: &Env, key: &DataKey) -> Approval {
    match active(env, key) {
        Some(approval) => approval,
        None => panic_with_error!(env, SaleError::NoActiveApproval),
    }
}

/// `10^decimals`, saturating for absurd decimal counts.
pub fn whole_unit(decimals: u32) -> i128 {
    10i128.checked_pow(decimals).unwrap_or(i128::MAX)
}

/// Validate and store a new approval for `payer`.
///
/// `asset == None` approves payments in the native asset for seven days;
/// `Some(asset)` approves payments in that token for one day.
#[allow(clippy::too_many_arguments)]
pub fn create(
    env: &Env,
    payer: &Address,
    asset: Option<&Address>,
    payment_asset: &Address,
    rate: i128,
    limit: i128,
    freeze_share: u32,
    freeze_duration: u64,
) -> Approval {
    let key = DataKey::approval(payer, asset);
    if active(env, &key).is_some() {
        panic_with_error!(env, SaleError::ApprovalActive);
    }
    if limit <= 0 {
        panic_with_error!(env, SaleError::InvalidLimit);
    }
    if rate <= 0 {
        panic_with_error!(env, SaleError::InvalidRate);
    }
    if freeze_share > 100 || (freeze_share == 0) != (freeze_duration == 0) {
        panic_with_error!(env, SaleError::InvalidFreezeParams);
    }

    // A single base unit of the payment asset must not already buy more
    // than the whole limit.
    let decimals = token::TokenClient::new(env, payment_asset).decimals();
    if rate / whole_unit(decimals) > limit {
        panic_with_error!(env, SaleError::RateExceedsLimit);
    }

    let window = if asset.is_some() {
        TOKEN_APPROVAL_WINDOW
    } else {
        NATIVE_APPROVAL_WINDOW
    };
    let approval = Approval {
        rate,
        limit,
        freeze_share,
        freeze_duration,
        best_before: env.ledger().timestamp().saturating_add(window),
    };
    storage::save_approval(env, &key, &approval);
    approval
}

pub fn consume(env: &Env, key: &DataKey) {
    storage::remove_approval(env, key);
}
