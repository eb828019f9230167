//! # Types
//!
//! Configuration and approval records of the crowdsale.
//!
//! ## Rate convention
//!
//! `rate` is the number of sale tokens bought with one *whole* unit of the
//! payment asset, i.e. `10^decimals` of its base units:
//!
//! ```text
//! sale_amount = floor(payment * rate / 10^decimals)
//! frozen      = floor(sale_amount * freeze_share / 100)
//! immediate   = sale_amount - frozen
//! ```

use soroban_sdk::{contracttype, Address};

/// Seconds in a day.
pub const DAY: u64 = 24 * 60 * 60;

/// Lifetime of an approval to pay in the native asset.
pub const NATIVE_APPROVAL_WINDOW: u64 = 7 * DAY;

/// Lifetime of an approval to pay in another token.
pub const TOKEN_APPROVAL_WINDOW: u64 = DAY;

/// Lock applied to the team, safe-support and community reserves at finalize.
pub const RESERVE_LOCK: u64 = 365 * DAY;

/// A single-use permission for one payer to buy up to `limit` sale tokens.
///
/// Consumed approvals are removed from storage; an entry past its
/// `best_before` is inert and may be overwritten by a new approval.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approval {
    pub rate: i128,
    pub limit: i128,
    /// Percentage (0–100) of every purchase routed to vesting.
    pub freeze_share: u32,
    /// Vesting delay in seconds; zero exactly when `freeze_share` is zero.
    pub freeze_duration: u64,
    pub best_before: u64,
}

/// Wallets receiving proceeds and reserve allocations.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleWallets {
    pub collected_funds: Address,
    pub advisory: Address,
    pub user_loyalty: Address,
    pub partners: Address,
    pub team: Address,
    pub safe_support: Address,
    pub community: Address,
}

/// Fixed token amounts of every tranche.
///
/// The advisory, user-loyalty and partners reserves are minted when the sale
/// is initialised and become transferable at finalize. Team, safe-support
/// and community reserves are minted at finalize into buckets locked for
/// `reserve_lock` seconds. `closed_sale + released_reserve + tokensale` is
/// the cap checked on every purchase.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Allocations {
    pub closed_sale: i128,
    pub tokensale: i128,
    pub advisory: i128,
    pub user_loyalty: i128,
    pub partners: i128,
    pub team: i128,
    pub safe_support: i128,
    pub community: i128,
    pub reserve_lock: u64,
}

impl Allocations {
    /// Production SENSO tranches; they add up to the 7 692 000 000 token cap.
    pub fn senso() -> Self {
        Allocations {
            closed_sale: 2_000_000_000,
            tokensale: 3_000_000_000,
            advisory: 188_440_000,
            user_loyalty: 403_800_000,
            partners: 323_040_000,
            team: 188_440_000,
            safe_support: 1_265_240_000,
            community: 323_040_000,
            reserve_lock: RESERVE_LOCK,
        }
    }

    pub fn sale_cap(&self) -> i128 {
        self.closed_sale + self.released_reserve() + self.tokensale
    }

    pub fn released_reserve(&self) -> i128 {
        self.advisory + self.user_loyalty + self.partners
    }

    pub fn locked_reserve(&self) -> i128 {
        self.team + self.safe_support + self.community
    }

    pub(crate) fn is_valid(&self) -> bool {
        [
            self.closed_sale,
            self.tokensale,
            self.advisory,
            self.user_loyalty,
            self.partners,
            self.team,
            self.safe_support,
            self.community,
        ]
        .iter()
        .all(|amount| *amount >= 0)
            && self.reserve_lock > 0
    }
}
