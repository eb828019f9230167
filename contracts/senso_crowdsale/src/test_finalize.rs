extern crate std;

use senso_token::{TokenError, SENSO_CAP};
use soroban_sdk::{testutils::Address as _, Address};

use crate::fixtures::{Fixture, UNIT};
use crate::invariants::{assert_unchanged, assert_within_token_cap, snapshot};
use crate::{Allocations, SaleError, RESERVE_LOCK};

/// Sell the whole public tranche to a single investor.
fn sell_out(f: &Fixture) -> Address {
    let whale = f.investor(UNIT);
    let tokensale = f.sale.allocations().tokensale;
    f.approve(&whale, tokensale, tokensale, 0, 0);
    f.sale.buy_tokens(&whale, &whale, &UNIT);
    whale
}

#[test]
fn test_finalize_requires_owner() {
    let f = Fixture::new();
    let stranger = Address::generate(&f.env);

    assert_eq!(f.sale.try_finalize(&stranger), Err(Ok(SaleError::Unauthorized.into())));
    assert!(!f.sale.finalized());
}

#[test]
fn test_finalize_locks_reserves_and_unpauses() {
    let f = Fixture::new();
    let allocations = Allocations::senso();
    let supply_before = f.token.total_supply();
    assert!(f.token.paused());

    f.sale.finalize(&f.owner);

    assert!(f.sale.finalized());
    assert!(!f.token.paused());
    assert_eq!(f.token.total_supply(), supply_before);
    assert_eq!(f.token.balance(&f.wallets.advisory), allocations.advisory);

    assert_eq!(f.token.balance(&f.wallets.team), 0);
    assert_eq!(f.sale.frozen_tokens(&f.wallets.team, &RESERVE_LOCK), allocations.team);
    assert_eq!(
        f.sale.frozen_tokens(&f.wallets.safe_support, &RESERVE_LOCK),
        allocations.safe_support
    );
    assert_eq!(
        f.sale.frozen_tokens(&f.wallets.community, &RESERVE_LOCK),
        allocations.community
    );
    assert_eq!(f.token.total_frozen(), allocations.locked_reserve());
    assert_within_token_cap(&f.token);
}

#[test]
fn test_released_reserve_restricted_until_finalize() {
    let f = Fixture::new();
    let receiver = Address::generate(&f.env);
    assert_eq!(
        f.token.try_transfer(&f.wallets.advisory, &receiver, &10),
        Err(Ok(TokenError::TransferRestricted.into()))
    );
    assert_eq!(
        f.token.try_transfer(&f.wallets.partners, &receiver, &5),
        Err(Ok(TokenError::TransferRestricted.into()))
    );

    f.sale.finalize(&f.owner);

    f.token.transfer(&f.wallets.advisory, &receiver, &10);
    f.token.transfer(&f.wallets.user_loyalty, &receiver, &1);
    f.token.transfer(&f.wallets.partners, &receiver, &5);
    assert_eq!(f.token.balance(&receiver), 16);
    assert_eq!(
        f.token.balance(&f.wallets.advisory),
        Allocations::senso().advisory - 10
    );
}

#[test]
fn test_sold_out_sale_fills_the_cap_exactly() {
    let f = Fixture::new();
    let whale = sell_out(&f);
    assert_eq!(f.token.balance(&whale), 3_000_000_000);
    assert_eq!(f.token.total_supply(), f.sale.sale_cap());

    f.sale.finalize(&f.owner);

    assert_eq!(f.token.total_supply() + f.token.total_frozen(), SENSO_CAP);
    assert_eq!(f.token.cap(), SENSO_CAP);
}

#[test]
fn test_finalize_only_once() {
    let f = Fixture::new();
    f.sale.finalize(&f.owner);

    assert_eq!(f.sale.try_finalize(&f.owner), Err(Ok(SaleError::AlreadyFinalized.into())));
    assert_eq!(
        f.token.balance(&f.wallets.advisory),
        Allocations::senso().advisory
    );
}

#[test]
fn test_finalize_accepts_already_unpaused_token() {
    let f = Fixture::new();
    f.token.unpause(&f.owner);

    f.sale.finalize(&f.owner);
    assert!(!f.token.paused());
    assert!(f.sale.finalized());
}

#[test]
fn test_sale_entry_points_closed_after_finalize() {
    let f = Fixture::new();
    let investor = f.investor(5 * UNIT);
    f.approve(&investor, 5, 10, 0, 0);
    f.sale.finalize(&f.owner);

    assert_eq!(
        f.sale.try_buy_tokens(&investor, &investor, &UNIT),
        Err(Ok(SaleError::SaleFinalized.into()))
    );
    let other = f.investor(0);
    assert_eq!(
        f.sale.try_approve(&f.owner, &other, &5, &10, &0, &0),
        Err(Ok(SaleError::SaleFinalized.into()))
    );
    // Approvals granted before closing stay readable.
    assert_eq!(f.sale.get_approval_rate(&investor), 5);
}

#[test]
fn test_purchase_beyond_sale_cap_is_rejected() {
    let f = Fixture::new();
    sell_out(&f);
    let late = f.investor(5 * UNIT);
    f.approve(&late, 5, 10, 0, 0);
    let before = snapshot(&f.token);

    let result = f.sale.try_buy_tokens(&late, &late, &UNIT);
    assert_eq!(result, Err(Ok(SaleError::CapExceeded.into())));
    assert_unchanged(&f.token, before);
    assert_eq!(f.native.balance(&late), 5 * UNIT);
}

#[test]
fn test_frozen_purchase_counts_against_sale_cap() {
    let f = Fixture::new();
    sell_out(&f);
    let late = f.investor(5 * UNIT);
    f.approve(&late, 5, 10, 100, 60);

    let result = f.sale.try_buy_tokens(&late, &late, &UNIT);
    assert_eq!(result, Err(Ok(SaleError::CapExceeded.into())));
    assert_eq!(f.sale.frozen_tokens(&late, &60), 0);
}

#[test]
fn test_finalize_beyond_token_cap_is_rejected() {
    let mut allocations = Allocations::senso();
    allocations.community += 1;
    let f = Fixture::with_allocations(allocations);
    sell_out(&f);
    let before = snapshot(&f.token);

    assert_eq!(f.sale.try_finalize(&f.owner), Err(Ok(SaleError::CapExceeded.into())));
    assert!(!f.sale.finalized());
    assert_unchanged(&f.token, before);
}

#[test]
fn test_locked_reserves_release_after_a_year() {
    let f = Fixture::new();
    let team_share = Allocations::senso().team;
    f.sale.finalize(&f.owner);

    f.advance(RESERVE_LOCK - 1);
    assert_eq!(
        f.sale.try_unfreeze_tokens(&f.wallets.team, &RESERVE_LOCK),
        Err(Ok(SaleError::NotMature.into()))
    );

    f.advance(1);
    assert_eq!(f.sale.unfreeze_tokens(&f.wallets.team, &RESERVE_LOCK), team_share);
    assert_eq!(f.token.balance(&f.wallets.team), team_share);

    let receiver = Address::generate(&f.env);
    f.token.transfer(&f.wallets.team, &receiver, &1);
    assert_eq!(f.token.balance(&receiver), 1);
}

#[test]
fn test_reserve_wallets_cannot_release_directly() {
    let f = Fixture::new();
    f.sale.finalize(&f.owner);
    f.advance(RESERVE_LOCK);

    let result = f
        .token
        .try_unfreeze(&f.wallets.team, &f.wallets.team, &RESERVE_LOCK);
    assert_eq!(result, Err(Ok(TokenError::Unauthorized.into())));
}
