#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::SensoTokenClient;

/// Spendable supply never exceeds the cap.
pub fn assert_supply_within_cap(token: &SensoTokenClient) {
    let cap = token.cap();
    let supply = token.total_supply();
    assert!(
        supply <= cap,
        "supply {} exceeds cap {}",
        supply,
        cap
    );
}

/// Frozen tokens are reserved capacity: supply plus frozen never exceeds the cap.
pub fn assert_reserved_within_cap(token: &SensoTokenClient) {
    let cap = token.cap();
    let reserved = token.total_supply() + token.total_frozen();
    assert!(
        reserved <= cap,
        "supply + frozen ({}) exceeds cap {}",
        reserved,
        cap
    );
}

/// Balances of the given accounts add up to the spendable supply.
///
/// Only meaningful when `holders` covers every account with a balance.
pub fn assert_balances_match_supply(token: &SensoTokenClient, holders: &[&Address]) {
    let sum: i128 = holders.iter().map(|holder| token.balance(holder)).sum();
    assert_eq!(
        sum,
        token.total_supply(),
        "balances of all holders ({}) differ from total supply",
        sum
    );
}

/// A failed operation must leave both supply counters untouched.
pub fn assert_counters_unchanged(token: &SensoTokenClient, supply_before: i128, frozen_before: i128) {
    assert_eq!(token.total_supply(), supply_before, "total supply changed");
    assert_eq!(token.total_frozen(), frozen_before, "total frozen changed");
}

pub fn assert_all_supply_invariants(token: &SensoTokenClient) {
    assert_supply_within_cap(token);
    assert_reserved_within_cap(token);
    assert!(token.total_frozen() >= 0, "negative frozen total");
}
