#![allow(dead_code)]

extern crate std;

use senso_token::SensoTokenClient;

use crate::SensoCrowdsaleClient;

/// While the sale runs, minted plus frozen tokens stay within the sale tranche.
pub fn assert_within_sale_cap(sale: &SensoCrowdsaleClient, token: &SensoTokenClient) {
    let reserved = token.total_supply() + token.total_frozen();
    let cap = sale.sale_cap();
    assert!(
        reserved <= cap,
        "supply + frozen ({}) exceeds sale cap {}",
        reserved,
        cap
    );
}

/// Nothing ever exceeds the token's hard cap.
pub fn assert_within_token_cap(token: &SensoTokenClient) {
    let reserved = token.total_supply() + token.total_frozen();
    assert!(
        reserved <= token.cap(),
        "supply + frozen ({}) exceeds cap {}",
        reserved,
        token.cap()
    );
}

pub fn snapshot(token: &SensoTokenClient) -> (i128, i128) {
    (token.total_supply(), token.total_frozen())
}

pub fn assert_unchanged(token: &SensoTokenClient, before: (i128, i128)) {
    assert_eq!(snapshot(token), before, "a rejected call changed the ledger");
}
