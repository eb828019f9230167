extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger as _},
    vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::invariants::{assert_all_supply_invariants, assert_counters_unchanged};
use crate::{SensoToken, SensoTokenClient, TokenConfig, TokenError, TokensFrozen};

const ONE_YEAR: u64 = 365 * 24 * 60 * 60;

fn setup(with_engine: bool) -> (Env, SensoTokenClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(SensoToken, ());
    let client = SensoTokenClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let engine = Address::generate(&env);
    let config = TokenConfig {
        cap: 10_000,
        closed_sale_amount: 0,
        decimals: 0,
        name: String::from_str(&env, "Test"),
        symbol: String::from_str(&env, "TST"),
    };
    let sale_engine = if with_engine { Some(engine.clone()) } else { None };
    client.initialize(&admin, &admin, &sale_engine, &config);
    (env, client, admin, engine)
}

#[test]
fn test_frozen_mint_does_not_touch_spendable_balance() {
    let (env, client, admin, _engine) = setup(true);
    let investor = Address::generate(&env);

    client.mint(&admin, &investor, &100, &10);

    assert_eq!(client.balance(&investor), 0);
    assert_eq!(client.frozen_balance(&investor, &10), 100);
    assert_eq!(client.frozen_release_time(&investor, &10), 10);
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.total_frozen(), 100);
}

#[test]
fn test_same_duration_stacks_and_restarts_clock() {
    let (env, client, admin, _engine) = setup(true);
    let investor = Address::generate(&env);

    env.ledger().set_timestamp(1_000);
    client.mint(&admin, &investor, &1, &60);
    env.ledger().set_timestamp(1_030);
    client.mint(&admin, &investor, &2, &60);

    assert_eq!(client.frozen_balance(&investor, &60), 3);
    assert_eq!(client.frozen_release_time(&investor, &60), 1_090);
}

#[test]
fn test_different_durations_never_merge() {
    let (env, client, admin, _engine) = setup(true);
    let investor = Address::generate(&env);

    client.mint(&admin, &investor, &1, &1);
    client.mint(&admin, &investor, &2, &1);
    client.mint(&admin, &investor, &2, &10);

    assert_eq!(client.frozen_balance(&investor, &1), 3);
    assert_eq!(client.frozen_balance(&investor, &10), 2);
    assert_eq!(client.frozen_balance(&investor, &100), 0);
    assert_eq!(client.total_frozen(), 5);
}

#[test]
fn test_frozen_event() {
    let (env, client, admin, _engine) = setup(true);
    let investor = Address::generate(&env);

    env.ledger().set_timestamp(500);
    client.mint(&admin, &investor, &7, &ONE_YEAR);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("frozen").into_val(&env),
        investor.into_val(&env),
        ONE_YEAR.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let data: TokensFrozen = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        TokensFrozen {
            amount: 7,
            bucket_amount: 7,
            release_time: 500 + ONE_YEAR,
        }
    );
}

#[test]
fn test_unfreeze_before_maturity_fails_and_keeps_bucket() {
    let (env, client, admin, engine) = setup(true);
    let investor = Address::generate(&env);
    client.mint(&admin, &investor, &10, &10);

    env.ledger().set_timestamp(9);
    let result = client.try_unfreeze(&engine, &investor, &10);

    assert_eq!(result, Err(Ok(TokenError::NotMature.into())));
    assert_eq!(client.frozen_balance(&investor, &10), 10);
    assert_counters_unchanged(&client, 0, 10);
}

#[test]
fn test_unfreeze_after_maturity_releases_once() {
    let (env, client, admin, engine) = setup(true);
    let investor = Address::generate(&env);
    client.mint(&admin, &investor, &1, &1);
    client.mint(&admin, &investor, &2, &1);

    env.ledger().set_timestamp(1);
    let released = client.unfreeze(&engine, &investor, &1);

    assert_eq!(released, 3);
    assert_eq!(client.balance(&investor), 3);
    assert_eq!(client.frozen_balance(&investor, &1), 0);
    assert_eq!(client.frozen_release_time(&investor, &1), 0);
    assert_eq!(client.total_frozen(), 0);
    assert_eq!(client.total_supply(), 3);
    assert_all_supply_invariants(&client);

    assert_eq!(
        client.try_unfreeze(&engine, &investor, &1),
        Err(Ok(TokenError::NothingToRelease.into()))
    );
}

#[test]
fn test_unfreeze_keeps_reserved_total_constant() {
    let (env, client, admin, engine) = setup(true);
    let investor = Address::generate(&env);
    client.mint(&admin, &investor, &40, &0);
    client.mint(&admin, &investor, &60, &5);
    let reserved = client.total_supply() + client.total_frozen();

    env.ledger().set_timestamp(5);
    client.unfreeze(&engine, &investor, &5);

    assert_eq!(client.total_supply() + client.total_frozen(), reserved);
    assert_eq!(client.balance(&investor), 100);
}

#[test]
fn test_unfreeze_unknown_bucket_fails() {
    let (env, client, _admin, engine) = setup(true);
    let result = client.try_unfreeze(&engine, &Address::generate(&env), &1);
    assert_eq!(result, Err(Ok(TokenError::NothingToRelease.into())));
}

#[test]
fn test_only_sale_engine_can_unfreeze() {
    let (env, client, admin, _engine) = setup(true);
    let investor = Address::generate(&env);
    client.mint(&admin, &investor, &10, &1);
    env.ledger().set_timestamp(100);

    assert_eq!(
        client.try_unfreeze(&admin, &investor, &1),
        Err(Ok(TokenError::Unauthorized.into()))
    );
    assert_eq!(
        client.try_unfreeze(&investor, &investor, &1),
        Err(Ok(TokenError::Unauthorized.into()))
    );
    assert_eq!(client.frozen_balance(&investor, &1), 10);
}

#[test]
fn test_token_without_sale_engine_never_unfreezes() {
    let (env, client, admin, engine) = setup(false);
    let investor = Address::generate(&env);
    client.mint(&admin, &investor, &10, &1);
    env.ledger().set_timestamp(100);

    assert_eq!(client.sale_engine(), None);
    assert_eq!(
        client.try_unfreeze(&engine, &investor, &1),
        Err(Ok(TokenError::Unauthorized.into()))
    );
}

#[test]
fn test_unfreeze_is_not_subject_to_pause_gate() {
    let (env, client, admin, engine) = setup(true);
    let investor = Address::generate(&env);
    client.mint(&admin, &investor, &10, &1);
    assert!(client.paused());

    env.ledger().set_timestamp(1);
    client.unfreeze(&engine, &investor, &1);

    assert_eq!(client.balance(&investor), 10);
    assert_eq!(
        client.try_transfer(&investor, &admin, &1),
        Err(Ok(TokenError::TransferRestricted.into()))
    );
}

#[test]
fn test_unfrozen_event() {
    let (env, client, admin, engine) = setup(true);
    let investor = Address::generate(&env);
    client.mint(&admin, &investor, &4, &2);

    env.ledger().set_timestamp(2);
    client.unfreeze(&engine, &investor, &2);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("unfrozen").into_val(&env),
        investor.into_val(&env),
        2u64.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let amount: i128 = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(amount, 4);
}
