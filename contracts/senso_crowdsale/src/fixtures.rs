#![allow(dead_code)]

extern crate std;

use senso_token::{SensoToken, SensoTokenClient, TokenConfig};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token, Address, Env,
};

use crate::{Allocations, SaleWallets, SensoCrowdsale, SensoCrowdsaleClient};

/// One whole unit of a Stellar asset contract (7 decimals).
pub const UNIT: i128 = 10_000_000;

/// Start of every test clock.
pub const GENESIS: u64 = 1_700_000_000;

pub struct Fixture {
    pub env: Env,
    pub sale: SensoCrowdsaleClient<'static>,
    pub token: SensoTokenClient<'static>,
    pub native: token::TokenClient<'static>,
    pub owner: Address,
    pub closed_sale: Address,
    pub wallets: SaleWallets,
    native_admin: token::StellarAssetClient<'static>,
}

impl Fixture {
    /// Production SENSO tranches.
    pub fn new() -> Self {
        Self::with_allocations(Allocations::senso())
    }

    /// Deploy the token with the sale as its engine, then configure the sale.
    pub fn with_allocations(allocations: Allocations) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(GENESIS);

        let token_id = env.register(SensoToken, ());
        let sale_id = env.register(SensoCrowdsale, ());
        let token = SensoTokenClient::new(&env, &token_id);
        let sale = SensoCrowdsaleClient::new(&env, &sale_id);

        let owner = Address::generate(&env);
        let closed_sale = Address::generate(&env);
        let mut config = TokenConfig::senso(&env);
        config.closed_sale_amount = allocations.closed_sale;
        token.initialize(&owner, &closed_sale, &Some(sale_id.clone()), &config);

        let native_sac = env.register_stellar_asset_contract_v2(owner.clone());
        let native = token::TokenClient::new(&env, &native_sac.address());
        let native_admin = token::StellarAssetClient::new(&env, &native_sac.address());

        let wallets = SaleWallets {
            collected_funds: Address::generate(&env),
            advisory: Address::generate(&env),
            user_loyalty: Address::generate(&env),
            partners: Address::generate(&env),
            team: Address::generate(&env),
            safe_support: Address::generate(&env),
            community: Address::generate(&env),
        };
        sale.initialize(&owner, &token_id, &native_sac.address(), &wallets, &allocations);

        Fixture {
            env,
            sale,
            token,
            native,
            owner,
            closed_sale,
            wallets,
            native_admin,
        }
    }

    /// A fresh account holding `funds` base units of the native asset.
    pub fn investor(&self, funds: i128) -> Address {
        let investor = Address::generate(&self.env);
        if funds > 0 {
            self.native_admin.mint(&investor, &funds);
        }
        investor
    }

    /// A second payment asset, returned with its admin client.
    pub fn payment_asset(&self) -> (token::TokenClient<'static>, token::StellarAssetClient<'static>) {
        let sac = self.env.register_stellar_asset_contract_v2(self.owner.clone());
        (
            token::TokenClient::new(&self.env, &sac.address()),
            token::StellarAssetClient::new(&self.env, &sac.address()),
        )
    }

    pub fn approve(&self, payer: &Address, rate: i128, limit: i128, freeze_share: u32, freeze_duration: u64) {
        self.sale
            .approve(&self.owner, payer, &rate, &limit, &freeze_share, &freeze_duration);
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn advance(&self, seconds: u64) {
        let now = self.now();
        self.env.ledger().set_timestamp(now + seconds);
    }
}
