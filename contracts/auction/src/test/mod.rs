pub mod withdraw_test;

use crate::{AuctionHouse, AuctionHouseClient};
use mock_custodian::{MockCustodian, MockCustodianClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger, LedgerInfo},
    token, Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec,
};

/// One whole payment-token unit (7 decimals).
pub const UNIT: i128 = 10_000_000;
pub const RESERVE: i128 = UNIT;
pub const INCREMENT_PCT: u32 = 5;
pub const DURATION: u64 = 3600;
pub const ASSET: u64 = 1;

pub struct TestContext {
    pub env: Env,
    pub client: AuctionHouseClient<'static>,
    pub custodian: MockCustodianClient<'static>,
    pub token: token::TokenClient<'static>,
    pub admin: Address,
    pub seller: Address,
    pub alice: Address,
    pub bob: Address,
}

impl TestContext {
    pub fn contract(&self) -> Address {
        self.client.address.clone()
    }

    /// Default auction on `ASSET`: reserve 1 unit, 5% increment, one hour.
    pub fn create_default(&self) -> u64 {
        self.client
            .create(&self.seller, &ASSET, &DURATION, &RESERVE, &INCREMENT_PCT)
    }

    /// Events published by the auction contract, oldest first. Token and
    /// custodian events are dropped.
    pub fn auction_events(&self) -> Vec<(Vec<Val>, Val)> {
        let contract = self.contract();
        let mut events = Vec::new(&self.env);
        for (source, topics, data) in self.env.events().all().iter() {
            if source == contract {
                events.push_back((topics, data));
            }
        }
        events
    }

    pub fn last_event(&self) -> (Vec<Val>, Val) {
        self.auction_events().last().expect("no auction events")
    }

    pub fn topics<T: IntoVal<Env, Vec<Val>>>(&self, topics: T) -> Vec<Val> {
        topics.into_val(&self.env)
    }

    pub fn decode<T: TryFromVal<Env, Val>>(&self, data: &Val) -> T {
        T::try_from_val(&self.env, data)
            .ok()
            .expect("unexpected event payload")
    }

    pub fn first_topic(&self, topics: &Vec<Val>) -> Symbol {
        self.decode(&topics.get(0).expect("empty topics"))
    }

    /// Mint `asset_id` to `owner` and approve the auction contract for it.
    pub fn give_asset(&self, owner: &Address, asset_id: u64) {
        self.custodian.mint(owner, &asset_id);
        self.custodian.approve(owner, &self.contract(), &asset_id);
    }
}

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    configure_ledger(&env);

    let contract_id = env.register(AuctionHouse, ());
    let client = AuctionHouseClient::new(&env, &contract_id);

    let custodian_id = env.register(MockCustodian, ());
    let custodian = MockCustodianClient::new(&env, &custodian_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&alice, &(100 * UNIT));
    token_admin_client.mint(&bob, &(100 * UNIT));

    client.initialize(&admin, &custodian_id, &token_address);

    let ctx = TestContext {
        env,
        client,
        custodian,
        token: token_client,
        admin,
        seller,
        alice,
        bob,
    };
    ctx.give_asset(&ctx.seller.clone(), ASSET);
    ctx
}

pub fn configure_ledger(env: &Env) {
    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 22,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 10_000_000,
    });
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}
