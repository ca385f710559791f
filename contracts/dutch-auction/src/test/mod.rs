

use crate::{
    AuctionParams, BidAccounting, DutchAuctionContract, DutchAuctionContractClient, LowBidPolicy,
    PaymentMedium, SettlementMode,
};
use mock_asset::{MockAsset, MockAssetClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger},
    token, vec, Address, Env, Event,
};

pub const UNIT: i128 = 10_000_000;
pub const RESERVE: i128 = 100 * UNIT;
pub const DECREMENT: i128 = UNIT / 10;
pub const DURATION: u32 = 10;
pub const INITIAL: i128 = RESERVE + DURATION as i128 * DECREMENT;
pub const START_BALANCE: i128 = 1_000 * UNIT;
pub const START_LEDGER: u32 = 100;

pub struct TestContext {
    pub env: Env,
    pub contract_id: Address,
    pub client: DutchAuctionContractClient<'static>,
    pub seller: Address,
    pub bidder1: Address,
    pub bidder2: Address,
    pub bidder3: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub asset: MockAssetClient<'static>,
    pub token_id: u32,
}

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.sequence_number = START_LEDGER;
        li.timestamp = 1_000;
    });

    let contract_id = env.register(DutchAuctionContract, ());
    let client = DutchAuctionContractClient::new(&env, &contract_id);

    let seller = Address::generate(&env);
    let bidder1 = Address::generate(&env);
    let bidder2 = Address::generate(&env);
    let bidder3 = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token = token::TokenClient::new(&env, &token_contract.address());
    let token_admin = token::StellarAssetClient::new(&env, &token_contract.address());
    for bidder in [&bidder1, &bidder2, &bidder3] {
        token_admin.mint(bidder, &START_BALANCE);
    }

    let asset_contract = env.register(MockAsset, ());
    let asset = MockAssetClient::new(&env, &asset_contract);
    let token_id = asset.mint(&seller);
    asset.approve(&seller, &contract_id, &token_id);

    TestContext {
        env,
        contract_id,
        client,
        seller,
        bidder1,
        bidder2,
        bidder3,
        token,
        token_admin,
        asset,
        token_id,
    }
}

impl TestContext {
    pub fn native(&self) -> PaymentMedium {
        PaymentMedium::Native(self.token.address.clone())
    }

    pub fn params(
        &self,
        payment: PaymentMedium,
        accounting: BidAccounting,
        settlement: SettlementMode,
    ) -> AuctionParams {
        AuctionParams {
            asset: crate::AssetRef {
                contract: self.asset.address.clone(),
                token_id: self.token_id,
            },
            payment,
            reserve_price: RESERVE,
            price_decrement: DECREMENT,
            duration: DURATION,
            start_ledger: None,
            accounting,
            settlement,
            low_bids: LowBidPolicy::Escrow,
        }
    }

    /// Native-value auction with the given policies, reserve 100, 10 ledgers, 0.1 per ledger.
    pub fn create(&self, accounting: BidAccounting, settlement: SettlementMode) -> u64 {
        let params = self.params(self.native(), accounting, settlement);
        self.client.create_auction(&self.seller, &params)
    }

    pub fn balance(&self, id: &Address) -> i128 {
        self.token.balance(id)
    }
}

pub fn advance_ledgers(env: &Env, ledgers: u32) {
    env.ledger().with_mut(|li| {
        li.sequence_number += ledgers;
        li.timestamp += 5 * ledgers as u64;
    });
}

/// Asserts `contract` published `event` in the most recent invocation.
pub fn assert_emitted(env: &Env, contract: &Address, event: &impl Event) {
    let expected = vec![env, (contract.clone(), event.topics(env), event.data(env))];
    let all = env.events().all();
    let found = (0..all.len()).any(|i| all.slice(i..i + 1) == expected);
    assert!(found, "event not published");
}
