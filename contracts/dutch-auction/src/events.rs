use soroban_sdk::{contractevent, Address, Env};

use crate::types::AssetRef;

#[contractevent(topics = ["auction_created"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEvent {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub seller: Address,
    pub asset: AssetRef,
    pub initial_price: i128,
    pub reserve_price: i128,
    pub start_ledger: u32,
    pub end_ledger: u32,
}

#[contractevent(topics = ["bid_placed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEvent {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub standing: i128,
    pub threshold: i128,
}

#[contractevent(topics = ["bid_returned"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidReturnedEvent {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub highest_bid: i128,
}

#[contractevent(topics = ["auction_ended"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEvent {
    #[topic]
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub amount: i128,
}

#[contractevent(topics = ["refund_issued"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundIssuedEvent {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub account: Address,
    pub amount: i128,
}

pub fn emit_auction_created(
    env: &Env,
    auction_id: u64,
    seller: Address,
    asset: AssetRef,
    initial_price: i128,
    reserve_price: i128,
    start_ledger: u32,
    end_ledger: u32,
) {
    AuctionCreatedEvent {
        auction_id,
        seller,
        asset,
        initial_price,
        reserve_price,
        start_ledger,
        end_ledger,
    }
    .publish(env);
}

pub fn emit_bid_placed(
    env: &Env,
    auction_id: u64,
    bidder: Address,
    amount: i128,
    standing: i128,
    threshold: i128,
) {
    BidPlacedEvent {
        auction_id,
        bidder,
        amount,
        standing,
        threshold,
    }
    .publish(env);
}

pub fn emit_bid_returned(env: &Env, auction_id: u64, bidder: Address, amount: i128, highest_bid: i128) {
    BidReturnedEvent {
        auction_id,
        bidder,
        amount,
        highest_bid,
    }
    .publish(env);
}

pub fn emit_auction_ended(env: &Env, auction_id: u64, winner: Option<Address>, amount: i128) {
    AuctionEndedEvent {
        auction_id,
        winner,
        amount,
    }
    .publish(env);
}

pub fn emit_refund_issued(env: &Env, auction_id: u64, account: Address, amount: i128) {
    RefundIssuedEvent {
        auction_id,
        account,
        amount,
    }
    .publish(env);
}
