use crate::types::{AssetRef, Auction, Bid, DataKey};
use soroban_sdk::{Address, Env, Vec};

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Auction Counter ==========

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AuctionCounter)
        .unwrap_or(0)
}

pub fn increment_auction_counter(env: &Env) -> u64 {
    let counter = get_auction_counter(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::AuctionCounter, &counter);
    bump_instance(env);
    counter
}

// ========== Auctions ==========

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        bump_persistent(env, &key);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.auction_id);
    env.storage().persistent().set(&key, auction);
    bump_persistent(env, &key);
}

// ========== Listings ==========

/// Id of the last auction opened on `asset`, cleared when that auction ends.
pub fn get_listing(env: &Env, asset: &AssetRef) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::Listing(asset.clone()))
}

pub fn set_listing(env: &Env, asset: &AssetRef, auction_id: u64) {
    let key = DataKey::Listing(asset.clone());
    env.storage().persistent().set(&key, &auction_id);
    bump_persistent(env, &key);
}

pub fn remove_listing(env: &Env, asset: &AssetRef) {
    env.storage()
        .persistent()
        .remove(&DataKey::Listing(asset.clone()));
}

// ========== Bid History ==========

pub fn get_bid_history(env: &Env, auction_id: u64) -> Vec<Bid> {
    let key = DataKey::BidHistory(auction_id);
    match env.storage().persistent().get::<_, Vec<Bid>>(&key) {
        Some(history) => {
            bump_persistent(env, &key);
            history
        }
        None => Vec::new(env),
    }
}

pub fn add_bid_to_history(env: &Env, auction_id: u64, bid: Bid) {
    let key = DataKey::BidHistory(auction_id);
    let mut history = get_bid_history(env, auction_id);
    history.push_back(bid);
    env.storage().persistent().set(&key, &history);
    bump_persistent(env, &key);
}

// ========== Escrow ==========

pub fn get_escrow(env: &Env, auction_id: u64, bidder: &Address) -> i128 {
    let key = DataKey::Escrow(auction_id, bidder.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

/// Stores the escrowed amount; a zero balance removes the entry.
pub fn set_escrow(env: &Env, auction_id: u64, bidder: &Address, amount: i128) {
    let key = DataKey::Escrow(auction_id, bidder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}
