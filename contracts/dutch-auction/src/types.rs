use soroban_sdk::{contracttype, Address, BytesN};

use crate::schedule::PriceSchedule;

/// Reference to the single indivisible asset being sold.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub contract: Address,
    pub token_id: u32,
}

/// How bidders pay. The address is the token contract funds move through.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentMedium {
    /// Network native asset, moved by a transfer the bidder authorizes in the bid call.
    Native(Address),
    /// Token pulled from an allowance the bidder granted beforehand.
    Allowance(Address),
    /// Token pulled after an off-band signed permit sets the allowance in the same call.
    Permit(Address),
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BidAccounting {
    /// Every bid adds to the bidder's escrow; the running total competes.
    Cumulative = 0,
    /// Every bid competes on its own; a losing bid is handed straight back and a
    /// leading bid replaces the bidder's previous escrow.
    Replacement = 1,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettlementMode {
    /// The first leading bid that meets the current price settles in the same call.
    Instant = 0,
    /// Bids accumulate until `end_auction` is called.
    Deferred = 1,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LowBidPolicy {
    /// Bids under the current price are escrowed as non-winning bids.
    Escrow = 0,
    /// Bids under the current price are refused.
    Reject = 1,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Open = 0,
    Sold = 1,
    Unsold = 2,
}

impl AuctionStatus {
    pub fn is_open(&self) -> bool {
        *self == AuctionStatus::Open
    }

    pub fn is_ended(&self) -> bool {
        !self.is_open()
    }
}

/// Caller supplied terms for a new auction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionParams {
    pub asset: AssetRef,
    pub payment: PaymentMedium,
    pub reserve_price: i128,
    pub price_decrement: i128,
    /// Number of ledgers the price keeps falling.
    pub duration: u32,
    /// First biddable ledger. `None` opens the auction on the creation ledger.
    pub start_ledger: Option<u32>,
    pub accounting: BidAccounting,
    pub settlement: SettlementMode,
    pub low_bids: LowBidPolicy,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub auction_id: u64,
    pub seller: Address,
    pub asset: AssetRef,
    pub payment: PaymentMedium,
    pub schedule: PriceSchedule,
    pub accounting: BidAccounting,
    pub settlement: SettlementMode,
    pub low_bids: LowBidPolicy,
    pub status: AuctionStatus,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub ended_at: Option<u32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub ledger: u32,
}

/// Off-band authorization letting the auction pull `value` from the bidder.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermitData {
    pub value: i128,
    /// Ledger timestamp after which the permit is void.
    pub deadline: u64,
    pub nonce: u64,
    pub signature: BytesN<64>,
}

#[contracttype]
pub enum DataKey {
    AuctionCounter,
    Auction(u64),
    Escrow(u64, Address),
    BidHistory(u64),
    Listing(AssetRef),
}
