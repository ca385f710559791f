#![no_std]

mod errors;
mod events;
mod external;
mod ledger;
mod payment;
mod refund;
mod schedule;
mod settlement;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

pub use errors::Error;
pub use external::{AssetRegistryClient, PermitTokenClient};
pub use schedule::PriceSchedule;
pub use types::{
    AssetRef, Auction, AuctionParams, AuctionStatus, Bid, BidAccounting, LowBidPolicy,
    PaymentMedium, PermitData, SettlementMode,
};

use ledger::BidLedger;
use payment::{Adapter, PaymentAdapter};

/// Descending-price auctions for single indivisible assets, settled through
/// an escrow of bidder deposits.
///
/// Each auction opens at `reserve + duration * decrement` and loses
/// `decrement` per ledger until it rests at the reserve. Bids are escrowed in
/// the auction's payment medium; the auction ends either on the first leading
/// bid that meets the current price (instant settlement) or through
/// `end_auction` (deferred settlement). Losing bidders reclaim their escrow
/// with `refund` once the auction is over.
#[contract]
pub struct DutchAuctionContract;

#[contractimpl]
impl DutchAuctionContract {
    // ========== AUCTION LIFECYCLE ==========

    /// Opens a new auction for an asset the seller currently owns and that
    /// no other open auction is selling.
    ///
    /// The seller must also have approved this contract on the asset registry
    /// for the asset to move at settlement; that is not checked here.
    pub fn create_auction(env: Env, seller: Address, params: AuctionParams) -> Result<u64, Error> {
        seller.require_auth();

        let now = env.ledger().sequence();
        let start_ledger = match params.start_ledger {
            Some(start) if start < now => return Err(Error::InvalidStartLedger),
            Some(start) => start,
            None => now,
        };
        let schedule = PriceSchedule::new(
            params.reserve_price,
            params.price_decrement,
            start_ledger,
            params.duration,
        )?;
        settlement::verify_ownership(&env, &params.asset, &seller)?;
        let listed = storage::get_listing(&env, &params.asset)
            .and_then(|id| storage::get_auction(&env, id))
            .is_some_and(|auction| auction.status.is_open());
        if listed {
            return Err(Error::AssetAlreadyListed);
        }

        let auction_id = storage::increment_auction_counter(&env);
        let auction = Auction {
            auction_id,
            seller: seller.clone(),
            asset: params.asset.clone(),
            payment: params.payment,
            schedule,
            accounting: params.accounting,
            settlement: params.settlement,
            low_bids: params.low_bids,
            status: AuctionStatus::Open,
            highest_bid: 0,
            highest_bidder: None,
            ended_at: None,
        };
        storage::save_auction(&env, &auction);
        storage::set_listing(&env, &auction.asset, auction_id);

        events::emit_auction_created(
            &env,
            auction_id,
            seller,
            params.asset,
            schedule.initial_price,
            schedule.reserve_price,
            schedule.start_ledger,
            schedule.end_ledger(),
        );
        Ok(auction_id)
    }

    /// Bids `amount`, collected through the auction's payment medium. For a
    /// permit auction this pulls from an allowance granted beforehand.
    pub fn place_bid(env: Env, auction_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();
        let auction = load(&env, auction_id)?;
        let adapter = Adapter::for_medium(&auction.payment);
        bid(&env, auction, &bidder, amount, &adapter)
    }

    /// Bids `amount` on a permit auction, authorizing the pull with a signed
    /// permit instead of a prior approval.
    pub fn place_bid_with_permit(
        env: Env,
        auction_id: u64,
        bidder: Address,
        amount: i128,
        permit: PermitData,
    ) -> Result<(), Error> {
        bidder.require_auth();
        let auction = load(&env, auction_id)?;
        let adapter = Adapter::with_permit(&auction.payment, permit)?;
        bid(&env, auction, &bidder, amount, &adapter)
    }

    /// Closes the auction, selling to the highest bidder if there is one.
    ///
    /// Allowed once the price has reached the reserve. An instant-settlement
    /// auction may also be closed earlier when the price has decayed to its
    /// standing highest bid.
    pub fn end_auction(env: Env, auction_id: u64) -> Result<(), Error> {
        let mut auction = load(&env, auction_id)?;
        if auction.status.is_ended() {
            return Err(Error::AuctionClosed);
        }

        let now = env.ledger().sequence();
        if !auction.schedule.has_elapsed(now) {
            if auction.settlement == SettlementMode::Deferred {
                return Err(Error::AuctionStillRunning);
            }
            let threshold = auction
                .schedule
                .price_at(now)
                .ok_or(Error::AuctionStillRunning)?;
            if auction.highest_bidder.is_none() || auction.highest_bid < threshold {
                return Err(Error::AuctionStillRunning);
            }
        }

        let adapter = Adapter::for_medium(&auction.payment);
        settlement::settle(&env, &mut auction, &adapter)
    }

    /// Returns the escrow of a bidder who did not win. Callable by anyone.
    pub fn refund(env: Env, auction_id: u64, account: Address) -> Result<i128, Error> {
        let auction = load(&env, auction_id)?;
        refund::refund(&env, &auction, &account)
    }

    // ========== QUERIES ==========

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        load(&env, auction_id)
    }

    pub fn auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    /// Asking price on the current ledger.
    pub fn current_price(env: Env, auction_id: u64) -> Result<i128, Error> {
        let auction = load(&env, auction_id)?;
        auction
            .schedule
            .price_at(env.ledger().sequence())
            .ok_or(Error::AuctionNotStarted)
    }

    pub fn price_at(env: Env, auction_id: u64, ledger: u32) -> Result<i128, Error> {
        let auction = load(&env, auction_id)?;
        auction
            .schedule
            .price_at(ledger)
            .ok_or(Error::AuctionNotStarted)
    }

    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = load(&env, auction_id)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    pub fn escrow_of(env: Env, auction_id: u64, bidder: Address) -> Result<i128, Error> {
        load(&env, auction_id)?;
        Ok(BidLedger::new(&env, auction_id).escrowed_of(&bidder))
    }

    pub fn get_bid_history(env: Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
        load(&env, auction_id)?;
        Ok(storage::get_bid_history(&env, auction_id))
    }
}

fn load(env: &Env, auction_id: u64) -> Result<Auction, Error> {
    storage::get_auction(env, auction_id).ok_or(Error::AuctionNotFound)
}

fn bid(
    env: &Env,
    mut auction: Auction,
    bidder: &Address,
    amount: i128,
    adapter: &Adapter,
) -> Result<(), Error> {
    if auction.status.is_ended() {
        return Err(Error::AuctionClosed);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let now = env.ledger().sequence();
    let threshold = auction
        .schedule
        .price_at(now)
        .ok_or(Error::AuctionNotStarted)?;

    let ledger = BidLedger::new(env, auction.auction_id);
    let assessment = ledger.assess(&auction, bidder, amount)?;
    adapter.precheck(env, bidder, amount)?;

    if assessment.standing < threshold && auction.low_bids == LowBidPolicy::Reject {
        return Err(Error::BidBelowPrice);
    }

    if !assessment.leads && auction.accounting == BidAccounting::Replacement {
        // a losing replacement bid is never collected
        events::emit_bid_returned(
            env,
            auction.auction_id,
            bidder.clone(),
            amount,
            auction.highest_bid,
        );
        return Ok(());
    }

    adapter.collect(env, bidder, amount)?;
    let released = ledger.record_bid(&mut auction, bidder, amount, &assessment)?;

    storage::add_bid_to_history(
        env,
        auction.auction_id,
        Bid {
            bidder: bidder.clone(),
            amount,
            ledger: now,
        },
    );
    events::emit_bid_placed(
        env,
        auction.auction_id,
        bidder.clone(),
        amount,
        assessment.standing,
        threshold,
    );

    let settles = auction.settlement == SettlementMode::Instant
        && assessment.leads
        && assessment.standing >= threshold;
    if settles {
        log!(env, "auction {}: bid {} meets price {}", auction.auction_id, assessment.standing, threshold);
        settlement::settle(env, &mut auction, adapter)?;
    } else {
        storage::save_auction(env, &auction);
    }

    if released > 0 {
        adapter.payout(env, bidder, released)?;
    }
    Ok(())
}

#[cfg(test)]
mod test;
