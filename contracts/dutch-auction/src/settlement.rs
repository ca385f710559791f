use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::events;
use crate::external::AssetRegistryClient;
use crate::ledger::BidLedger;
use crate::payment::PaymentAdapter;
use crate::storage;
use crate::types::{AssetRef, Auction, AuctionStatus};

pub fn verify_ownership(env: &Env, asset: &AssetRef, seller: &Address) -> Result<(), Error> {
    let registry = AssetRegistryClient::new(env, &asset.contract);
    match registry.try_owner_of(&asset.token_id) {
        Ok(Ok(owner)) if owner == *seller => Ok(()),
        _ => Err(Error::SellerNotAssetOwner),
    }
}

fn transfer_asset(env: &Env, asset: &AssetRef, from: &Address, to: &Address) -> Result<(), Error> {
    let registry = AssetRegistryClient::new(env, &asset.contract);
    let spender = env.current_contract_address();
    match registry.try_transfer_from(&spender, from, to, &asset.token_id) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::AssetTransferFailed),
    }
}

/// Ends an open auction.
///
/// With a highest bidder the asset goes to them and their winning amount goes
/// to the seller; without one the auction closes unsold. Status and escrow are
/// written before either outbound call, and a failing call rolls all of it back.
pub fn settle(env: &Env, auction: &mut Auction, adapter: &impl PaymentAdapter) -> Result<(), Error> {
    if auction.status.is_ended() {
        return Err(Error::AuctionClosed);
    }
    auction.ended_at = Some(env.ledger().sequence());
    storage::remove_listing(env, &auction.asset);

    let winner = match auction.highest_bidder.clone() {
        Some(winner) => winner,
        None => {
            auction.status = AuctionStatus::Unsold;
            storage::save_auction(env, auction);
            log!(env, "auction {} closed unsold", auction.auction_id);
            events::emit_auction_ended(env, auction.auction_id, None, 0);
            return Ok(());
        }
    };
    let amount = auction.highest_bid;

    auction.status = AuctionStatus::Sold;
    BidLedger::new(env, auction.auction_id).settle_winner(&winner, amount)?;
    storage::save_auction(env, auction);

    transfer_asset(env, &auction.asset, &auction.seller, &winner)?;
    adapter.payout(env, &auction.seller, amount)?;

    log!(env, "auction {} sold for {}", auction.auction_id, amount);
    events::emit_auction_ended(env, auction.auction_id, Some(winner), amount);
    Ok(())
}
