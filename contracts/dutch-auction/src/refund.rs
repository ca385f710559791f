use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::events;
use crate::ledger::BidLedger;
use crate::payment::{Adapter, PaymentAdapter};
use crate::types::Auction;

/// Pays a non-winning bidder their escrow once the auction is over.
///
/// Anyone may trigger it for any account; the funds only ever go to the
/// account itself. The entry is zeroed before the payout.
pub fn refund(env: &Env, auction: &Auction, account: &Address) -> Result<i128, Error> {
    if auction.status.is_open() {
        return Err(Error::AuctionNotEnded);
    }
    if auction.highest_bidder.as_ref() == Some(account) {
        return Err(Error::HighestBidderCannotRefund);
    }

    let amount = BidLedger::new(env, auction.auction_id).clear_escrow(account);
    if amount <= 0 {
        return Err(Error::NothingToRefund);
    }

    Adapter::for_medium(&auction.payment).payout(env, account, amount)?;

    events::emit_refund_issued(env, auction.auction_id, account.clone(), amount);
    Ok(amount)
}
