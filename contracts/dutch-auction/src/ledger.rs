use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::{Auction, BidAccounting};

/// Where a bid would land, worked out before any funds move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BidAssessment {
    /// Amount that competes for the lead: the bidder's running total under
    /// cumulative accounting, the bid alone under replacement accounting.
    pub standing: i128,
    pub leads: bool,
}

/// Per-bidder escrow of one auction. The highest bid and bidder live on the
/// [`Auction`] itself and are only ever moved upwards from here.
pub struct BidLedger<'a> {
    env: &'a Env,
    auction_id: u64,
}

impl<'a> BidLedger<'a> {
    pub fn new(env: &'a Env, auction_id: u64) -> Self {
        BidLedger { env, auction_id }
    }

    pub fn escrowed_of(&self, bidder: &Address) -> i128 {
        storage::get_escrow(self.env, self.auction_id, bidder)
    }

    pub fn assess(
        &self,
        auction: &Auction,
        bidder: &Address,
        amount: i128,
    ) -> Result<BidAssessment, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let standing = match auction.accounting {
            BidAccounting::Cumulative => self
                .escrowed_of(bidder)
                .checked_add(amount)
                .ok_or(Error::Overflow)?,
            BidAccounting::Replacement => amount,
        };
        // strictly greater: an equal bid never takes the lead
        Ok(BidAssessment {
            standing,
            leads: standing > auction.highest_bid,
        })
    }

    /// Books `amount`, already collected from `bidder`, and moves the lead if
    /// the assessment says so.
    ///
    /// Returns the part of the bidder's earlier escrow that a replacing bid
    /// frees up; the caller owes it back to the bidder.
    pub fn record_bid(
        &self,
        auction: &mut Auction,
        bidder: &Address,
        amount: i128,
        assessment: &BidAssessment,
    ) -> Result<i128, Error> {
        let previous = self.escrowed_of(bidder);
        let (balance, released) = match auction.accounting {
            BidAccounting::Replacement if assessment.leads => (amount, previous),
            _ => (
                previous.checked_add(amount).ok_or(Error::Overflow)?,
                0,
            ),
        };
        storage::set_escrow(self.env, self.auction_id, bidder, balance);

        if assessment.leads {
            auction.highest_bid = assessment.standing;
            auction.highest_bidder = Some(bidder.clone());
        }
        Ok(released)
    }

    /// Takes the winning amount out of the winner's escrow on settlement.
    pub fn settle_winner(&self, winner: &Address, amount: i128) -> Result<(), Error> {
        let balance = self
            .escrowed_of(winner)
            .checked_sub(amount)
            .filter(|left| *left >= 0)
            .ok_or(Error::Overflow)?;
        storage::set_escrow(self.env, self.auction_id, winner, balance);
        Ok(())
    }

    /// Zeroes the bidder's entry and returns what it held.
    pub fn clear_escrow(&self, bidder: &Address) -> i128 {
        let amount = self.escrowed_of(bidder);
        if amount != 0 {
            storage::set_escrow(self.env, self.auction_id, bidder, 0);
        }
        amount
    }
}
