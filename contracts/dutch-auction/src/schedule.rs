use soroban_sdk::contracttype;

use crate::errors::Error;

/// Linear descending price, measured in ledgers.
///
/// The price starts at `reserve_price + duration * price_decrement` on
/// `start_ledger`, drops by `price_decrement` every ledger and reaches
/// `reserve_price` exactly at `end_ledger()`, where it stays.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceSchedule {
    pub reserve_price: i128,
    pub price_decrement: i128,
    pub start_ledger: u32,
    pub duration: u32,
    pub initial_price: i128,
}

impl PriceSchedule {
    pub fn new(
        reserve_price: i128,
        price_decrement: i128,
        start_ledger: u32,
        duration: u32,
    ) -> Result<Self, Error> {
        if duration == 0 {
            return Err(Error::InvalidDuration);
        }
        if reserve_price < 0 || price_decrement < 0 {
            return Err(Error::InvalidPrice);
        }
        start_ledger
            .checked_add(duration)
            .ok_or(Error::InvalidDuration)?;

        let initial_price = price_decrement
            .checked_mul(duration as i128)
            .and_then(|drop| drop.checked_add(reserve_price))
            .ok_or(Error::InvalidPrice)?;

        Ok(PriceSchedule {
            reserve_price,
            price_decrement,
            start_ledger,
            duration,
            initial_price,
        })
    }

    pub fn end_ledger(&self) -> u32 {
        self.start_ledger.saturating_add(self.duration)
    }

    /// Asking price on `ledger`, or `None` before the auction opens.
    pub fn price_at(&self, ledger: u32) -> Option<i128> {
        if ledger < self.start_ledger {
            return None;
        }
        let elapsed = (ledger - self.start_ledger).min(self.duration);
        // cannot overflow: elapsed * decrement <= initial_price - reserve_price
        let price = self.initial_price - elapsed as i128 * self.price_decrement;
        Some(price.max(self.reserve_price))
    }

    pub fn has_elapsed(&self, ledger: u32) -> bool {
        ledger >= self.end_ledger()
    }
}
