use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Configuration
    InvalidDuration = 1,
    InvalidPrice = 2,
    InvalidStartLedger = 3,
    SellerNotAssetOwner = 4,
    AssetAlreadyListed = 5,

    // Lifecycle
    AuctionNotFound = 10,
    AuctionNotStarted = 11,
    AuctionClosed = 12,
    AuctionNotEnded = 13,
    AuctionStillRunning = 14,

    // Bids
    InvalidAmount = 20,
    BidBelowPrice = 21,

    // Refunds
    HighestBidderCannotRefund = 30,
    NothingToRefund = 31,

    // Collaborators
    PaymentFailed = 40,
    PermitExpired = 41,
    PermitNonceMismatch = 42,
    PermitNotSupported = 43,
    AssetTransferFailed = 44,

    Overflow = 50,
}
