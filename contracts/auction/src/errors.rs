use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Setup
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // Authorization
    Unauthorized = 3,
    SellerCannotBid = 4,

    // State
    AuctionNotFound = 10,
    AuctionCanceled = 11,
    AuctionNotStarted = 12,
    AuctionAlreadyStarted = 13,
    AuctionAlreadyResolved = 14,

    // Funds
    BidTooLow = 20,
    FundsLocked = 21,
    InvalidAmount = 22,

    // Timing
    BiddingClosed = 30,
    AuctionNotExpired = 31,

    // Creation parameters
    InvalidDuration = 40,
    InvalidReservePrice = 41,
    InvalidBidIncrement = 42,

    // Security
    ReentrancyDetected = 50,
}
