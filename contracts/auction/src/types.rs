use soroban_sdk::{contracttype, Address};

/// Lifecycle of a single auction.
///
/// `Created -> Started | Canceled`, `Started -> Resolved`. `Canceled` and
/// `Resolved` are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionState {
    Created = 0,
    Started = 1,
    Canceled = 2,
    Resolved = 3,
}

impl AuctionState {
    pub fn can_transition_to(&self, next: &AuctionState) -> bool {
        matches!(
            (self, next),
            (AuctionState::Created, AuctionState::Started)
                | (AuctionState::Created, AuctionState::Canceled)
                | (AuctionState::Started, AuctionState::Resolved)
        )
    }
}

/// One auction's configuration and mutable state.
///
/// `start_at` and `expires_at` stay zero until the first accepted bid.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub auction_id: u64,
    pub seller: Address,
    pub asset_id: u64,
    pub duration: u64,
    pub reserve_price: i128,
    pub bid_increment_pct: u32,
    pub state: AuctionState,
    pub start_at: u64,
    pub expires_at: u64,
    pub highest_bidder: Option<Address>,
}

/// Owner of an escrow entry. `Reserve` is the virtual entry seeded with the
/// reserve price so the opening bid is compared like any other.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Participant {
    Reserve,
    Bidder(Address),
}

impl Participant {
    pub fn from_highest(highest_bidder: &Option<Address>) -> Self {
        match highest_bidder {
            Some(bidder) => Participant::Bidder(bidder.clone()),
            None => Participant::Reserve,
        }
    }
}

/// Contract-wide configuration written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub custodian: Address,
    pub payment_token: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    ReentrancyLock,
    AuctionCounter,
    Auction(u64),
    Escrow(u64, Participant),
}
