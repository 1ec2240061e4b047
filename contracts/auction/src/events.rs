//! Domain events for indexers. Every topic tuple starts with a short symbol
//! followed by the auction id.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const TOPIC_AUCTION_CREATED: Symbol = symbol_short!("AUC_CRT");
pub const TOPIC_AUCTION_STARTED: Symbol = symbol_short!("AUC_STR");
pub const TOPIC_BID_ACCEPTED: Symbol = symbol_short!("BID_ACC");
pub const TOPIC_AUCTION_RESOLVED: Symbol = symbol_short!("AUC_RSV");
pub const TOPIC_AUCTION_CANCELED: Symbol = symbol_short!("AUC_CAN");
pub const TOPIC_ESCROW_WITHDRAWN: Symbol = symbol_short!("ESC_WDR");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEvent {
    pub auction_id: u64,
    pub seller: Address,
    pub asset_id: u64,
    pub duration: u64,
    pub reserve_price: i128,
    pub bid_increment_pct: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStartedEvent {
    pub auction_id: u64,
    pub start_at: u64,
    pub expires_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidAcceptedEvent {
    pub auction_id: u64,
    pub bidder: Address,
    pub new_total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionResolvedEvent {
    pub auction_id: u64,
    pub winner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCanceledEvent {
    pub auction_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowWithdrawnEvent {
    pub auction_id: u64,
    pub participant: Address,
    pub amount: i128,
}

#[allow(deprecated)]
pub fn emit_auction_created(
    env: &Env,
    auction_id: u64,
    seller: Address,
    asset_id: u64,
    duration: u64,
    reserve_price: i128,
    bid_increment_pct: u32,
) {
    let event = AuctionCreatedEvent {
        auction_id,
        seller: seller.clone(),
        asset_id,
        duration,
        reserve_price,
        bid_increment_pct,
    };
    env.events()
        .publish((TOPIC_AUCTION_CREATED, auction_id, seller), event);
}

#[allow(deprecated)]
pub fn emit_auction_started(env: &Env, auction_id: u64, start_at: u64, expires_at: u64) {
    let event = AuctionStartedEvent {
        auction_id,
        start_at,
        expires_at,
    };
    env.events().publish((TOPIC_AUCTION_STARTED, auction_id), event);
}

#[allow(deprecated)]
pub fn emit_bid_accepted(env: &Env, auction_id: u64, bidder: Address, new_total: i128) {
    let event = BidAcceptedEvent {
        auction_id,
        bidder: bidder.clone(),
        new_total,
    };
    env.events()
        .publish((TOPIC_BID_ACCEPTED, auction_id, bidder), event);
}

#[allow(deprecated)]
pub fn emit_auction_resolved(env: &Env, auction_id: u64, winner: Address, amount: i128) {
    let event = AuctionResolvedEvent {
        auction_id,
        winner,
        amount,
    };
    env.events().publish((TOPIC_AUCTION_RESOLVED, auction_id), event);
}

#[allow(deprecated)]
pub fn emit_auction_canceled(env: &Env, auction_id: u64) {
    let event = AuctionCanceledEvent { auction_id };
    env.events().publish((TOPIC_AUCTION_CANCELED, auction_id), event);
}

#[allow(deprecated)]
pub fn emit_escrow_withdrawn(env: &Env, auction_id: u64, participant: Address, amount: i128) {
    let event = EscrowWithdrawnEvent {
        auction_id,
        participant: participant.clone(),
        amount,
    };
    env.events()
        .publish((TOPIC_ESCROW_WITHDRAWN, auction_id, participant), event);
}
