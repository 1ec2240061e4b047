use crate::types::{Auction, Config, DataKey, Participant};
use soroban_sdk::{Address, Env, Vec};

const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Instance ==========

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<Config> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::ReentrancyLock)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    env.storage().instance().set(&DataKey::ReentrancyLock, &locked);
}

// ========== Auction Counter ==========

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AuctionCounter)
        .unwrap_or(0)
}

pub fn increment_auction_counter(env: &Env) -> u64 {
    let counter = get_auction_counter(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::AuctionCounter, &counter);
    counter
}

// ========== Auctions ==========

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.auction_id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Auctions in creation order, optionally restricted to one seller.
pub fn list_auctions(env: &Env, seller: &Option<Address>) -> Vec<Auction> {
    let counter = get_auction_counter(env);
    let mut auctions = Vec::new(env);

    for id in 1..=counter {
        if let Some(auction) = get_auction(env, id) {
            match seller {
                Some(seller) if auction.seller != *seller => {}
                _ => auctions.push_back(auction),
            }
        }
    }

    auctions
}

// ========== Escrow ==========

pub fn get_escrow(env: &Env, auction_id: u64, participant: &Participant) -> i128 {
    let key = DataKey::Escrow(auction_id, participant.clone());
    let amount = env.storage().persistent().get::<_, i128>(&key);
    if amount.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    amount.unwrap_or(0)
}

pub fn set_escrow(env: &Env, auction_id: u64, participant: &Participant, amount: i128) {
    let key = DataKey::Escrow(auction_id, participant.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_escrow(env: &Env, auction_id: u64, participant: &Participant) {
    let key = DataKey::Escrow(auction_id, participant.clone());
    env.storage().persistent().remove(&key);
}
