//! Per-(auction, participant) escrow bookkeeping.
//!
//! Pure ledger arithmetic over contract storage: nothing here moves tokens
//! or touches the custodian. Entries that reach zero are removed, so a
//! missing key and a zero balance are the same thing.

use crate::storage;
use crate::types::Participant;
use soroban_sdk::{Address, Env};

pub fn balance_of(env: &Env, auction_id: u64, participant: &Participant) -> i128 {
    storage::get_escrow(env, auction_id, participant)
}

pub fn bidder_balance(env: &Env, auction_id: u64, bidder: &Address) -> i128 {
    balance_of(env, auction_id, &Participant::Bidder(bidder.clone()))
}

/// Overwrite an entry. Zero clears it.
pub fn set_balance(env: &Env, auction_id: u64, participant: &Participant, amount: i128) {
    if amount == 0 {
        storage::remove_escrow(env, auction_id, participant);
    } else {
        storage::set_escrow(env, auction_id, participant, amount);
    }
}

/// Add `amount` to an entry and return the new balance.
pub fn credit(env: &Env, auction_id: u64, participant: &Participant, amount: i128) -> i128 {
    let total = balance_of(env, auction_id, participant) + amount;
    set_balance(env, auction_id, participant, total);
    total
}

/// Zero an entry, returning what it held.
pub fn take(env: &Env, auction_id: u64, participant: &Participant) -> i128 {
    let amount = balance_of(env, auction_id, participant);
    if amount != 0 {
        storage::remove_escrow(env, auction_id, participant);
    }
    amount
}

/// Upper bound for `bid_increment_pct`.
pub const MAX_INCREMENT_PCT: u32 = 100;

/// `value * pct / 100`, floored. Balances are never negative, so integer
/// division rounds down. `None` on overflow.
pub fn increment_of(value: i128, pct: u32) -> Option<i128> {
    value.checked_mul(pct as i128).map(|scaled| scaled / 100)
}

/// Smallest total that beats `current_high` by the bid increment.
///
/// Floor division means a small `current_high` or `pct` can yield an
/// increment of zero, in which case a tie is accepted.
pub fn required_minimum(current_high: i128, pct: u32) -> Option<i128> {
    current_high.checked_add(increment_of(current_high, pct)?)
}

/// Threshold for the opening bid: the reserve minus one increment, so that
/// adding the increment back lands at (or just under) the reserve itself.
pub fn opening_high(reserve: i128, pct: u32) -> Option<i128> {
    reserve.checked_sub(increment_of(reserve, pct)?)
}
