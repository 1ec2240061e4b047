#![no_std]

//! # MarketX Auction House
//!
//! Timed ascending-price auctions over non-fungible assets, each with its
//! own escrow ledger.
//!
//! An auction is created in `Created` state and holds no custody until the
//! first accepted bid. That bid starts the clock, pulls the asset from the
//! seller into this contract through the configured custodian, and locks the
//! leading bidder's escrow. Bids are cumulative: each call adds to the
//! caller's standing balance, which must beat the current high balance by
//! `bid_increment_pct` percent. Outbid participants may withdraw at any time.
//! After expiry anyone may [`AuctionHouse::resolve`], which hands the asset
//! to the winner and moves the winning balance into the seller's escrow entry
//! for the seller to withdraw.
//!
//! Every mutating entrypoint runs under [`guard::non_reentrant`]. Validation
//! errors are returned before the first storage write; a failing token or
//! custodian call traps and the runtime rolls the invocation back.
//!
//! ## Modules
//!
//! - [`escrow`]    — balance bookkeeping and bid threshold arithmetic.
//! - [`custodian`] — client interface of the external asset registry.
//! - [`events`]    — topics and payloads published for indexers.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

pub mod custodian;
pub mod errors;
pub mod escrow;
pub mod events;
mod guard;
mod storage;
pub mod types;

pub use errors::Error;
pub use types::{Auction, AuctionState, Config, Participant};

use custodian::CustodianClient;

#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    // ========== INITIALIZATION ==========

    /// Bind the contract to an asset custodian and a payment token.
    ///
    /// # Errors
    ///
    /// - [`Error::AlreadyInitialized`] — called more than once.
    pub fn initialize(
        env: Env,
        admin: Address,
        custodian: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_config(
            &env,
            &Config {
                admin,
                custodian,
                payment_token,
            },
        );
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    // ========== REGISTRY ==========

    /// Open a new auction for `asset_id`, which `seller` must own.
    ///
    /// The asset stays with the seller until the first bid; the seller has
    /// to approve this contract with the custodian before then or the opening
    /// bid will fail.
    ///
    /// # Errors
    ///
    /// - [`Error::Unauthorized`]        — custodian reports another owner.
    /// - [`Error::InvalidDuration`]     — `duration` is zero.
    /// - [`Error::InvalidReservePrice`] — `reserve_price` is negative.
    /// - [`Error::InvalidBidIncrement`] — `bid_increment_pct` above 100.
    pub fn create(
        env: Env,
        seller: Address,
        asset_id: u64,
        duration: u64,
        reserve_price: i128,
        bid_increment_pct: u32,
    ) -> Result<u64, Error> {
        seller.require_auth();
        let config = Self::require_config(&env)?;

        guard::non_reentrant(&env, || {
            if duration == 0 {
                return Err(Error::InvalidDuration);
            }
            if reserve_price < 0 {
                return Err(Error::InvalidReservePrice);
            }
            if bid_increment_pct > escrow::MAX_INCREMENT_PCT {
                return Err(Error::InvalidBidIncrement);
            }

            let owner = CustodianClient::new(&env, &config.custodian).owner_of(&asset_id);
            if owner != seller {
                return Err(Error::Unauthorized);
            }

            let auction_id = storage::increment_auction_counter(&env);
            let auction = Auction {
                auction_id,
                seller: seller.clone(),
                asset_id,
                duration,
                reserve_price,
                bid_increment_pct,
                state: AuctionState::Created,
                start_at: 0,
                expires_at: 0,
                highest_bidder: None,
            };
            storage::save_auction(&env, &auction);
            escrow::set_balance(&env, auction_id, &Participant::Reserve, reserve_price);

            events::emit_auction_created(
                &env,
                auction_id,
                seller.clone(),
                asset_id,
                duration,
                reserve_price,
                bid_increment_pct,
            );
            log!(&env, "auction created", auction_id, asset_id);

            Ok(auction_id)
        })
    }

    /// All auctions in creation order, or only those of `seller`.
    pub fn fetch(env: Env, seller: Option<Address>) -> Vec<Auction> {
        storage::list_auctions(&env, &seller)
    }

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    /// Highest allocated id; zero before the first auction.
    pub fn auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    // ========== BIDDING ==========

    /// Add `amount` to `bidder`'s escrow for `auction_id`.
    ///
    /// The resulting total must reach the current high balance plus
    /// `bid_increment_pct` percent of it (floored). For the opening bid the
    /// high balance is the reserve reduced by one increment, which lets a bid
    /// equal to the reserve through. The opening bid also starts the clock
    /// and takes custody of the asset.
    ///
    /// # Errors
    ///
    /// - [`Error::AuctionCanceled`] / [`Error::AuctionAlreadyResolved`] — terminal state.
    /// - [`Error::SellerCannotBid`] — `bidder` is the seller.
    /// - [`Error::InvalidAmount`]   — `amount` is not positive, or the new
    ///   total overflows.
    /// - [`Error::InvalidDuration`] — opening bid cannot fit the deadline in
    ///   a ledger timestamp.
    /// - [`Error::BidTooLow`]       — new total below the required minimum.
    /// - [`Error::BiddingClosed`]   — outside `[start_at, expires_at]`.
    pub fn bid(env: Env, bidder: Address, auction_id: u64, amount: i128) -> Result<(), Error> {
        bidder.require_auth();
        let config = Self::require_config(&env)?;

        guard::non_reentrant(&env, || {
            let mut auction = Self::load(&env, auction_id)?;

            match auction.state {
                AuctionState::Canceled => return Err(Error::AuctionCanceled),
                AuctionState::Resolved => return Err(Error::AuctionAlreadyResolved),
                _ => {}
            }
            if bidder == auction.seller {
                return Err(Error::SellerCannotBid);
            }
            if amount <= 0 {
                return Err(Error::InvalidAmount);
            }

            let now = env.ledger().timestamp();
            let candidate_total = escrow::bidder_balance(&env, auction_id, &bidder)
                .checked_add(amount)
                .ok_or(Error::InvalidAmount)?;
            let mut current_high = escrow::balance_of(
                &env,
                auction_id,
                &Participant::from_highest(&auction.highest_bidder),
            );

            let opening = auction.state == AuctionState::Created;
            if opening {
                auction.state = AuctionState::Started;
                auction.start_at = now;
                auction.expires_at = now
                    .checked_add(auction.duration)
                    .ok_or(Error::InvalidDuration)?;
                current_high = escrow::opening_high(current_high, auction.bid_increment_pct)
                    .ok_or(Error::InvalidAmount)?;
            }

            let required = escrow::required_minimum(current_high, auction.bid_increment_pct)
                .ok_or(Error::InvalidAmount)?;
            if candidate_total < required {
                return Err(Error::BidTooLow);
            }
            if now < auction.start_at || now > auction.expires_at {
                return Err(Error::BiddingClosed);
            }

            let contract = env.current_contract_address();
            if opening {
                CustodianClient::new(&env, &config.custodian).transfer_from(
                    &contract,
                    &auction.seller,
                    &contract,
                    &auction.asset_id,
                );
            }
            token::Client::new(&env, &config.payment_token).transfer(&bidder, &contract, &amount);

            escrow::set_balance(
                &env,
                auction_id,
                &Participant::Bidder(bidder.clone()),
                candidate_total,
            );
            if auction.highest_bidder.as_ref() != Some(&bidder) {
                auction.highest_bidder = Some(bidder.clone());
            }
            storage::save_auction(&env, &auction);

            if opening {
                events::emit_auction_started(&env, auction_id, auction.start_at, auction.expires_at);
            }
            events::emit_bid_accepted(&env, auction_id, bidder.clone(), candidate_total);
            log!(&env, "bid accepted", auction_id, candidate_total);

            Ok(())
        })
    }

    /// Pay `participant` their whole escrow for `auction_id`.
    ///
    /// A zero balance is a no-op. The seller collects sale proceeds this way
    /// once the auction is resolved.
    ///
    /// # Errors
    ///
    /// - [`Error::FundsLocked`] — `participant` is the current highest bidder.
    pub fn withdraw(env: Env, participant: Address, auction_id: u64) -> Result<(), Error> {
        participant.require_auth();
        let config = Self::require_config(&env)?;

        guard::non_reentrant(&env, || {
            let auction = Self::load(&env, auction_id)?;

            if auction.highest_bidder.as_ref() == Some(&participant) {
                return Err(Error::FundsLocked);
            }

            let amount = escrow::take(&env, auction_id, &Participant::Bidder(participant.clone()));
            if amount == 0 {
                return Ok(());
            }

            token::Client::new(&env, &config.payment_token).transfer(
                &env.current_contract_address(),
                &participant,
                &amount,
            );
            events::emit_escrow_withdrawn(&env, auction_id, participant.clone(), amount);

            Ok(())
        })
    }

    // ========== SETTLEMENT ==========

    /// Settle an expired auction. Permissionless.
    ///
    /// The asset goes to the highest bidder, whose balance is moved to the
    /// seller's escrow entry. The highest bidder is then reset to `None`.
    ///
    /// # Errors
    ///
    /// - [`Error::AuctionNotStarted`] — no bid was ever accepted, or canceled.
    /// - [`Error::AuctionAlreadyResolved`] — already settled.
    /// - [`Error::AuctionNotExpired`] — `expires_at` not reached yet.
    pub fn resolve(env: Env, auction_id: u64) -> Result<(), Error> {
        let config = Self::require_config(&env)?;

        guard::non_reentrant(&env, || {
            let mut auction = Self::load(&env, auction_id)?;

            match auction.state {
                AuctionState::Started => {}
                AuctionState::Resolved => return Err(Error::AuctionAlreadyResolved),
                AuctionState::Created | AuctionState::Canceled => {
                    return Err(Error::AuctionNotStarted)
                }
            }
            if env.ledger().timestamp() < auction.expires_at {
                return Err(Error::AuctionNotExpired);
            }
            let winner = auction
                .highest_bidder
                .clone()
                .ok_or(Error::AuctionNotStarted)?;

            let amount = escrow::take(&env, auction_id, &Participant::Bidder(winner.clone()));
            escrow::credit(
                &env,
                auction_id,
                &Participant::Bidder(auction.seller.clone()),
                amount,
            );
            auction.highest_bidder = None;
            auction.state = AuctionState::Resolved;
            storage::save_auction(&env, &auction);

            let contract = env.current_contract_address();
            CustodianClient::new(&env, &config.custodian).transfer_from(
                &contract,
                &contract,
                &winner,
                &auction.asset_id,
            );

            events::emit_auction_resolved(&env, auction_id, winner, amount);
            log!(&env, "auction resolved", auction_id, amount);

            Ok(())
        })
    }

    /// Cancel an auction that has not received a bid.
    ///
    /// # Errors
    ///
    /// - [`Error::Unauthorized`]          — `seller` did not create the auction.
    /// - [`Error::AuctionAlreadyStarted`] — any state other than `Created`.
    pub fn cancel(env: Env, seller: Address, auction_id: u64) -> Result<(), Error> {
        seller.require_auth();
        Self::require_config(&env)?;

        guard::non_reentrant(&env, || {
            let mut auction = Self::load(&env, auction_id)?;

            if auction.seller != seller {
                return Err(Error::Unauthorized);
            }
            if !auction.state.can_transition_to(&AuctionState::Canceled) {
                return Err(Error::AuctionAlreadyStarted);
            }

            auction.state = AuctionState::Canceled;
            storage::save_auction(&env, &auction);

            events::emit_auction_canceled(&env, auction_id);
            Ok(())
        })
    }

    // ========== VIEWS ==========

    pub fn get_escrow(env: Env, auction_id: u64, participant: Address) -> i128 {
        escrow::bidder_balance(&env, auction_id, &participant)
    }

    /// The virtual reserve entry.
    pub fn get_reserve(env: Env, auction_id: u64) -> i128 {
        escrow::balance_of(&env, auction_id, &Participant::Reserve)
    }

    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = Self::load(&env, auction_id)?;
        let amount = match &auction.highest_bidder {
            Some(bidder) => escrow::bidder_balance(&env, auction_id, bidder),
            None => 0,
        };
        Ok((auction.highest_bidder, amount))
    }

    // ========== INTERNAL HELPERS ==========

    fn require_config(env: &Env) -> Result<Config, Error> {
        let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
        storage::extend_instance_ttl(env);
        Ok(config)
    }

    fn load(env: &Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(env, auction_id).ok_or(Error::AuctionNotFound)
    }
}

#[cfg(test)]
mod test;
