#![no_std]

mod admin;
mod events;
mod registry;
mod storage;
mod types;

use registry::RegistryClient;
use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, Vec};
use types::{Auction, Bid};

/// Maximum fee rate in basis points (100%).
const MAX_FEE_RATE: u32 = 10000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    /// Referenced token or auction record does not exist.
    NonExistent = 4,
    /// An unfinished auction already exists for this token.
    AuctionAlreadyOpen = 5,
    /// The auction has been settled.
    AuctionFinished = 6,
    /// Bidding has not opened yet.
    AuctionNotStarted = 7,
    /// The bidding window elapsed but the auction is not settled yet.
    BiddingClosed = 8,
    /// The bidding window has not elapsed, settlement is not possible.
    AuctionNotEnded = 9,
    BidTooLow = 10,
    InvalidSchedule = 11,
    InvalidFeeRate = 12,
}

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    /// Wires the contract: administrator, token registry, payment token and
    /// the platform account receiving fees. `fee_rate` is in basis points.
    pub fn initialize(
        env: Env,
        admin: Address,
        nft: Address,
        payment_token: Address,
        platform: Address,
        fee_rate: u32,
    ) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if fee_rate > MAX_FEE_RATE {
            return Err(Error::InvalidFeeRate);
        }

        storage::set_admin(&env, &admin);
        storage::set_nft_contract(&env, &nft);
        storage::set_payment_token(&env, &payment_token);
        storage::set_platform(&env, &platform);
        storage::set_fee_rate(&env, fee_rate);

        events::publish_initialized(&env, admin, platform, fee_rate);
        Ok(())
    }

    /// Lists `token_id` for bidding. The seller must own the token; custody
    /// moves to this contract until settlement. A token with an unfinished
    /// auction cannot be listed again.
    pub fn create_auction(
        env: Env,
        seller: Address,
        token_id: u64,
        start_time: u64,
        end_time: u64,
        reserve_price: i128,
    ) -> Result<(), Error> {
        seller.require_auth();

        if start_time > end_time {
            return Err(Error::InvalidSchedule);
        }

        if let Some(existing) = storage::get_auction(&env, token_id) {
            if !existing.finished {
                return Err(Error::AuctionAlreadyOpen);
            }
        }

        let nft = storage::get_nft_contract(&env).ok_or(Error::NotInitialized)?;
        let registry = RegistryClient::new(&env, &nft);

        let owner = match registry.try_owner_of(&token_id) {
            Ok(Ok(owner)) => owner,
            _ => return Err(Error::NonExistent),
        };
        if owner != seller {
            return Err(Error::Unauthorized);
        }

        registry.transfer(&token_id, &seller, &env.current_contract_address());

        let auction = Auction {
            seller: seller.clone(),
            reserve_price,
            start_time,
            end_time,
            highest_bid: 0,
            highest_bidder: None,
            finished: false,
        };
        storage::save_auction(&env, token_id, &auction);

        // Stale escrow bookkeeping from a previous listing of the same token.
        storage::clear_bidders(&env, token_id);
        storage::clear_bid_history(&env, token_id);

        events::publish_auction_created(&env, token_id, seller, start_time, end_time, reserve_price);
        Ok(())
    }

    /// Replaces the end of the bidding window. Administrator only; the new
    /// end time is not validated, moving it into the past closes bidding and
    /// makes the auction settleable immediately. Settled records are
    /// immutable.
    pub fn update_auction(
        env: Env,
        caller: Address,
        token_id: u64,
        new_end_time: u64,
    ) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;

        let mut auction = storage::get_auction(&env, token_id).ok_or(Error::NonExistent)?;
        if auction.finished {
            return Err(Error::AuctionFinished);
        }
        auction.end_time = new_end_time;
        storage::save_auction(&env, token_id, &auction);

        events::publish_schedule_updated(&env, token_id, new_end_time);
        Ok(())
    }

    /// Places a bid. The amount is escrowed by this contract on top of any
    /// previous escrow of the same bidder; nothing is refunded to the outbid
    /// leader until settlement. The bid must beat both the reserve price and
    /// the current leading bid on face value.
    pub fn bid(env: Env, token_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction = storage::get_auction(&env, token_id).ok_or(Error::NonExistent)?;

        if auction.finished {
            return Err(Error::AuctionFinished);
        }

        let now = env.ledger().timestamp();
        if now < auction.start_time {
            return Err(Error::AuctionNotStarted);
        }
        if now >= auction.end_time {
            return Err(Error::BiddingClosed);
        }

        let floor = if auction.highest_bid > auction.reserve_price {
            auction.highest_bid
        } else {
            auction.reserve_price
        };
        if amount <= floor {
            return Err(Error::BidTooLow);
        }

        let payment_token = storage::get_payment_token(&env).ok_or(Error::NotInitialized)?;
        let token_client = token::TokenClient::new(&env, &payment_token);
        token_client.transfer(&bidder, &env.current_contract_address(), &amount);

        if storage::get_escrow(&env, token_id, &bidder) == 0 {
            storage::add_bidder(&env, token_id, &bidder);
        }
        storage::add_escrow(&env, token_id, &bidder, amount);

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        storage::save_auction(&env, token_id, &auction);

        storage::add_bid_to_history(
            &env,
            token_id,
            Bid {
                bidder: bidder.clone(),
                amount,
                timestamp: now,
            },
        );

        events::publish_bid_placed(&env, token_id, bidder, amount);
        Ok(())
    }

    /// Settles an auction whose bidding window has elapsed. Seller only.
    ///
    /// With no bids the token simply returns to the seller. Otherwise the
    /// token goes to the highest bidder, the winning bid is split between
    /// platform fee and seller proceeds at the fee rate in effect now, every
    /// losing bidder is refunded their full escrow and the winner is refunded
    /// whatever they escrowed beyond the winning bid. The record is marked
    /// finished before any transfer leaves the contract, and each escrow
    /// entry is cleared before its own refund is paid, so a payee calling
    /// back in observes the terminal state.
    pub fn finish(env: Env, token_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut auction = storage::get_auction(&env, token_id).ok_or(Error::NonExistent)?;

        if caller != auction.seller {
            return Err(Error::Unauthorized);
        }
        if env.ledger().timestamp() < auction.end_time {
            return Err(Error::AuctionNotEnded);
        }
        if auction.finished {
            return Err(Error::AuctionFinished);
        }

        auction.finished = true;
        storage::save_auction(&env, token_id, &auction);

        let nft = storage::get_nft_contract(&env).ok_or(Error::NotInitialized)?;
        let registry = RegistryClient::new(&env, &nft);
        let contract_address = env.current_contract_address();

        let winner = match auction.highest_bidder {
            Some(ref winner) => winner.clone(),
            None => {
                registry.transfer(&token_id, &contract_address, &auction.seller);
                events::publish_auction_finished(&env, token_id, None, 0, 0);
                return Ok(());
            }
        };

        let fee = calculate_fee(auction.highest_bid, storage::get_fee_rate(&env));
        let proceeds = auction.highest_bid - fee;

        let payment_token = storage::get_payment_token(&env).ok_or(Error::NotInitialized)?;
        let token_client = token::TokenClient::new(&env, &payment_token);

        let bidders = storage::get_bidders(&env, token_id);
        for bidder in bidders.iter() {
            let escrowed = storage::get_escrow(&env, token_id, &bidder);
            storage::remove_escrow(&env, token_id, &bidder);

            let refund = if bidder == winner {
                // The winning bid stays behind to fund fee and proceeds; any
                // earlier escrow of the winner above it goes back.
                escrowed - auction.highest_bid
            } else {
                escrowed
            };
            if refund > 0 {
                token_client.transfer(&contract_address, &bidder, &refund);
            }
        }

        registry.transfer(&token_id, &contract_address, &winner);

        if fee > 0 {
            let platform = storage::get_platform(&env).ok_or(Error::NotInitialized)?;
            token_client.transfer(&contract_address, &platform, &fee);
        }
        token_client.transfer(&contract_address, &auction.seller, &proceeds);

        events::publish_auction_finished(&env, token_id, Some(winner), auction.highest_bid, fee);
        Ok(())
    }

    /// Updates the platform fee rate. Administrator only; the new rate
    /// applies to every settlement from now on, including auctions created
    /// or bid on under the old rate.
    pub fn set_fee_rate(env: Env, caller: Address, new_rate: u32) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;

        if new_rate > MAX_FEE_RATE {
            return Err(Error::InvalidFeeRate);
        }

        let old_rate = storage::get_fee_rate(&env);
        storage::set_fee_rate(&env, new_rate);

        events::publish_fee_rate_updated(&env, old_rate, new_rate);
        Ok(())
    }

    pub fn get_auction(env: Env, token_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, token_id).ok_or(Error::NonExistent)
    }

    pub fn get_highest_bid(env: Env, token_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(&env, token_id).ok_or(Error::NonExistent)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    pub fn get_bid_history(env: Env, token_id: u64) -> Result<Vec<Bid>, Error> {
        if storage::get_auction(&env, token_id).is_none() {
            return Err(Error::NonExistent);
        }
        Ok(storage::get_bid_history(&env, token_id))
    }

    pub fn get_escrowed(env: Env, token_id: u64, bidder: Address) -> i128 {
        storage::get_escrow(&env, token_id, &bidder)
    }

    pub fn get_fee_rate(env: Env) -> u32 {
        storage::get_fee_rate(&env)
    }
}

fn calculate_fee(amount: i128, fee_rate: u32) -> i128 {
    (amount * fee_rate as i128) / 10000
}

#[cfg(test)]
mod test;
