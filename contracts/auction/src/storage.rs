use crate::types::{Auction, Bid, DataKey};
use soroban_sdk::{Address, Env, Vec};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_platform(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Platform)
}

pub fn set_platform(env: &Env, platform: &Address) {
    env.storage().instance().set(&DataKey::Platform, platform);
}

pub fn get_payment_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_nft_contract(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::NftContract)
}

pub fn set_nft_contract(env: &Env, nft: &Address) {
    env.storage().instance().set(&DataKey::NftContract, nft);
}

pub fn get_fee_rate(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::FeeRate).unwrap_or(0)
}

pub fn set_fee_rate(env: &Env, rate: u32) {
    env.storage().instance().set(&DataKey::FeeRate, &rate);
}

pub fn get_auction(env: &Env, token_id: u64) -> Option<Auction> {
    env.storage().persistent().get(&DataKey::Auction(token_id))
}

pub fn save_auction(env: &Env, token_id: u64, auction: &Auction) {
    env.storage()
        .persistent()
        .set(&DataKey::Auction(token_id), auction);
}

pub fn get_bidders(env: &Env, token_id: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Bidders(token_id))
        .unwrap_or(Vec::new(env))
}

pub fn add_bidder(env: &Env, token_id: u64, bidder: &Address) {
    let mut bidders = get_bidders(env, token_id);
    bidders.push_back(bidder.clone());
    env.storage()
        .persistent()
        .set(&DataKey::Bidders(token_id), &bidders);
}

pub fn clear_bidders(env: &Env, token_id: u64) {
    env.storage().persistent().remove(&DataKey::Bidders(token_id));
}

pub fn get_bid_history(env: &Env, token_id: u64) -> Vec<Bid> {
    env.storage()
        .persistent()
        .get(&DataKey::BidHistory(token_id))
        .unwrap_or(Vec::new(env))
}

pub fn add_bid_to_history(env: &Env, token_id: u64, bid: Bid) {
    let mut history = get_bid_history(env, token_id);
    history.push_back(bid);
    env.storage()
        .persistent()
        .set(&DataKey::BidHistory(token_id), &history);
}

pub fn clear_bid_history(env: &Env, token_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::BidHistory(token_id));
}

pub fn get_escrow(env: &Env, token_id: u64, bidder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Escrow(token_id, bidder.clone()))
        .unwrap_or(0)
}

pub fn add_escrow(env: &Env, token_id: u64, bidder: &Address, amount: i128) {
    let total = get_escrow(env, token_id, bidder) + amount;
    env.storage()
        .persistent()
        .set(&DataKey::Escrow(token_id, bidder.clone()), &total);
}

pub fn remove_escrow(env: &Env, token_id: u64, bidder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Escrow(token_id, bidder.clone()));
}
