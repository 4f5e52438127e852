use crate::types::{DataKey, Token};
use soroban_sdk::{Address, Env};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_auction_authority(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::AuctionAuthority)
}

pub fn set_auction_authority(env: &Env, authority: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::AuctionAuthority, authority);
}

pub fn has_token(env: &Env, token_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Token(token_id))
}

pub fn get_token(env: &Env, token_id: u64) -> Option<Token> {
    env.storage().persistent().get(&DataKey::Token(token_id))
}

pub fn save_token(env: &Env, token_id: u64, token: &Token) {
    env.storage()
        .persistent()
        .set(&DataKey::Token(token_id), token);
}
