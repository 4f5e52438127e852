#![no_std]

mod events;
mod storage;
mod types;

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};
use types::Token;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NonExistent = 4,
    AlreadyMinted = 5,
}

#[contract]
pub struct NovaNft;

#[contractimpl]
impl NovaNft {
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        Ok(())
    }

    /// Mints `token_id` to `owner`. Anyone may mint; token ids are
    /// first-come-first-served.
    pub fn mint(
        env: Env,
        owner: Address,
        token_id: u64,
        metadata_uri: String,
    ) -> Result<(), Error> {
        owner.require_auth();

        if storage::has_token(&env, token_id) {
            return Err(Error::AlreadyMinted);
        }

        let token = Token {
            owner: owner.clone(),
            metadata_uri: metadata_uri.clone(),
        };
        storage::save_token(&env, token_id, &token);

        events::publish_minted(&env, token_id, owner, metadata_uri);
        Ok(())
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        storage::get_token(&env, token_id)
            .map(|token| token.owner)
            .ok_or(Error::NonExistent)
    }

    pub fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        storage::get_token(&env, token_id)
            .map(|token| token.metadata_uri)
            .ok_or(Error::NonExistent)
    }

    /// Moves `token_id` from `from` to `to`. `from` must be the current
    /// owner. Before an auction authority is wired the owner authorizes the
    /// transfer themselves; once wired, only the authority may move tokens,
    /// which puts the auction contract in sole control of custody.
    pub fn transfer(env: Env, token_id: u64, from: Address, to: Address) -> Result<(), Error> {
        let mut token = storage::get_token(&env, token_id).ok_or(Error::NonExistent)?;

        if token.owner != from {
            return Err(Error::Unauthorized);
        }

        match storage::get_auction_authority(&env) {
            Some(authority) => authority.require_auth(),
            None => from.require_auth(),
        }

        token.owner = to.clone();
        storage::save_token(&env, token_id, &token);

        events::publish_transferred(&env, token_id, from, to);
        Ok(())
    }

    /// Registers the auction contract as the custody authority. One-time
    /// wiring step, administrator only.
    pub fn set_auction_authority(
        env: Env,
        caller: Address,
        authority: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        let admin = storage::get_admin(&env).ok_or(Error::NotInitialized)?;
        if admin != caller {
            return Err(Error::Unauthorized);
        }

        storage::set_auction_authority(&env, &authority);

        events::publish_authority_updated(&env, authority);
        Ok(())
    }

    pub fn get_auction_authority(env: Env) -> Option<Address> {
        storage::get_auction_authority(&env)
    }
}
