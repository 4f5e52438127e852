
use crate::{AuctionContract, AuctionContractClient};
use nova_nft::{NovaNft, NovaNftClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env, String,
};

pub const TOKEN_ID: u64 = 1;
pub const RESERVE: i128 = 1_000;
pub const FEE_RATE: u32 = 500;
pub const NOW: u64 = 1_700_000_000;

pub struct TestCtx {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub contract_id: Address,
    pub nft: NovaNftClient<'static>,
    pub admin: Address,
    pub platform: Address,
    pub seller: Address,
    pub bidder1: Address,
    pub bidder2: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

pub fn setup_test() -> TestCtx {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, AuctionContract);
    let client = AuctionContractClient::new(&env, &contract_id);

    let nft_id = env.register_contract(None, NovaNft);
    let nft = NovaNftClient::new(&env, &nft_id);

    let admin = Address::generate(&env);
    let platform = Address::generate(&env);
    let seller = Address::generate(&env);
    let bidder1 = Address::generate(&env);
    let bidder2 = Address::generate(&env);

    let token_issuer = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_issuer);
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin = token::StellarAssetClient::new(&env, &token_address);

    token_admin.mint(&bidder1, &1_000_000);
    token_admin.mint(&bidder2, &1_000_000);

    nft.initialize(&admin);
    nft.mint(&seller, &TOKEN_ID, &String::from_str(&env, "ipfs://abc"));

    client.initialize(&admin, &nft_id, &token_address, &platform, &FEE_RATE);
    nft.set_auction_authority(&admin, &contract_id);

    set_time(&env, NOW);

    TestCtx {
        env,
        client,
        contract_id,
        nft,
        admin,
        platform,
        seller,
        bidder1,
        bidder2,
        token,
        token_admin,
    }
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().set(LedgerInfo {
        timestamp,
        protocol_version: 20,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 10,
        min_persistent_entry_ttl: 10,
        max_entry_ttl: 3110400,
    });
}

/// Lists TOKEN_ID with a window that is already open and a reserve of 1_000.
pub fn open_auction(ctx: &TestCtx) {
    ctx.client
        .create_auction(&ctx.seller, &TOKEN_ID, &(NOW - 1), &(NOW + 1_000), &RESERVE);
}

/// Moves the end of the bidding window into the past, admin style.
pub fn close_bidding(ctx: &TestCtx) {
    ctx.client.update_auction(&ctx.admin, &TOKEN_ID, &NOW);
}
