use soroban_sdk::{contracttype, Address};

/// Auction record for a single token. One record per token id; re-listing a
/// token after settlement overwrites the finished record.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub seller: Address,
    pub reserve_price: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub finished: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Platform,
    PaymentToken,
    NftContract,
    FeeRate,
    Auction(u64),
    Bidders(u64),
    BidHistory(u64),
    Escrow(u64, Address),
}
