use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub owner: Address,
    pub metadata_uri: String,
}

#[contracttype]
pub enum DataKey {
    Admin,
    AuctionAuthority,
    Token(u64),
}
