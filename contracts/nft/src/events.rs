use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEvent {
    pub token_id: u64,
    pub owner: Address,
    pub metadata_uri: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferredEvent {
    pub token_id: u64,
    pub from: Address,
    pub to: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorityUpdatedEvent {
    pub authority: Address,
}

pub fn publish_minted(e: &Env, token_id: u64, owner: Address, metadata_uri: String) {
    let event = MintedEvent {
        token_id,
        owner,
        metadata_uri,
    };
    e.events().publish(("nft", "minted"), event);
}

pub fn publish_transferred(e: &Env, token_id: u64, from: Address, to: Address) {
    let event = TransferredEvent { token_id, from, to };
    e.events().publish(("nft", "transferred"), event);
}

pub fn publish_authority_updated(e: &Env, authority: Address) {
    let event = AuthorityUpdatedEvent { authority };
    e.events().publish(("nft", "authority"), event);
}
