use soroban_sdk::{contractclient, contracterror, Address};

/// Error codes of the token registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NonExistent = 4,
    AlreadyMinted = 5,
}

/// Interface consumed from the token registry contract. The auction only
/// needs ownership lookups and custody transfers; minting and metadata stay
/// on the registry side.
#[allow(dead_code)]
#[contractclient(name = "RegistryClient")]
pub trait TokenRegistry {
    /// Returns the current owner of `token_id`, or `NonExistent`.
    fn owner_of(token_id: u64) -> Result<Address, RegistryError>;

    /// Moves `token_id` from `from` to `to`. `from` must be the current
    /// owner; authorization is checked by the registry.
    fn transfer(token_id: u64, from: Address, to: Address) -> Result<(), RegistryError>;
}
